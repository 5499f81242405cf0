//! Graph Builder
//!
//! Validates raw node/edge lists and produces an immutable
//! [`CsrOntologyGraph`]. All staging state is local to one `build` call,
//! so a single builder may run concurrent builds.

use tracing::{debug, info, warn};

use super::dag_check::check_dag;
use super::edge_resolver::resolve_edges;
use super::index_builder::{assign_indices, build_index};
use super::issues::IssueSink;
use super::node_registry::register_nodes;
use crate::config::GraphBuildConfig;
use crate::features::graph_builder::domain::{GraphBuilderError, GraphInput};
use crate::features::ontology_graph::{CsrArray, CsrOntologyGraph, NodeIdx, OntologyGraph};

#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphBuildConfig,
}

impl GraphBuilder {
    pub fn new(config: GraphBuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphBuildConfig {
        &self.config
    }

    pub fn build(&self, input: &GraphInput) -> Result<CsrOntologyGraph, GraphBuilderError> {
        debug!(
            nodes = input.nodes.len(),
            edges = input.edges.len(),
            root = %input.root,
            "building ontology graph"
        );

        // Capacity (fatal)
        if input.nodes.len() >= NodeIdx::MAX as usize {
            return Err(GraphBuilderError::CapacityExceeded {
                what: "nodes",
                count: input.nodes.len(),
            });
        }
        if input.edges.len() > u32::MAX as usize {
            return Err(GraphBuilderError::CapacityExceeded {
                what: "edges",
                count: input.edges.len(),
            });
        }

        let mut sink = IssueSink::new(self.config.fail_fast());

        // Phase 1: nodes
        let staged = register_nodes(&input.nodes, &mut sink)?;
        let Some(&root) = staged.lookup.get(&input.root) else {
            sink.report(GraphBuilderError::RootNotFound(input.root.clone()))?;
            return Err(sink.into_error());
        };

        // Phase 2: edges
        let pairs = resolve_edges(&input.edges, &staged, &self.config, &mut sink)?;

        let mut children = CsrArray::from_pairs(staged.len(), &pairs);
        children.sort_runs_by(|a, b| staged.ids[*a as usize].cmp(&staged.ids[*b as usize]));

        if let Some(&parent) = children.transpose().row(root).first() {
            sink.report(GraphBuilderError::RootHasParent {
                root: staged.ids[root as usize].clone(),
                parent: staged.ids[parent as usize].clone(),
            })?;
        }

        // Phase 3: acyclicity and reachability
        let mut seed_order: Vec<NodeIdx> = (0..staged.len() as NodeIdx).collect();
        seed_order.sort_by(|a, b| staged.ids[*a as usize].cmp(&staged.ids[*b as usize]));

        let dag = check_dag(&children, root, &seed_order);
        for cycle in dag.cycles {
            sink.report(GraphBuilderError::CycleDetected {
                cycle: cycle
                    .into_iter()
                    .map(|idx| staged.ids[idx as usize].clone())
                    .collect(),
            })?;
        }

        let unreached: Vec<NodeIdx> = seed_order
            .iter()
            .copied()
            .filter(|&idx| !dag.reached[idx as usize])
            .collect();
        if !unreached.is_empty() {
            if self.config.allows_disconnected() {
                warn!(
                    count = unreached.len(),
                    "keeping nodes that are not reachable from the root"
                );
            } else {
                for idx in unreached {
                    sink.report(GraphBuilderError::DisconnectedNode(
                        staged.ids[idx as usize].clone(),
                    ))?;
                }
            }
        }

        sink.checkpoint()?;

        // Phase 4: indices and final adjacency
        let final_of = assign_indices(&children, root, &seed_order);
        let graph = build_index(staged, &pairs, &final_of, root);

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            alt_ids = graph.alt_id_count(),
            disconnected = graph.disconnected_count(),
            root = %graph.root(),
            "built ontology graph"
        );
        Ok(graph)
    }
}
