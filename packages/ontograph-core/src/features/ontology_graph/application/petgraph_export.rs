//! Export to petgraph
//!
//! Node `i` of the exported graph is node index `i` of the source graph;
//! edges point from child to parent.

use petgraph::graph::{DiGraph, NodeIndex};

use crate::features::ontology_graph::domain::{NodeIdx, OntologyGraph};
use crate::shared::models::TermId;

pub fn to_petgraph<G: OntologyGraph>(graph: &G) -> DiGraph<TermId, ()> {
    let n = graph.node_count();
    let edges: usize = (0..n)
        .map(|i| graph.parents_of_idx(i as NodeIdx).len())
        .sum();

    let mut out = DiGraph::with_capacity(n, edges);
    for id in graph.term_ids() {
        out.add_node(id.clone());
    }
    for child in 0..n {
        for &parent in graph.parents_of_idx(child as NodeIdx) {
            out.add_edge(NodeIndex::new(child), NodeIndex::new(parent as usize), ());
        }
    }
    out
}
