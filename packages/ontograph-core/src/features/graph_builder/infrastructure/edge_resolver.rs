//! Phase 2: edge resolution
//!
//! Endpoints may be primary or alternate ids. Unknown endpoints are
//! rejected or dropped per [`DanglingEdgePolicy`]; self-loops are cycles.
//!
//! [`DanglingEdgePolicy`]: crate::config::DanglingEdgePolicy

use tracing::{debug, warn};

use super::issues::IssueSink;
use super::node_registry::StagedNodes;
use crate::config::GraphBuildConfig;
use crate::features::graph_builder::domain::{DirectedEdge, GraphBuilderError};
use crate::features::ontology_graph::NodeIdx;

/// Resolved `(parent, child)` staging pairs, sorted and de-duplicated
pub(crate) fn resolve_edges(
    edges: &[DirectedEdge],
    staged: &StagedNodes,
    config: &GraphBuildConfig,
    sink: &mut IssueSink,
) -> Result<Vec<(NodeIdx, NodeIdx)>, GraphBuilderError> {
    let mut pairs = Vec::with_capacity(edges.len());
    let mut dropped = 0usize;

    for edge in edges {
        let child = staged.lookup.get(&edge.child).copied();
        let parent = staged.lookup.get(&edge.parent).copied();

        let (child, parent) = match (child, parent) {
            (Some(c), Some(p)) => (c, p),
            (c, _) => {
                if config.drops_dangling() {
                    dropped += 1;
                    continue;
                }
                let missing = if c.is_none() { &edge.child } else { &edge.parent };
                sink.report(GraphBuilderError::UnknownIdentifier {
                    id: missing.clone(),
                    child: edge.child.clone(),
                    parent: edge.parent.clone(),
                })?;
                continue;
            }
        };

        if child == parent {
            let id = staged.ids[child as usize].clone();
            sink.report(GraphBuilderError::CycleDetected {
                cycle: vec![id.clone(), id],
            })?;
            continue;
        }
        pairs.push((parent, child));
    }

    if dropped > 0 {
        warn!(dropped, "dropped edges with undeclared endpoints");
    }

    let resolved = pairs.len();
    pairs.sort_unstable();
    pairs.dedup();
    if pairs.len() < resolved {
        warn!(
            duplicates = resolved - pairs.len(),
            "ignored duplicate is_a edges"
        );
    }

    debug!(edges = pairs.len(), "resolved edges");
    Ok(pairs)
}
