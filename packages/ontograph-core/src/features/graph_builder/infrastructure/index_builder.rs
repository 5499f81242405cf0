//! Phase 4: index assignment and final adjacency
//!
//! Indices are assigned breadth-first from the root with children
//! visited in identifier order, so identical input always yields
//! identical indices. Nodes outside the root's component (when allowed)
//! follow, seeded in identifier order.

use std::collections::VecDeque;

use tracing::debug;

use super::node_registry::StagedNodes;
use crate::features::ontology_graph::{CsrArray, CsrOntologyGraph, NodeIdx};

const UNASSIGNED: NodeIdx = NodeIdx::MAX;

/// `staging -> final` index map
pub(crate) fn assign_indices(children: &CsrArray, root: NodeIdx, seed_order: &[NodeIdx]) -> Vec<NodeIdx> {
    let mut final_of = vec![UNASSIGNED; children.node_count()];
    let mut next: NodeIdx = 0;

    let mut queue = VecDeque::new();
    for &seed in std::iter::once(&root).chain(seed_order) {
        if final_of[seed as usize] != UNASSIGNED {
            continue;
        }
        final_of[seed as usize] = next;
        next += 1;
        queue.push_back(seed);

        while let Some(node) = queue.pop_front() {
            for &child in children.row(node) {
                if final_of[child as usize] == UNASSIGNED {
                    final_of[child as usize] = next;
                    next += 1;
                    queue.push_back(child);
                }
            }
        }
    }

    final_of
}

/// Renumber the staging graph and assemble the index
pub(crate) fn build_index(
    staged: StagedNodes,
    pairs: &[(NodeIdx, NodeIdx)],
    final_of: &[NodeIdx],
    root: NodeIdx,
) -> CsrOntologyGraph {
    let n = staged.len();

    let mut entries: Vec<_> = staged
        .ids
        .into_iter()
        .zip(staged.alt_ids)
        .zip(final_of.iter().copied())
        .collect();
    entries.sort_unstable_by_key(|&(_, fin)| fin);
    let (nodes, alt_ids): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .map(|((id, alts), _)| (id, alts.into_boxed_slice()))
        .unzip();

    // (child, parent) in final indices; sorting yields ascending runs
    let mut parent_pairs: Vec<(NodeIdx, NodeIdx)> = pairs
        .iter()
        .map(|&(parent, child)| (final_of[child as usize], final_of[parent as usize]))
        .collect();
    parent_pairs.sort_unstable();
    let parents = CsrArray::from_pairs(n, &parent_pairs);

    debug!(nodes = n, edges = parent_pairs.len(), "assembled CSR index");
    CsrOntologyGraph::from_parts(nodes, alt_ids, parents, final_of[root as usize])
}
