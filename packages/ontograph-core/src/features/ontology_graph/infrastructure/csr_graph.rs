//! CSR-backed graph index
//!
//! Node table, alternate ids, both adjacency views, depths and the
//! identifier lookup. Built once by the graph builder (or restored from a
//! snapshot) and never mutated afterwards, so it is freely shared across
//! threads.

use std::collections::VecDeque;

use ahash::AHashMap;

use crate::features::ontology_graph::domain::{CsrArray, NodeIdx, OntologyGraph};
use crate::shared::models::TermId;

const NO_DEPTH: u32 = u32::MAX;

#[derive(Debug, Clone)]
pub struct CsrOntologyGraph {
    nodes: Vec<TermId>,
    alt_ids: Vec<Box<[TermId]>>,
    /// Primary and alternate ids
    lookup: AHashMap<TermId, NodeIdx>,
    parents: CsrArray,
    children: CsrArray,
    root: NodeIdx,
    depths: Vec<u32>,
}

impl CsrOntologyGraph {
    /// Assemble the index from a validated node table and parents-of view.
    ///
    /// Callers guarantee: unique primary/alternate ids, `parents` passes
    /// [`CsrArray::check`] for `nodes.len()`, the root has no parents and
    /// the graph is acyclic.
    pub(crate) fn from_parts(
        nodes: Vec<TermId>,
        alt_ids: Vec<Box<[TermId]>>,
        parents: CsrArray,
        root: NodeIdx,
    ) -> Self {
        let children = parents.transpose();
        let depths = compute_depths(&children, root);

        let alt_total: usize = alt_ids.iter().map(|a| a.len()).sum();
        let mut lookup = AHashMap::with_capacity(nodes.len() + alt_total);
        for (idx, id) in nodes.iter().enumerate() {
            lookup.insert(id.clone(), idx as NodeIdx);
        }
        for (idx, alts) in alt_ids.iter().enumerate() {
            for alt in alts.iter() {
                lookup.insert(alt.clone(), idx as NodeIdx);
            }
        }

        Self {
            nodes,
            alt_ids,
            lookup,
            parents,
            children,
            root,
            depths,
        }
    }

    pub fn parents_csr(&self) -> &CsrArray {
        &self.parents
    }

    pub fn children_csr(&self) -> &CsrArray {
        &self.children
    }

    /// Number of is_a edges
    pub fn edge_count(&self) -> usize {
        self.parents.edge_count()
    }

    pub fn alt_id_count(&self) -> usize {
        self.lookup.len() - self.nodes.len()
    }

    /// Nodes outside the root's component
    pub fn disconnected_count(&self) -> usize {
        self.depths.iter().filter(|&&d| d == NO_DEPTH).count()
    }
}

/// Shortest distance from the root along child edges
fn compute_depths(children: &CsrArray, root: NodeIdx) -> Vec<u32> {
    let mut depths = vec![NO_DEPTH; children.node_count()];
    if depths.is_empty() {
        return depths;
    }

    depths[root as usize] = 0;
    let mut queue = VecDeque::from([root]);
    while let Some(idx) = queue.pop_front() {
        let next = depths[idx as usize] + 1;
        for &child in children.row(idx) {
            if depths[child as usize] == NO_DEPTH {
                depths[child as usize] = next;
                queue.push_back(child);
            }
        }
    }
    depths
}

impl OntologyGraph for CsrOntologyGraph {
    #[inline]
    fn root_idx(&self) -> NodeIdx {
        self.root
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn idx_of(&self, id: &TermId) -> Option<NodeIdx> {
        self.lookup.get(id).copied()
    }

    #[inline]
    fn term_id_at(&self, idx: NodeIdx) -> &TermId {
        &self.nodes[idx as usize]
    }

    fn alt_term_ids_at(&self, idx: NodeIdx) -> &[TermId] {
        &self.alt_ids[idx as usize]
    }

    #[inline]
    fn parents_of_idx(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.parents.row(idx)
    }

    #[inline]
    fn children_of_idx(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.children.row(idx)
    }

    fn depth_of_idx(&self, idx: NodeIdx) -> Option<u32> {
        match self.depths[idx as usize] {
            NO_DEPTH => None,
            d => Some(d),
        }
    }
}
