//! Hierarchy capability
//!
//! Implementors supply index-level primitives; every identifier-level
//! query is provided on top of them. Alternate ids resolve to their
//! primary node in every query, and an identifier the graph does not know
//! fails with [`OntologyError::UnknownIdentifier`].

use super::csr::NodeIdx;
use super::traversal::{reaches, Closure, ClosureIndices, Direction, Neighbors, TermIds};
use crate::errors::{OntologyError, Result};
use crate::shared::models::TermId;

/// Read-only is_a hierarchy
pub trait OntologyGraph: Send + Sync {
    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    fn root_idx(&self) -> NodeIdx;

    fn node_count(&self) -> usize;

    /// Index of a primary or alternate identifier
    fn idx_of(&self, id: &TermId) -> Option<NodeIdx>;

    /// Primary identifier of a node. Panics on an out-of-range index.
    fn term_id_at(&self, idx: NodeIdx) -> &TermId;

    fn alt_term_ids_at(&self, idx: NodeIdx) -> &[TermId];

    fn parents_of_idx(&self, idx: NodeIdx) -> &[NodeIdx];

    fn children_of_idx(&self, idx: NodeIdx) -> &[NodeIdx];

    /// Shortest parent-edge distance to the root; `None` for nodes
    /// outside the root's component
    fn depth_of_idx(&self, idx: NodeIdx) -> Option<u32>;

    /// Human-readable name, if the implementor carries term metadata
    fn term_label(&self, _id: &TermId) -> Option<&str> {
        None
    }

    // ------------------------------------------------------------------
    // Identifier queries
    // ------------------------------------------------------------------

    fn root(&self) -> &TermId {
        self.term_id_at(self.root_idx())
    }

    fn size(&self) -> usize {
        self.node_count()
    }

    fn contains(&self, id: &TermId) -> bool {
        self.idx_of(id).is_some()
    }

    fn resolve(&self, id: &TermId) -> Result<NodeIdx> {
        self.idx_of(id).ok_or_else(|| OntologyError::unknown(id))
    }

    /// Primary identifier for a primary or alternate id
    fn primary_term_id(&self, id: &TermId) -> Result<&TermId> {
        Ok(self.term_id_at(self.resolve(id)?))
    }

    fn is_alternate_id(&self, id: &TermId) -> Result<bool> {
        let idx = self.resolve(id)?;
        Ok(self.term_id_at(idx) != id)
    }

    fn depth(&self, id: &TermId) -> Result<Option<u32>> {
        Ok(self.depth_of_idx(self.resolve(id)?))
    }

    fn term_ids(&self) -> TermIds<'_, Self>
    where
        Self: Sized,
    {
        TermIds::new(self)
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Direct parents in adjacency order
    fn get_parents(&self, id: &TermId) -> Result<Neighbors<'_, Self>>
    where
        Self: Sized,
    {
        let idx = self.resolve(id)?;
        Ok(Neighbors::new(self, self.parents_of_idx(idx)))
    }

    /// Direct children in adjacency order
    fn get_children(&self, id: &TermId) -> Result<Neighbors<'_, Self>>
    where
        Self: Sized,
    {
        let idx = self.resolve(id)?;
        Ok(Neighbors::new(self, self.children_of_idx(idx)))
    }

    /// Lazy upward closure in BFS discovery order
    fn get_ancestors(&self, id: &TermId, include_source: bool) -> Result<Closure<'_, Self>>
    where
        Self: Sized,
    {
        let idx = self.resolve(id)?;
        Ok(Closure::new(self.ancestor_indices(idx, include_source)))
    }

    /// Lazy downward closure in BFS discovery order
    fn get_descendants(&self, id: &TermId, include_source: bool) -> Result<Closure<'_, Self>>
    where
        Self: Sized,
    {
        let idx = self.resolve(id)?;
        Ok(Closure::new(self.descendant_indices(idx, include_source)))
    }

    fn ancestor_indices(&self, idx: NodeIdx, include_source: bool) -> ClosureIndices<'_, Self>
    where
        Self: Sized,
    {
        ClosureIndices::new(self, idx, Direction::Up, include_source)
    }

    fn descendant_indices(&self, idx: NodeIdx, include_source: bool) -> ClosureIndices<'_, Self>
    where
        Self: Sized,
    {
        ClosureIndices::new(self, idx, Direction::Down, include_source)
    }

    // ------------------------------------------------------------------
    // Relationship predicates
    // ------------------------------------------------------------------

    /// True iff `sub` is a proper ancestor of `obj`
    fn is_ancestor_of(&self, sub: &TermId, obj: &TermId) -> Result<bool> {
        let sub = self.resolve(sub)?;
        let obj = self.resolve(obj)?;
        Ok(reaches(self, obj, sub, Direction::Up))
    }

    /// True iff `sub` is a proper descendant of `obj`
    fn is_descendant_of(&self, sub: &TermId, obj: &TermId) -> Result<bool> {
        self.is_ancestor_of(obj, sub)
    }

    /// True iff `sub` is a direct parent of `obj`
    fn is_parent_of(&self, sub: &TermId, obj: &TermId) -> Result<bool> {
        let sub = self.resolve(sub)?;
        let obj = self.resolve(obj)?;
        Ok(self.parents_of_idx(obj).contains(&sub))
    }

    /// True iff `sub` is a direct child of `obj`
    fn is_child_of(&self, sub: &TermId, obj: &TermId) -> Result<bool> {
        self.is_parent_of(obj, sub)
    }
}
