//! Lazy traversal iterators
//!
//! Every call to a closure query creates a fresh frontier; nothing is
//! shared between iterators, so a consumed walk is restarted by calling
//! the query again.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use rustc_hash::FxHashSet;

use super::csr::NodeIdx;
use super::graph::OntologyGraph;
use crate::shared::models::TermId;

/// Edge direction of a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards parents (ancestors)
    Up,
    /// Towards children (descendants)
    Down,
}

impl Direction {
    #[inline]
    pub(crate) fn step<'g, G: OntologyGraph + ?Sized>(self, graph: &'g G, idx: NodeIdx) -> &'g [NodeIdx] {
        match self {
            Direction::Up => graph.parents_of_idx(idx),
            Direction::Down => graph.children_of_idx(idx),
        }
    }
}

/// Direct neighbors of one node, in adjacency order
pub struct Neighbors<'g, G: ?Sized> {
    graph: &'g G,
    run: std::slice::Iter<'g, NodeIdx>,
}

impl<'g, G: OntologyGraph + ?Sized> Neighbors<'g, G> {
    pub(crate) fn new(graph: &'g G, run: &'g [NodeIdx]) -> Self {
        Self {
            graph,
            run: run.iter(),
        }
    }
}

impl<'g, G: OntologyGraph + ?Sized> Iterator for Neighbors<'g, G> {
    type Item = &'g TermId;

    fn next(&mut self) -> Option<Self::Item> {
        self.run.next().map(|&idx| self.graph.term_id_at(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.run.size_hint()
    }
}

impl<G: OntologyGraph + ?Sized> ExactSizeIterator for Neighbors<'_, G> {}
impl<G: OntologyGraph + ?Sized> FusedIterator for Neighbors<'_, G> {}

/// Breadth-first closure over node indices.
///
/// Each reachable node is yielded once, in discovery order. The source
/// comes first when `include_source` is set and is never yielded
/// otherwise.
pub struct ClosureIndices<'g, G: ?Sized> {
    graph: &'g G,
    direction: Direction,
    source: NodeIdx,
    include_source: bool,
    queue: VecDeque<NodeIdx>,
    seen: FxHashSet<NodeIdx>,
}

impl<'g, G: OntologyGraph + ?Sized> ClosureIndices<'g, G> {
    pub(crate) fn new(graph: &'g G, source: NodeIdx, direction: Direction, include_source: bool) -> Self {
        let mut seen = FxHashSet::default();
        seen.insert(source);
        Self {
            graph,
            direction,
            source,
            include_source,
            queue: VecDeque::from([source]),
            seen,
        }
    }
}

impl<G: OntologyGraph + ?Sized> Iterator for ClosureIndices<'_, G> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<NodeIdx> {
        loop {
            let idx = self.queue.pop_front()?;
            for &next in self.direction.step(self.graph, idx) {
                if self.seen.insert(next) {
                    self.queue.push_back(next);
                }
            }
            if idx != self.source || self.include_source {
                return Some(idx);
            }
        }
    }
}

impl<G: OntologyGraph + ?Sized> FusedIterator for ClosureIndices<'_, G> {}

/// Breadth-first closure yielding identifiers
pub struct Closure<'g, G: ?Sized> {
    inner: ClosureIndices<'g, G>,
}

impl<'g, G: OntologyGraph + ?Sized> Closure<'g, G> {
    pub(crate) fn new(inner: ClosureIndices<'g, G>) -> Self {
        Self { inner }
    }
}

impl<'g, G: OntologyGraph + ?Sized> Iterator for Closure<'g, G> {
    type Item = &'g TermId;

    fn next(&mut self) -> Option<&'g TermId> {
        let graph = self.inner.graph;
        self.inner.next().map(|idx| graph.term_id_at(idx))
    }
}

impl<G: OntologyGraph + ?Sized> FusedIterator for Closure<'_, G> {}

/// Primary identifiers in node-index order
pub struct TermIds<'g, G: ?Sized> {
    graph: &'g G,
    range: std::ops::Range<usize>,
}

impl<'g, G: OntologyGraph + ?Sized> TermIds<'g, G> {
    pub(crate) fn new(graph: &'g G) -> Self {
        Self {
            graph,
            range: 0..graph.node_count(),
        }
    }
}

impl<'g, G: OntologyGraph + ?Sized> Iterator for TermIds<'g, G> {
    type Item = &'g TermId;

    fn next(&mut self) -> Option<&'g TermId> {
        self.range
            .next()
            .map(|i| self.graph.term_id_at(i as NodeIdx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<G: OntologyGraph + ?Sized> ExactSizeIterator for TermIds<'_, G> {}

/// Early-exit breadth-first search for `target` from `source`
pub(crate) fn reaches<G: OntologyGraph + ?Sized>(
    graph: &G,
    source: NodeIdx,
    target: NodeIdx,
    direction: Direction,
) -> bool {
    if source == target {
        return false;
    }
    ClosureIndices::new(graph, source, direction, false).any(|idx| idx == target)
}
