//! Graph edge distance
//!
//! Shortest path length in the undirected is_a graph, by bidirectional
//! breadth-first search. Each round expands one full level of the
//! smaller frontier; the first round in which the two searches meet
//! yields the shortest length as the minimum over that round's meetings.

use rustc_hash::FxHashMap;

use crate::errors::Result;
use crate::features::ontology_graph::{NodeIdx, OntologyGraph};
use crate::features::similarity::domain::TermDistance;
use crate::shared::models::TermId;

pub struct EdgeDistance<'g, G> {
    graph: &'g G,
}

impl<'g, G: OntologyGraph> EdgeDistance<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Hop count, or `None` when no undirected path exists
    pub fn edge_distance(&self, a: &TermId, b: &TermId) -> Result<Option<u32>> {
        let a = self.graph.resolve(a)?;
        let b = self.graph.resolve(b)?;
        Ok(self.shortest_path(a, b))
    }

    fn shortest_path(&self, source: NodeIdx, target: NodeIdx) -> Option<u32> {
        if source == target {
            return Some(0);
        }

        let mut forward = Side::new(source);
        let mut backward = Side::new(target);

        while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
            let (expand, other) = if forward.frontier.len() <= backward.frontier.len() {
                (&mut forward, &backward)
            } else {
                (&mut backward, &forward)
            };
            if let Some(length) = expand.advance(self.graph, other) {
                return Some(length);
            }
        }
        None
    }
}

struct Side {
    dist: FxHashMap<NodeIdx, u32>,
    frontier: Vec<NodeIdx>,
}

impl Side {
    fn new(start: NodeIdx) -> Self {
        let mut dist = FxHashMap::default();
        dist.insert(start, 0);
        Self {
            dist,
            frontier: vec![start],
        }
    }

    /// Expand one level; returns the best meeting length, if any
    fn advance<G: OntologyGraph>(&mut self, graph: &G, other: &Side) -> Option<u32> {
        let mut next = Vec::new();
        let mut best: Option<u32> = None;

        for &node in &self.frontier {
            let d = self.dist[&node] + 1;
            let neighbors = graph
                .parents_of_idx(node)
                .iter()
                .chain(graph.children_of_idx(node));
            for &neighbor in neighbors {
                if let Some(&rest) = other.dist.get(&neighbor) {
                    let length = d + rest;
                    best = Some(best.map_or(length, |b| b.min(length)));
                }
                if let std::collections::hash_map::Entry::Vacant(slot) = self.dist.entry(neighbor) {
                    slot.insert(d);
                    next.push(neighbor);
                }
            }
        }

        self.frontier = next;
        best
    }
}

impl<G: OntologyGraph> TermDistance for EdgeDistance<'_, G> {
    /// Hop count; `f64::INFINITY` between disconnected components
    fn distance(&self, a: &TermId, b: &TermId) -> Result<f64> {
        Ok(self
            .edge_distance(a, b)?
            .map_or(f64::INFINITY, f64::from))
    }
}
