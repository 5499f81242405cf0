//! Resnik semantic distance
//!
//! The most informative common ancestor (MICA) of two terms is the
//! common ancestor (each term counts as its own ancestor) with the
//! highest information content; ties go to the smaller depth, then the
//! smaller identifier. Distance is `1 / (1 + IC(MICA))`, so terms whose
//! common ancestors are all uninformative sit at the maximal distance 1.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use crate::errors::Result;
use crate::features::ontology_graph::{NodeIdx, OntologyGraph};
use crate::features::similarity::domain::distance::collect_rows;
use crate::features::similarity::domain::ic::is_malformed;
use crate::features::similarity::domain::{sanitize, DistanceMatrix, InformationContentSource, TermDistance};
use crate::shared::models::TermId;

pub struct ResnikDistance<'g, G, S> {
    graph: &'g G,
    ic: S,
}

impl<'g, G: OntologyGraph, S: InformationContentSource> ResnikDistance<'g, G, S> {
    pub fn new(graph: &'g G, ic: S) -> Self {
        Self { graph, ic }
    }

    fn ic_at(&self, idx: NodeIdx) -> f64 {
        self.ic.information_content(self.graph.term_id_at(idx))
    }

    fn inclusive_ancestors(&self, idx: NodeIdx) -> FxHashSet<NodeIdx> {
        self.graph.ancestor_indices(idx, true).collect()
    }

    /// Most informative common ancestor and its IC; `None` when the
    /// terms share no ancestor at all
    pub fn mica(&self, a: &TermId, b: &TermId) -> Result<Option<(TermId, f64)>> {
        let a = self.graph.resolve(a)?;
        let b = self.graph.resolve(b)?;
        let of_a = self.inclusive_ancestors(a);

        let mut best: Option<(NodeIdx, f64)> = None;
        for candidate in self.graph.ancestor_indices(b, true) {
            if !of_a.contains(&candidate) {
                continue;
            }
            let ic = self.ic_at(candidate);
            let better = match best {
                None => true,
                Some((current, current_ic)) => {
                    ic.total_cmp(&current_ic)
                        .then_with(|| self.depth_key(current).cmp(&self.depth_key(candidate)))
                        .then_with(|| {
                            self.graph
                                .term_id_at(current)
                                .cmp(self.graph.term_id_at(candidate))
                        })
                        .is_gt()
                }
            };
            if better {
                best = Some((candidate, ic));
            }
        }

        Ok(best.map(|(idx, ic)| (self.graph.term_id_at(idx).clone(), ic)))
    }

    /// IC of the MICA; 0 without a common ancestor
    pub fn resnik_similarity(&self, a: &TermId, b: &TermId) -> Result<f64> {
        Ok(self.mica(a, b)?.map_or(0.0, |(_, ic)| ic))
    }

    fn depth_key(&self, idx: NodeIdx) -> u32 {
        self.graph.depth_of_idx(idx).unwrap_or(u32::MAX)
    }
}

#[inline]
fn to_distance(ic: f64) -> f64 {
    1.0 / (1.0 + ic)
}

impl<G: OntologyGraph, S: InformationContentSource> TermDistance for ResnikDistance<'_, G, S> {
    fn distance(&self, a: &TermId, b: &TermId) -> Result<f64> {
        Ok(to_distance(self.resnik_similarity(a, b)?))
    }

    /// Ancestor sets and IC values are computed once per call instead of
    /// once per pair
    fn distance_matrix(&self, ids: &[TermId], parallel: bool) -> Result<DistanceMatrix> {
        let nodes = ids
            .iter()
            .map(|id| self.graph.resolve(id))
            .collect::<Result<Vec<_>>>()?;
        let ancestors: Vec<FxHashSet<NodeIdx>> =
            nodes.iter().map(|&idx| self.inclusive_ancestors(idx)).collect();

        let mut ic_of: FxHashMap<NodeIdx, f64> = FxHashMap::default();
        let mut malformed = 0usize;
        for &idx in ancestors.iter().flatten() {
            ic_of.entry(idx).or_insert_with(|| {
                let raw = self.ic.lookup(self.graph.term_id_at(idx));
                if is_malformed(raw) {
                    malformed += 1;
                }
                sanitize(raw)
            });
        }
        if malformed > 0 {
            warn!(malformed, "treating negative or non-finite information content as 0");
        }
        if ids.len() > 1 && ic_of.values().all(|&ic| ic == 0.0) {
            warn!("no informative ancestor among the input terms; every distance is maximal");
        }

        let pair = |i: usize, j: usize| -> f64 {
            let (small, large) = if ancestors[i].len() <= ancestors[j].len() {
                (&ancestors[i], &ancestors[j])
            } else {
                (&ancestors[j], &ancestors[i])
            };
            let best = small
                .iter()
                .filter(|&idx| large.contains(idx))
                .map(|idx| ic_of[idx])
                .fold(0.0, f64::max);
            to_distance(best)
        };
        let row = |i: usize| -> Vec<f64> { (i + 1..ids.len()).map(|j| pair(i, j)).collect() };

        Ok(DistanceMatrix::from_upper_rows(collect_rows(ids.len(), parallel, row)))
    }
}
