//! Hierarchical Similarity Sorter
//!
//! Computes the pairwise distance matrix with the configured metric,
//! then orders the terms by agglomerative single-linkage clustering.

use tracing::debug;

use crate::config::{SortConfig, Validatable};
use crate::errors::Result;
use crate::features::hierarchical_sort::domain::TermIdSorting;
use crate::features::hierarchical_sort::infrastructure::agglomerate;
use crate::features::ontology_graph::OntologyGraph;
use crate::features::similarity::{EdgeDistance, InformationContentSource, ResnikDistance, TermDistance};
use crate::shared::models::TermId;

pub struct HierarchicalSorter<D> {
    distance: D,
    config: SortConfig,
}

impl<'g, G: OntologyGraph> HierarchicalSorter<EdgeDistance<'g, G>> {
    /// Sort by undirected shortest path length
    pub fn edge(graph: &'g G) -> Self {
        Self::with_distance(EdgeDistance::new(graph))
    }
}

impl<'g, G: OntologyGraph, S: InformationContentSource> HierarchicalSorter<ResnikDistance<'g, G, S>> {
    /// Sort by Resnik distance over the given information content
    pub fn resnik(graph: &'g G, ic: S) -> Self {
        Self::with_distance(ResnikDistance::new(graph, ic))
    }
}

impl<D: TermDistance> HierarchicalSorter<D> {
    pub fn with_distance(distance: D) -> Self {
        Self {
            distance,
            config: SortConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SortConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Reordered identifiers; duplicates are kept
    pub fn sort(&self, ids: &[TermId]) -> Result<Vec<TermId>> {
        Ok(self
            .argsort(ids)?
            .into_iter()
            .map(|i| ids[i].clone())
            .collect())
    }
}

impl<D: TermDistance> TermIdSorting for HierarchicalSorter<D> {
    fn argsort(&self, ids: &[TermId]) -> Result<Vec<usize>> {
        if ids.len() < 2 {
            return Ok((0..ids.len()).collect());
        }

        let parallel = self.config.use_parallel(ids.len());
        debug!(terms = ids.len(), parallel, "computing distance matrix");
        let distances = self.distance.distance_matrix(ids, parallel)?;

        let order = agglomerate(&distances);
        debug!(terms = order.len(), "hierarchical sort finished");
        Ok(order)
    }
}
