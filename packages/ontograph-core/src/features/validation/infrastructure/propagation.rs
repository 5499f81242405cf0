//! True path rule
//!
//! A term and any of its ancestors must not be listed together: the
//! ancestor is implied by the term. Every pair is checked, O(k^2) closure
//! tests for k distinct terms.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::labels::describe;
use crate::features::ontology_graph::{NodeIdx, OntologyGraph};
use crate::features::validation::domain::{RuleValidator, ValidationResult, ValidationResults};
use crate::shared::models::TermId;

pub const ANNOTATION_PROPAGATION_CATEGORY: &str = "annotation_propagation";

pub struct AnnotationPropagationValidator<'g, G> {
    graph: &'g G,
}

impl<'g, G: OntologyGraph> AnnotationPropagationValidator<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    fn is_ancestor(&self, ancestor: NodeIdx, of: NodeIdx) -> bool {
        ancestor != of
            && self
                .graph
                .ancestor_indices(of, false)
                .any(|idx| idx == ancestor)
    }

    fn finding(&self, descendant: NodeIdx, ancestor: NodeIdx) -> ValidationResult {
        let descendant = self.graph.term_id_at(descendant);
        let ancestor = self.graph.term_id_at(ancestor);
        ValidationResult::error(
            ANNOTATION_PROPAGATION_CATEGORY,
            format!(
                "Terms should not contain both {} and its ancestor {}",
                describe(self.graph, descendant),
                describe(self.graph, ancestor)
            ),
            vec![descendant.clone(), ancestor.clone()],
        )
    }
}

impl<G: OntologyGraph> RuleValidator for AnnotationPropagationValidator<'_, G> {
    fn validate(&self, items: &[TermId]) -> ValidationResults {
        // primary ids, first occurrence wins
        let mut seen = FxHashSet::default();
        let mut nodes = Vec::with_capacity(items.len());
        for id in items {
            match self.graph.idx_of(id) {
                Some(idx) if seen.insert(idx) => nodes.push(idx),
                Some(_) => {}
                None => debug!(term = %id, "skipping unknown term"),
            }
        }

        let mut results = ValidationResults::default();
        for (i, &x) in nodes.iter().enumerate() {
            for &y in &nodes[i + 1..] {
                if self.is_ancestor(y, x) {
                    results.push(self.finding(x, y));
                } else if self.is_ancestor(x, y) {
                    results.push(self.finding(y, x));
                }
            }
        }
        results
    }

    fn name(&self) -> &'static str {
        ANNOTATION_PROPAGATION_CATEGORY
    }
}
