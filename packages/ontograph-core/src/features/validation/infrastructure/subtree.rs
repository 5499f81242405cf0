//! Subtree membership

use tracing::debug;

use super::labels::describe;
use crate::errors::Result;
use crate::features::ontology_graph::{NodeIdx, OntologyGraph};
use crate::features::validation::domain::{RuleValidator, ValidationResult, ValidationResults};
use crate::shared::constants::hpo;
use crate::shared::models::TermId;

pub const SUBTREE_MEMBERSHIP_CATEGORY: &str = "subtree_membership";
pub const PHENOTYPIC_ABNORMALITY_CATEGORY: &str = "phenotypic_abnormality_descendant";

/// Reports every identifier that is neither the allowed root nor one of
/// its descendants
pub struct SubtreeMembershipValidator<'g, G> {
    graph: &'g G,
    root: NodeIdx,
    root_label: String,
    category: &'static str,
}

impl<'g, G: OntologyGraph> SubtreeMembershipValidator<'g, G> {
    /// Fails if `allowed_root` is not in the graph
    pub fn new(graph: &'g G, allowed_root: &TermId) -> Result<Self> {
        let root = graph.resolve(allowed_root)?;
        let root_label = describe(graph, graph.term_id_at(root));
        Ok(Self {
            graph,
            root,
            root_label,
            category: SUBTREE_MEMBERSHIP_CATEGORY,
        })
    }

    /// Phenotypic abnormality (HP:0000118) subtree of the HPO
    pub fn phenotypic_abnormality(graph: &'g G) -> Result<Self> {
        let pa: &TermId = &hpo::PHENOTYPIC_ABNORMALITY;
        let mut validator = Self::new(graph, pa)?;
        if graph.term_label(pa).is_none() {
            validator.root_label = format!("Phenotypic abnormality [{}]", pa.value());
        }
        validator.category = PHENOTYPIC_ABNORMALITY_CATEGORY;
        Ok(validator)
    }

    fn is_member(&self, idx: NodeIdx) -> bool {
        idx == self.root
            || self
                .graph
                .ancestor_indices(idx, false)
                .any(|ancestor| ancestor == self.root)
    }
}

impl<G: OntologyGraph> RuleValidator for SubtreeMembershipValidator<'_, G> {
    fn validate(&self, items: &[TermId]) -> ValidationResults {
        let mut results = ValidationResults::default();
        for id in items {
            let Some(idx) = self.graph.idx_of(id) else {
                debug!(term = %id, "skipping unknown term");
                continue;
            };
            if self.is_member(idx) {
                continue;
            }
            let primary = self.graph.term_id_at(idx);
            results.push(ValidationResult::error(
                self.category,
                format!(
                    "{} is not a descendant of {}",
                    describe(self.graph, primary),
                    self.root_label
                ),
                vec![primary.clone()],
            ));
        }
        results
    }

    fn name(&self) -> &'static str {
        self.category
    }
}
