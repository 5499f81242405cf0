//! Obsolete identifier usage

use crate::features::ontology_graph::OntologyGraph;
use crate::features::validation::domain::{RuleValidator, ValidationResult, ValidationResults};
use crate::shared::models::TermId;

pub const OBSOLETE_TERM_ID_CATEGORY: &str = "obsolete_term_id_is_used";

/// Warns about alternate (obsolete) identifiers and names the primary
/// replacement. Unknown identifiers are not this validator's concern.
pub struct ObsoleteTermIdsValidator<'g, G> {
    graph: &'g G,
}

impl<'g, G: OntologyGraph> ObsoleteTermIdsValidator<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }
}

impl<G: OntologyGraph> RuleValidator for ObsoleteTermIdsValidator<'_, G> {
    fn validate(&self, items: &[TermId]) -> ValidationResults {
        items
            .iter()
            .filter_map(|id| {
                let primary = self.graph.primary_term_id(id).ok()?;
                if primary == id {
                    return None;
                }
                let name = self.graph.term_label(primary).unwrap_or(primary.value());
                Some(ValidationResult::warning(
                    OBSOLETE_TERM_ID_CATEGORY,
                    format!(
                        "Using the obsolete {} instead of {} for {}",
                        id.value(),
                        primary.value(),
                        name
                    ),
                    vec![id.clone(), primary.clone()],
                ))
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "obsolete_term_ids"
    }
}
