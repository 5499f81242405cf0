//! Well-known identifiers
//!
//! Identifiers the graph layer and validators refer to by name.

use once_cell::sync::Lazy;

use crate::shared::models::TermId;

/// Synthetic common root added when an ontology has several top-level terms
pub static OWL_THING: Lazy<TermId> = Lazy::new(|| TermId::known("owl", "Thing"));

/// Human Phenotype Ontology
pub mod hpo {
    use super::*;

    /// All (root of the whole HPO)
    pub static ALL: Lazy<TermId> = Lazy::new(|| TermId::known("HP", "0000001"));

    pub static PHENOTYPIC_ABNORMALITY: Lazy<TermId> =
        Lazy::new(|| TermId::known("HP", "0000118"));

    pub static CLINICAL_MODIFIER: Lazy<TermId> = Lazy::new(|| TermId::known("HP", "0012823"));

    pub static MODE_OF_INHERITANCE: Lazy<TermId> = Lazy::new(|| TermId::known("HP", "0000005"));

    /// Onset, child of Clinical modifier
    pub static ONSET: Lazy<TermId> = Lazy::new(|| TermId::known("HP", "0003674"));

    pub static FREQUENCY: Lazy<TermId> = Lazy::new(|| TermId::known("HP", "0040279"));

    pub static PAST_MEDICAL_HISTORY: Lazy<TermId> =
        Lazy::new(|| TermId::known("HP", "0032443"));

    pub static BLOOD_GROUP: Lazy<TermId> = Lazy::new(|| TermId::known("HP", "0032223"));
}
