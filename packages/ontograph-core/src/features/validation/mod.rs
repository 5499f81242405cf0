// Validation - rule checks over term annotation sets
//
// Validators share the `RuleValidator` capability and never fail: they
// return severity-tagged findings. Alternate ids are mapped to primary
// ids before checking; identifiers unknown to the graph are skipped.
//
// ## Architecture
// - Domain: ValidationLevel, ValidationResult(s), RuleValidator
// - Infrastructure: obsolete id, subtree membership, true path rule
// - Application: ValidationRunner

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ValidationRunner;
pub use domain::{RuleValidator, ValidationLevel, ValidationResult, ValidationResults};
pub use infrastructure::{
    AnnotationPropagationValidator, ObsoleteTermIdsValidator, SubtreeMembershipValidator,
    ANNOTATION_PROPAGATION_CATEGORY, OBSOLETE_TERM_ID_CATEGORY, PHENOTYPIC_ABNORMALITY_CATEGORY,
    SUBTREE_MEMBERSHIP_CATEGORY,
};
