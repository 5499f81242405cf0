//! Concrete validators

mod labels;
pub mod obsolete;
pub mod propagation;
pub mod subtree;

pub use obsolete::{ObsoleteTermIdsValidator, OBSOLETE_TERM_ID_CATEGORY};
pub use propagation::{AnnotationPropagationValidator, ANNOTATION_PROPAGATION_CATEGORY};
pub use subtree::{
    SubtreeMembershipValidator, PHENOTYPIC_ABNORMALITY_CATEGORY, SUBTREE_MEMBERSHIP_CATEGORY,
};
