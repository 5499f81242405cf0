//! Validator capability

use super::results::ValidationResults;
use crate::shared::models::TermId;

/// Checks a sequence of term identifiers against one rule
pub trait RuleValidator: Send + Sync {
    fn validate(&self, items: &[TermId]) -> ValidationResults;

    /// Name for logging
    fn name(&self) -> &'static str;
}
