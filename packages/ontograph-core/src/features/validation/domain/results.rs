//! Validation findings
//!
//! Findings are data, not errors. Order is validator registration order,
//! then emission order inside each validator.

use serde::{Deserialize, Serialize};

use crate::shared::models::TermId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub level: ValidationLevel,
    pub category: String,
    pub message: String,
    /// Offending identifiers, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub term_ids: Vec<TermId>,
}

impl ValidationResult {
    pub fn warning(category: impl Into<String>, message: impl Into<String>, term_ids: Vec<TermId>) -> Self {
        Self {
            level: ValidationLevel::Warning,
            category: category.into(),
            message: message.into(),
            term_ids,
        }
    }

    pub fn error(category: impl Into<String>, message: impl Into<String>, term_ids: Vec<TermId>) -> Self {
        Self {
            level: ValidationLevel::Error,
            category: category.into(),
            message: message.into(),
            term_ids,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == ValidationLevel::Error
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResults {
    results: Vec<ValidationResult>,
}

impl ValidationResults {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    /// True iff no finding has error severity
    pub fn is_ok(&self) -> bool {
        !self.results.iter().any(ValidationResult::is_error)
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| r.level == ValidationLevel::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| r.level == ValidationLevel::Warning)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn push(&mut self, result: ValidationResult) {
        self.results.push(result);
    }

    /// Append another set, preserving both orders
    pub fn extend(&mut self, other: ValidationResults) {
        self.results.extend(other.results);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationResult> {
        self.results.iter()
    }
}

impl FromIterator<ValidationResult> for ValidationResults {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationResults {
    type Item = ValidationResult;
    type IntoIter = std::vec::IntoIter<ValidationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResults {
    type Item = &'a ValidationResult;
    type IntoIter = std::slice::Iter<'a, ValidationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
