//! Validation Runner

use tracing::debug;

use crate::features::validation::domain::{RuleValidator, ValidationResults};
use crate::shared::models::{Identified, TermId};

/// Runs validators in registration order and concatenates their findings
#[derive(Default)]
pub struct ValidationRunner<'a> {
    validators: Vec<Box<dyn RuleValidator + 'a>>,
}

impl<'a> ValidationRunner<'a> {
    pub fn new(validators: Vec<Box<dyn RuleValidator + 'a>>) -> Self {
        Self { validators }
    }

    /// Append a validator
    pub fn with(mut self, validator: impl RuleValidator + 'a) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn validate_all(&self, items: &[TermId]) -> ValidationResults {
        let mut overall = ValidationResults::default();
        for validator in &self.validators {
            let results = validator.validate(items);
            debug!(
                validator = validator.name(),
                findings = results.len(),
                "validator finished"
            );
            overall.extend(results);
        }
        overall
    }

    /// [`validate_all`](Self::validate_all) over the terms named by `items`
    pub fn validate_identified<I: Identified>(&self, items: &[I]) -> ValidationResults {
        let ids: Vec<TermId> = items.iter().map(|item| item.term_id().clone()).collect();
        self.validate_all(&ids)
    }
}
