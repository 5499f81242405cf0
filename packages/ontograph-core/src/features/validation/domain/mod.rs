//! Validation domain

pub mod results;
pub mod validator;

pub use results::{ValidationLevel, ValidationResult, ValidationResults};
pub use validator::RuleValidator;
