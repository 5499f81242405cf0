//! Shared module - Common types
//!
//! Types used by every feature: identifiers, term records and the
//! well-known identifiers of the supported ontologies.

pub mod constants;
pub mod models;

// Re-exports for convenience
pub use models::*;
