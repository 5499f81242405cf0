//! Error types for ontograph-core
//!
//! Provides unified error handling across the crate. Build-time structural
//! issues live in [`GraphBuilderError`], configuration issues in
//! [`ConfigError`]; both convert into [`OntologyError`].

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::graph_builder::GraphBuilderError;
use crate::shared::models::{TermId, TermIdError};

/// Main error type for ontograph-core operations
#[derive(Debug, Error)]
pub enum OntologyError {
    /// Identifier is neither a primary nor an alternate id of the graph
    #[error("term {0} not found")]
    UnknownIdentifier(TermId),

    /// Identifier could not be parsed
    #[error("Invalid term id: {0}")]
    InvalidTermId(#[from] TermIdError),

    /// Graph construction failed
    #[error("Graph build failed: {0}")]
    Build(#[from] GraphBuilderError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Data-quality condition that cannot be expressed by degrading
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Snapshot is inconsistent or has an unsupported version
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OntologyError {
    /// Create an unknown identifier error
    pub fn unknown(id: &TermId) -> Self {
        OntologyError::UnknownIdentifier(id.clone())
    }

    /// Create a snapshot error
    pub fn snapshot(msg: impl Into<String>) -> Self {
        OntologyError::Snapshot(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        OntologyError::InvalidConfiguration(msg.into())
    }

    /// True if this error reports an identifier the graph does not contain
    pub fn is_not_found(&self) -> bool {
        matches!(self, OntologyError::UnknownIdentifier(_))
    }
}

/// Result type alias for ontograph operations
pub type Result<T> = std::result::Result<T, OntologyError>;
