//! Preset configurations
//!
//! Presets provide complete default configurations for common inputs.

use serde::{Deserialize, Serialize};

use super::build_config::{DanglingEdgePolicy, DisconnectedNodePolicy, GraphBuildConfig};
use super::error::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Complete ontology release
    ///
    /// - Unreachable nodes are rejected
    /// - Edges to undeclared terms are rejected
    #[default]
    Strict,

    /// Prefix-filtered subset of an ontology
    ///
    /// - Unreachable nodes are kept without a depth
    /// - Edges to filtered-out terms are dropped
    Subset,
}

impl Preset {
    /// Build policy for this preset
    pub fn build_config(&self) -> GraphBuildConfig {
        match self {
            Self::Strict => GraphBuildConfig::default(),
            Self::Subset => GraphBuildConfig::default()
                .disconnected_nodes(DisconnectedNodePolicy::Allow)
                .dangling_edges(DanglingEdgePolicy::Drop),
        }
    }

    /// Parse preset from string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "subset" => Ok(Self::Subset),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Subset => "subset",
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
