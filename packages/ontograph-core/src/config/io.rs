//! Configuration I/O (YAML schema)
//!
//! Defines the YAML v1 schema types. Loading and export live in
//! `ontograph_config.rs`.

use serde::{Deserialize, Serialize};

use super::build_config::{DanglingEdgePolicy, DisconnectedNodePolicy, ReportMode};

pub const SUPPORTED_VERSIONS: &[u32] = &[1];
pub const TOP_LEVEL_FIELDS: &[&str] = &["version", "preset", "build", "sort"];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default = "default_preset_name")]
    pub preset: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildOverrides>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOverrides>,
}

fn default_preset_name() -> String {
    "strict".to_string()
}

/// Build policy overrides on top of the preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disconnected_nodes: Option<DisconnectedNodePolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dangling_edges: Option<DanglingEdgePolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_mode: Option<ReportMode>,
}

/// Sort overrides on top of the defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_threshold: Option<usize>,
}
