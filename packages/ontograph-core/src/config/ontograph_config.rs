//! Top-level configuration
//!
//! Preset first, then per-section overrides:
//!
//! ```rust,ignore
//! let config = OntographConfig::preset(Preset::Subset)
//!     .build(|c| c.report_mode(ReportMode::FailFast))
//!     .sort(|c| c.parallel_threshold(256));
//! config.validate()?;
//!
//! let config = OntographConfig::from_yaml_file("ontograph.yaml")?;
//! ```

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use super::build_config::GraphBuildConfig;
use super::error::{ConfigError, ConfigResult};
use super::io::{BuildOverrides, ConfigExportV1, SortOverrides, SUPPORTED_VERSIONS, TOP_LEVEL_FIELDS};
use super::preset::Preset;
use super::sort_config::SortConfig;
use super::validation::Validatable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OntographConfig {
    preset: Preset,
    build: GraphBuildConfig,
    sort: SortConfig,
}

impl OntographConfig {
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            build: preset.build_config(),
            sort: SortConfig::default(),
        }
    }

    /// Override build policies
    pub fn build(mut self, f: impl FnOnce(GraphBuildConfig) -> GraphBuildConfig) -> Self {
        self.build = f(self.build);
        self
    }

    /// Override sort settings
    pub fn sort(mut self, f: impl FnOnce(SortConfig) -> SortConfig) -> Self {
        self.sort = f(self.sort);
        self
    }

    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    pub fn build_config(&self) -> &GraphBuildConfig {
        &self.build
    }

    pub fn sort_config(&self) -> &SortConfig {
        &self.sort
    }

    /// Load and validate a YAML v1 document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: Value = serde_yaml::from_str(content)?;
        check_known_fields(&raw)?;

        let export: ConfigExportV1 = serde_yaml::from_value(raw)?;

        // Version check
        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::preset(Preset::parse(&export.preset)?);

        if let Some(build) = export.build {
            if let Some(policy) = build.disconnected_nodes {
                config.build.disconnected_nodes = policy;
            }
            if let Some(policy) = build.dangling_edges {
                config.build.dangling_edges = policy;
            }
            if let Some(mode) = build.report_mode {
                config.build.report_mode = mode;
            }
        }
        if let Some(sort) = export.sort {
            if let Some(threshold) = sort.parallel_threshold {
                config.sort.parallel_threshold = threshold;
            }
        }

        config.validate()?;
        debug!(preset = %config.preset, "loaded configuration");
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export as YAML v1 with every field spelled out
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            build: Some(BuildOverrides {
                disconnected_nodes: Some(self.build.disconnected_nodes),
                dangling_edges: Some(self.build.dangling_edges),
                report_mode: Some(self.build.report_mode),
            }),
            sort: Some(SortOverrides {
                parallel_threshold: Some(self.sort.parallel_threshold),
            }),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Validatable for OntographConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.build.validate()?;
        self.sort.validate()
    }

    fn config_name(&self) -> &'static str {
        "OntographConfig"
    }
}

/// Reject unknown keys with a spelling suggestion before typed parsing
fn check_known_fields(raw: &Value) -> ConfigResult<()> {
    let Some(root) = raw.as_mapping() else {
        return Err(ConfigError::Validation(
            "configuration must be a YAML mapping".to_string(),
        ));
    };

    check_section(root, "root", TOP_LEVEL_FIELDS)?;
    for (section, fields) in [
        ("build", GraphBuildConfig::FIELDS),
        ("sort", SortConfig::FIELDS),
    ] {
        if let Some(Value::Mapping(nested)) = root.get(section) {
            check_section(nested, section, fields)?;
        }
    }
    Ok(())
}

fn check_section(mapping: &serde_yaml::Mapping, section: &str, valid: &[&str]) -> ConfigResult<()> {
    for key in mapping.keys() {
        let name = key.as_str().unwrap_or_default();
        if !valid.contains(&name) {
            return Err(ConfigError::unknown_field_with_suggestion(name, section, valid));
        }
    }
    Ok(())
}
