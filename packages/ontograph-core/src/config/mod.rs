//! Configuration System
//!
//! Two levels:
//! - Level 1: Preset (`strict` for full releases, `subset` for prefix-filtered inputs)
//! - Level 2: Section overrides, in code or from a versioned YAML file
//!
//! ```rust,ignore
//! use ontograph_core::config::{OntographConfig, Preset};
//!
//! let config = OntographConfig::preset(Preset::Subset);
//! let builder = GraphBuilder::new(*config.build_config());
//! ```

pub mod build_config;
pub mod error;
pub mod io;
pub mod ontograph_config;
pub mod preset;
pub mod sort_config;
pub mod validation;

// Re-exports
pub use build_config::{DanglingEdgePolicy, DisconnectedNodePolicy, GraphBuildConfig, ReportMode};
pub use error::{ConfigError, ConfigResult};
pub use io::{BuildOverrides, ConfigExportV1, SortOverrides};
pub use ontograph_config::OntographConfig;
pub use preset::Preset;
pub use sort_config::SortConfig;
pub use validation::Validatable;
