//! Hierarchical sort configuration

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;

pub const MIN_PARALLEL_THRESHOLD: usize = 2;
pub const MAX_PARALLEL_THRESHOLD: usize = 1_000_000;

fn default_parallel_threshold() -> usize {
    64
}

/// Hierarchical Similarity Sorter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    /// Input size from which the pairwise distance matrix is computed
    /// with rayon (2..=1000000). Output does not depend on it.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl SortConfig {
    pub const FIELDS: &'static [&'static str] = &["parallel_threshold"];

    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Never parallelize
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: MAX_PARALLEL_THRESHOLD,
        }
    }

    #[inline]
    pub fn use_parallel(&self, n: usize) -> bool {
        cfg!(feature = "parallel") && n >= self.parallel_threshold
    }
}

impl Validatable for SortConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(MIN_PARALLEL_THRESHOLD..=MAX_PARALLEL_THRESHOLD).contains(&self.parallel_threshold) {
            return Err(ConfigError::range_with_hint(
                "parallel_threshold",
                self.parallel_threshold,
                MIN_PARALLEL_THRESHOLD,
                MAX_PARALLEL_THRESHOLD,
                "A pairwise matrix needs at least two terms",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "SortConfig"
    }
}
