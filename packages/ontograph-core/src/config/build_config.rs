//! Graph build policies

use serde::{Deserialize, Serialize};

use super::error::ConfigResult;
use super::validation::Validatable;

/// What to do with nodes that cannot be reached from the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisconnectedNodePolicy {
    /// Fail the build with `DisconnectedNode`
    #[default]
    Reject,
    /// Keep the node as a separate component without a depth
    Allow,
}

/// What to do with edges whose endpoint was never declared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingEdgePolicy {
    /// Fail the build with `UnknownIdentifier`
    #[default]
    Reject,
    /// Skip the edge with a warning
    Drop,
}

/// How many structural issues a failed build reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Stop at the first issue
    FailFast,
    /// Collect every issue found in one pass
    #[default]
    Full,
}

/// Graph Builder configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphBuildConfig {
    pub disconnected_nodes: DisconnectedNodePolicy,
    pub dangling_edges: DanglingEdgePolicy,
    pub report_mode: ReportMode,
}

impl GraphBuildConfig {
    pub const FIELDS: &'static [&'static str] =
        &["disconnected_nodes", "dangling_edges", "report_mode"];

    pub fn disconnected_nodes(mut self, policy: DisconnectedNodePolicy) -> Self {
        self.disconnected_nodes = policy;
        self
    }

    pub fn dangling_edges(mut self, policy: DanglingEdgePolicy) -> Self {
        self.dangling_edges = policy;
        self
    }

    pub fn report_mode(mut self, mode: ReportMode) -> Self {
        self.report_mode = mode;
        self
    }

    #[inline]
    pub fn allows_disconnected(&self) -> bool {
        self.disconnected_nodes == DisconnectedNodePolicy::Allow
    }

    #[inline]
    pub fn drops_dangling(&self) -> bool {
        self.dangling_edges == DanglingEdgePolicy::Drop
    }

    #[inline]
    pub fn fail_fast(&self) -> bool {
        self.report_mode == ReportMode::FailFast
    }
}

impl Validatable for GraphBuildConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Every policy combination is meaningful
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "GraphBuildConfig"
    }
}
