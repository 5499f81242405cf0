//! Structural build issues

use thiserror::Error;

use crate::shared::models::TermId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphBuilderError {
    #[error("edge {child} -> {parent} references unknown term {id}")]
    UnknownIdentifier {
        id: TermId,
        child: TermId,
        parent: TermId,
    },

    #[error("cycle detected: {}", join(cycle))]
    CycleDetected { cycle: Vec<TermId> },

    #[error("term {0} is not reachable from the root")]
    DisconnectedNode(TermId),

    #[error("term {0} is declared more than once")]
    DuplicateIdentifier(TermId),

    #[error("root {0} is not among the declared nodes")]
    RootNotFound(TermId),

    #[error("no root candidate: every parent term is also a child")]
    NoRootCandidate,

    #[error("root {root} has parent {parent}")]
    RootHasParent { root: TermId, parent: TermId },

    #[error("{count} {what} exceed the 32-bit index space")]
    CapacityExceeded { what: &'static str, count: usize },

    #[error("{} build issues: {}", .0.len(), .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<GraphBuilderError>),
}

impl GraphBuilderError {
    /// Flattened view of the reported issues
    pub fn issues(&self) -> &[GraphBuilderError] {
        match self {
            GraphBuilderError::Multiple(issues) => issues,
            single => std::slice::from_ref(single),
        }
    }

    /// Collapse collected issues: one is returned as itself
    pub(crate) fn from_issues(mut issues: Vec<GraphBuilderError>) -> Self {
        if issues.len() == 1 {
            issues.remove(0)
        } else {
            GraphBuilderError::Multiple(issues)
        }
    }
}

fn join(ids: &[TermId]) -> String {
    ids.iter()
        .map(|id| id.value())
        .collect::<Vec<_>>()
        .join(" -> ")
}
