//! Issue collection honoring the report mode

use crate::features::graph_builder::domain::GraphBuilderError;

pub(crate) struct IssueSink {
    fail_fast: bool,
    issues: Vec<GraphBuilderError>,
}

impl IssueSink {
    pub(crate) fn new(fail_fast: bool) -> Self {
        Self {
            fail_fast,
            issues: Vec::new(),
        }
    }

    /// Record an issue; in fail-fast mode it is returned immediately
    pub(crate) fn report(&mut self, issue: GraphBuilderError) -> Result<(), GraphBuilderError> {
        if self.fail_fast {
            return Err(issue);
        }
        self.issues.push(issue);
        Ok(())
    }

    /// Stop here if anything was reported so far
    pub(crate) fn checkpoint(&mut self) -> Result<(), GraphBuilderError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(GraphBuilderError::from_issues(std::mem::take(&mut self.issues)))
        }
    }

    /// Everything reported so far; callers have reported at least one issue
    pub(crate) fn into_error(self) -> GraphBuilderError {
        GraphBuilderError::from_issues(self.issues)
    }
}
