//! Graph Builder UseCase

use crate::errors::Result;
use crate::features::graph_builder::domain::GraphInput;
use crate::features::graph_builder::infrastructure::GraphBuilder;
use crate::features::ontology_graph::CsrOntologyGraph;
use crate::features::snapshot::GraphFingerprint;

/// Graph Builder UseCase Trait
pub trait GraphBuilderUseCase: Send + Sync {
    fn build_graph(&self, input: &GraphInput) -> Result<GraphBuildResult>;
}

/// Built index plus the fingerprint of the input it came from
#[derive(Debug, Clone)]
pub struct GraphBuildResult {
    pub graph: CsrOntologyGraph,
    pub fingerprint: GraphFingerprint,
}

/// Graph Builder UseCase Implementation
#[derive(Debug, Default)]
pub struct GraphBuilderUseCaseImpl {
    builder: GraphBuilder,
}

impl GraphBuilderUseCaseImpl {
    pub fn new(builder: GraphBuilder) -> Self {
        Self { builder }
    }
}

impl GraphBuilderUseCase for GraphBuilderUseCaseImpl {
    fn build_graph(&self, input: &GraphInput) -> Result<GraphBuildResult> {
        let graph = self.builder.build(input)?;
        Ok(GraphBuildResult {
            graph,
            fingerprint: GraphFingerprint::of(input),
        })
    }
}
