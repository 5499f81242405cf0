// Graph Builder - node/edge lists to an immutable graph index
//
// Validates DAG invariants (resolvable endpoints, no cycles, one root,
// reachability per policy) and assigns node indices breadth-first from
// the root with identifier-ordered tie-breaks, so repeated builds of the
// same input produce identical indices.
//
// ## Architecture
// - Domain: GraphInput, NodeDecl, DirectedEdge, GraphBuilderError
// - Infrastructure: phased builder producing CsrOntologyGraph
// - Application: build use case returning the graph with its input fingerprint

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{GraphBuildResult, GraphBuilderUseCase, GraphBuilderUseCaseImpl};

// Re-exports
pub use domain::{DirectedEdge, GraphBuilderError, GraphInput, NodeDecl};

pub use infrastructure::GraphBuilder;
