//! Graph builder domain: inputs and structural issues

pub mod error;
pub mod input;

pub use error::GraphBuilderError;
pub use input::{DirectedEdge, GraphInput, NodeDecl};
