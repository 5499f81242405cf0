//! Graph index application layer

pub mod augment;
pub mod petgraph_export;

pub use augment::{augment_with_ancestors, augment_with_descendants};
pub use petgraph_export::to_petgraph;
