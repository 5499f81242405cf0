//! Graph index domain: CSR layout, hierarchy capability, traversal iterators

pub mod csr;
pub mod graph;
pub mod traversal;

pub use csr::{CsrArray, NodeIdx};
pub use graph::OntologyGraph;
pub use traversal::{Closure, ClosureIndices, Direction, Neighbors, TermIds};
