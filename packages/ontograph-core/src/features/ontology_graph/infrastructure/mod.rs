//! Graph index infrastructure

pub mod csr_graph;

pub use csr_graph::CsrOntologyGraph;
