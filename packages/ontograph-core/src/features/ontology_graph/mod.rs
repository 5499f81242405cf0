// Ontology Graph - immutable is_a hierarchy index
//
// ## Layout
// - parents-of and children-of views, each a CSR array (offsets of length
//   N+1 plus a flat neighbor array); runs are in ascending node-index order
// - identifier lookup covering primary and alternate ids
// - per-node depth (shortest distance to the root)
//
// ## Architecture
// - Domain: CSR array, `OntologyGraph` capability trait, lazy BFS iterators
// - Infrastructure: `CsrOntologyGraph`
// - Application: closure unions, petgraph export

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{augment_with_ancestors, augment_with_descendants, to_petgraph};
pub use domain::{
    Closure, ClosureIndices, CsrArray, Direction, Neighbors, NodeIdx, OntologyGraph, TermIds,
};
pub use infrastructure::CsrOntologyGraph;
