//! Feature modules (vertical slices)
//!
//! Each feature is organized as:
//! - domain/         : Types and capability traits
//! - infrastructure/ : Concrete implementations
//! - application/    : Use cases composing the above

pub mod graph_builder;
pub mod hierarchical_sort;
pub mod ontology;
pub mod ontology_graph;
pub mod similarity;
pub mod snapshot;
pub mod validation;
