//! Ontology - graph index plus term metadata
//!
//! One concrete type per metadata tier, both usable wherever an
//! [`OntologyGraph`](crate::features::ontology_graph::OntologyGraph) is
//! expected.

mod default_ontology;

pub use default_ontology::{DefaultOntology, MinimalOntology, Ontology};
