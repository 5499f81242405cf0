/*
 * Ontograph Core - is_a hierarchy index and term-set algorithms
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (TermId, terms, well-known identifiers)
 * - features/    : Vertical slices (graph_builder → ontology_graph → validation / similarity → hierarchical_sort)
 * - config/      : Build and sort policies (presets, YAML v1)
 *
 * Data flows one way: node/edge lists → GraphBuilder → CsrOntologyGraph →
 * {validators, sorter}. Nothing mutates a graph after it is built.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and well-known identifiers
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{OntologyError, Result};
pub use shared::models::{Identified, MinimalTerm, OntologyTerm, Synonym, Term, TermId, TermIdError};

pub use features::graph_builder::{
    DirectedEdge, GraphBuilder, GraphBuilderError, GraphInput, NodeDecl,
};
pub use features::hierarchical_sort::{HierarchicalSorter, TermIdSorting};
pub use features::ontology::{DefaultOntology, MinimalOntology, Ontology};
pub use features::ontology_graph::{
    augment_with_ancestors, augment_with_descendants, CsrOntologyGraph, NodeIdx, OntologyGraph,
};
pub use features::similarity::{
    EdgeDistance, InformationContentSource, ResnikDistance, TermDistance,
};
pub use features::snapshot::{GraphFingerprint, GraphSnapshot};
pub use features::validation::{
    AnnotationPropagationValidator, ObsoleteTermIdsValidator, RuleValidator,
    SubtreeMembershipValidator, ValidationLevel, ValidationResult, ValidationResults,
    ValidationRunner,
};
