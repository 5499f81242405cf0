// Hierarchical Sort - order terms so that similar terms are adjacent
//
// ## Architecture
// - Domain: TermIdSorting (argsort)
// - Infrastructure: ordered single-linkage agglomeration
// - Application: HierarchicalSorter over an edge or Resnik distance

pub mod application;
pub mod domain;
pub(crate) mod infrastructure;

pub use application::HierarchicalSorter;
pub use domain::TermIdSorting;
