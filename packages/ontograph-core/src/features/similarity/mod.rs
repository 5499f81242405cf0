// Similarity - pairwise semantic distance between terms
//
// ## Architecture
// - Domain: TermDistance (with distance matrix), InformationContentSource
// - Infrastructure: EdgeDistance (undirected shortest path), ResnikDistance (MICA)

pub mod domain;
pub mod infrastructure;

pub use domain::{sanitize, DistanceMatrix, FnSource, InformationContentSource, TermDistance};
pub use infrastructure::{EdgeDistance, ResnikDistance};
