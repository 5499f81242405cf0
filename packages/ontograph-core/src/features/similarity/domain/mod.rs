//! Similarity domain

pub mod distance;
pub mod ic;

pub use distance::{DistanceMatrix, TermDistance};
pub use ic::{sanitize, FnSource, InformationContentSource};
