//! Hierarchical sort domain

use crate::errors::Result;
use crate::shared::models::TermId;

/// Reorders term sequences so that similar terms are adjacent
pub trait TermIdSorting {
    /// Permutation of original positions: `out[i]` is the index in `ids`
    /// of the term at sorted position `i`
    fn argsort(&self, ids: &[TermId]) -> Result<Vec<usize>>;
}
