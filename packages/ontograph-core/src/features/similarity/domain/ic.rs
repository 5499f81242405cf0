//! Information content lookup
//!
//! IC is computed elsewhere (annotation corpus statistics); this core
//! only reads it. Missing, negative and non-finite values count as 0,
//! the least informative.

use std::collections::HashMap;
use std::hash::BuildHasher;

use ahash::AHashMap;

use crate::shared::models::TermId;

pub trait InformationContentSource: Send + Sync {
    /// Raw value as stored by the source
    fn lookup(&self, id: &TermId) -> Option<f64>;

    /// Sanitized value, always finite and `>= 0`
    fn information_content(&self, id: &TermId) -> f64 {
        sanitize(self.lookup(id))
    }
}

/// `None`, negative and non-finite values become 0
#[inline]
pub fn sanitize(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// True if the raw value needed sanitizing (present but unusable)
#[inline]
pub(crate) fn is_malformed(value: Option<f64>) -> bool {
    matches!(value, Some(v) if !v.is_finite() || v < 0.0)
}

/// Adapts a lookup function
pub struct FnSource<F>(pub F);

impl<F> InformationContentSource for FnSource<F>
where
    F: Fn(&TermId) -> Option<f64> + Send + Sync,
{
    fn lookup(&self, id: &TermId) -> Option<f64> {
        (self.0)(id)
    }
}

impl<S: BuildHasher + Send + Sync> InformationContentSource for HashMap<TermId, f64, S> {
    fn lookup(&self, id: &TermId) -> Option<f64> {
        self.get(id).copied()
    }
}

impl InformationContentSource for AHashMap<TermId, f64> {
    fn lookup(&self, id: &TermId) -> Option<f64> {
        self.get(id).copied()
    }
}

/// Borrowed sources, so one table can back several metrics
impl<S: InformationContentSource + ?Sized> InformationContentSource for &S {
    fn lookup(&self, id: &TermId) -> Option<f64> {
        (**self).lookup(id)
    }
}
