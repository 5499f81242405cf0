//! Pairwise term distance

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::errors::Result;
use crate::shared::models::TermId;

/// Symmetric `n x n` distance matrix with a zero diagonal
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Fill from the upper triangle; `rows[i]` holds `d(i, j)` for `j > i`
    pub fn from_upper_rows(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        let mut values = vec![0.0; n * n];
        for (i, row) in rows.into_iter().enumerate() {
            for (offset, d) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self { n, values }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

/// Semantic distance between two terms; smaller is closer
pub trait TermDistance: Sync {
    /// Fails with `UnknownIdentifier` for terms outside the graph
    fn distance(&self, a: &TermId, b: &TermId) -> Result<f64>;

    /// All pairwise distances. Parallel evaluation yields the same matrix
    /// as sequential evaluation.
    fn distance_matrix(&self, ids: &[TermId], parallel: bool) -> Result<DistanceMatrix> {
        let row = |i: usize| -> Result<Vec<f64>> {
            ids[i + 1..]
                .iter()
                .map(|b| self.distance(&ids[i], b))
                .collect()
        };

        let rows = collect_rows(ids.len(), parallel, row)
            .into_iter()
            .collect::<Result<Vec<_>>>()?;
        Ok(DistanceMatrix::from_upper_rows(rows))
    }
}

/// `row(0..n)` in order; on the rayon pool when `parallel` is set and the
/// `parallel` feature is enabled
pub(crate) fn collect_rows<T, F>(n: usize, parallel: bool, row: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Send + Sync,
{
    #[cfg(feature = "parallel")]
    if parallel {
        return (0..n).into_par_iter().map(row).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    (0..n).map(row).collect()
}
