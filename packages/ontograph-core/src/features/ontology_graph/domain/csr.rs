//! Compressed sparse row adjacency
//!
//! `offsets` has one entry per node plus a trailing sentinel; the run of
//! node `i` is `neighbors[offsets[i]..offsets[i + 1]]`.

use serde::{Deserialize, Serialize};

/// Dense, zero-based node index
pub type NodeIdx = u32;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrArray {
    offsets: Vec<u32>,
    neighbors: Vec<NodeIdx>,
}

impl CsrArray {
    /// Build from `(row, neighbor)` pairs with one counting pass and one
    /// fill pass. Within a row, neighbors keep the order of `pairs`.
    ///
    /// Callers guarantee every index is `< node_count` and that the pair
    /// count fits in `u32`.
    pub fn from_pairs(node_count: usize, pairs: &[(NodeIdx, NodeIdx)]) -> Self {
        let mut offsets = vec![0u32; node_count + 1];
        for &(row, _) in pairs {
            offsets[row as usize + 1] += 1;
        }
        for i in 0..node_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor: Vec<u32> = offsets[..node_count].to_vec();
        let mut neighbors = vec![0; pairs.len()];
        for &(row, neighbor) in pairs {
            let slot = &mut cursor[row as usize];
            neighbors[*slot as usize] = neighbor;
            *slot += 1;
        }

        Self { offsets, neighbors }
    }

    /// Wrap raw arrays without checking them; see [`CsrArray::check`].
    pub(crate) fn from_raw(offsets: Vec<u32>, neighbors: Vec<NodeIdx>) -> Self {
        Self { offsets, neighbors }
    }

    /// Reverse every edge. Rows of the result are in ascending source
    /// order because sources are visited in index order.
    pub fn transpose(&self) -> Self {
        let n = self.node_count();
        let mut offsets = vec![0u32; n + 1];
        for &neighbor in &self.neighbors {
            offsets[neighbor as usize + 1] += 1;
        }
        for i in 0..n {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor: Vec<u32> = offsets[..n].to_vec();
        let mut neighbors = vec![0; self.neighbors.len()];
        for row in 0..n {
            for &neighbor in self.row(row as NodeIdx) {
                let slot = &mut cursor[neighbor as usize];
                neighbors[*slot as usize] = row as NodeIdx;
                *slot += 1;
            }
        }

        Self { offsets, neighbors }
    }

    /// Reorder each run in place
    pub fn sort_runs_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&NodeIdx, &NodeIdx) -> std::cmp::Ordering,
    {
        for w in self.offsets.windows(2) {
            self.neighbors[w[0] as usize..w[1] as usize].sort_by(&mut compare);
        }
    }

    #[inline]
    pub fn row(&self, idx: NodeIdx) -> &[NodeIdx] {
        let i = idx as usize;
        &self.neighbors[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    pub fn neighbors(&self) -> &[NodeIdx] {
        &self.neighbors
    }

    /// Structural check for arrays that did not come from `from_pairs`:
    /// sentinel layout, monotone offsets, indices in bounds, and strictly
    /// ascending (hence duplicate-free) runs.
    pub fn check(&self, node_count: usize) -> Result<(), String> {
        if self.offsets.len() != node_count + 1 {
            return Err(format!(
                "expected {} offsets, found {}",
                node_count + 1,
                self.offsets.len()
            ));
        }
        if self.offsets.first() != Some(&0) {
            return Err("offsets must start at 0".to_string());
        }
        if self.offsets.last().map(|&o| o as usize) != Some(self.neighbors.len()) {
            return Err("last offset must equal the neighbor count".to_string());
        }
        for (row, w) in self.offsets.windows(2).enumerate() {
            if w[0] > w[1] || w[1] as usize > self.neighbors.len() {
                return Err(format!("offsets decrease at node {row}"));
            }
            let run = &self.neighbors[w[0] as usize..w[1] as usize];
            if let Some(&bad) = run.iter().find(|&&n| n as usize >= node_count) {
                return Err(format!("node {row} references out-of-range index {bad}"));
            }
            if run.windows(2).any(|p| p[0] >= p[1]) {
                return Err(format!("run of node {row} is not strictly ascending"));
            }
        }
        Ok(())
    }
}
