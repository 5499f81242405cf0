//! Versioned, serializable form of a built graph index
//!
//! Only the node table and the parents-of view are stored; children-of,
//! depths and the identifier lookup are rebuilt on restore. A snapshot
//! read from elsewhere is untrusted, so [`GraphSnapshot::restore`]
//! checks every index invariant before assembling the graph.
//!
//! Nodes outside the root's component are listed explicitly: a strict
//! build records none, so any node the root cannot reach on restore is
//! corruption, not a policy choice.

use std::collections::VecDeque;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{OntologyError, Result};
use crate::features::ontology_graph::{CsrArray, CsrOntologyGraph, NodeIdx, OntologyGraph};
use crate::features::snapshot::domain::GraphFingerprint;
use crate::shared::models::TermId;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub version: u32,
    /// Hex fingerprint of the input the graph was built from
    pub fingerprint: String,
    pub root: NodeIdx,
    pub nodes: Vec<TermId>,
    pub alt_ids: Vec<Vec<TermId>>,
    pub parents: CsrArray,
    /// Nodes the root does not reach, ascending; empty for strict builds
    #[serde(default)]
    pub disconnected: Vec<NodeIdx>,
}

impl GraphSnapshot {
    pub fn capture(graph: &CsrOntologyGraph, fingerprint: &GraphFingerprint) -> Self {
        let node_count = graph.node_count() as NodeIdx;
        Self {
            version: SNAPSHOT_VERSION,
            fingerprint: fingerprint.to_hex(),
            root: graph.root_idx(),
            nodes: graph.term_ids().cloned().collect(),
            alt_ids: (0..node_count)
                .map(|idx| graph.alt_term_ids_at(idx).to_vec())
                .collect(),
            parents: graph.parents_csr().clone(),
            disconnected: (0..node_count)
                .filter(|&idx| graph.depth_of_idx(idx).is_none())
                .collect(),
        }
    }

    pub fn fingerprint(&self) -> Result<GraphFingerprint> {
        GraphFingerprint::from_hex(&self.fingerprint)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Revalidate and rebuild the graph index
    pub fn restore(self) -> Result<CsrOntologyGraph> {
        if self.version != SNAPSHOT_VERSION {
            return Err(OntologyError::snapshot(format!(
                "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                self.version
            )));
        }
        self.fingerprint()?;

        let n = self.nodes.len();
        if n > NodeIdx::MAX as usize {
            return Err(OntologyError::snapshot(format!("{n} nodes exceed the index space")));
        }
        if self.root as usize >= n {
            return Err(OntologyError::snapshot(format!(
                "root index {} out of range for {n} nodes",
                self.root
            )));
        }
        if self.alt_ids.len() != n {
            return Err(OntologyError::snapshot(format!(
                "{} alternate id lists for {n} nodes",
                self.alt_ids.len()
            )));
        }

        let mut seen: AHashSet<&TermId> = AHashSet::with_capacity(n);
        for id in self.nodes.iter().chain(self.alt_ids.iter().flatten()) {
            if !seen.insert(id) {
                return Err(OntologyError::snapshot(format!("identifier {id} appears twice")));
            }
        }

        self.parents.check(n).map_err(OntologyError::Snapshot)?;
        if !self.parents.row(self.root).is_empty() {
            return Err(OntologyError::snapshot(format!(
                "root {} has parents",
                self.nodes[self.root as usize]
            )));
        }
        if let Some(idx) = first_on_cycle(&self.parents) {
            return Err(OntologyError::snapshot(format!(
                "cycle through {}",
                self.nodes[idx as usize]
            )));
        }

        let unreached = unreached_from_root(&self.parents, self.root);
        if unreached != self.disconnected {
            let stray = unreached
                .iter()
                .find(|idx| !self.disconnected.contains(idx))
                .or_else(|| self.disconnected.iter().find(|idx| !unreached.contains(idx)))
                .and_then(|&idx| self.nodes.get(idx as usize));
            return Err(OntologyError::snapshot(format!(
                "{} unreached from the root, {} recorded as disconnected (first mismatch: {})",
                unreached.len(),
                self.disconnected.len(),
                stray.map_or("out-of-range index", |id| id.value())
            )));
        }

        debug!(
            nodes = n,
            disconnected = self.disconnected.len(),
            edges = self.parents.edge_count(),
            fingerprint = %self.fingerprint,
            "restoring graph snapshot"
        );
        let alt_ids = self.alt_ids.into_iter().map(Vec::into_boxed_slice).collect();
        Ok(CsrOntologyGraph::from_parts(self.nodes, alt_ids, self.parents, self.root))
    }
}

/// Kahn's algorithm over the parents-of view; returns a node that could
/// not be ordered, if any
fn first_on_cycle(parents: &CsrArray) -> Option<NodeIdx> {
    let n = parents.node_count();
    let children = parents.transpose();
    let mut pending: Vec<usize> = (0..n as NodeIdx).map(|i| parents.row(i).len()).collect();
    let mut queue: VecDeque<NodeIdx> = (0..n as NodeIdx).filter(|&i| pending[i as usize] == 0).collect();

    while let Some(idx) = queue.pop_front() {
        for &child in children.row(idx) {
            pending[child as usize] -= 1;
            if pending[child as usize] == 0 {
                queue.push_back(child);
            }
        }
    }

    pending.iter().position(|&p| p > 0).map(|i| i as NodeIdx)
}

/// Nodes not reached from `root` along child edges, ascending
fn unreached_from_root(parents: &CsrArray, root: NodeIdx) -> Vec<NodeIdx> {
    let children = parents.transpose();
    let mut reached = vec![false; parents.node_count()];
    reached[root as usize] = true;
    let mut queue = VecDeque::from([root]);
    while let Some(idx) = queue.pop_front() {
        for &child in children.row(idx) {
            if !reached[child as usize] {
                reached[child as usize] = true;
                queue.push_back(child);
            }
        }
    }
    (0..parents.node_count() as NodeIdx)
        .filter(|&idx| !reached[idx as usize])
        .collect()
}
