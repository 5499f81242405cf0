//! Content fingerprint of a graph input
//!
//! Blake3 over a normalized form of the input: nodes sorted by
//! identifier with sorted alternate ids, edges sorted and de-duplicated,
//! then the root. Declaration order therefore does not affect the hash.
//! Every string is length-prefixed.

use std::fmt;

use crate::errors::{OntologyError, Result};
use crate::features::graph_builder::{DirectedEdge, GraphInput};
use crate::shared::models::TermId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphFingerprint(blake3::Hash);

impl GraphFingerprint {
    pub fn of(input: &GraphInput) -> Self {
        let mut nodes: Vec<(&TermId, Vec<&TermId>)> = input
            .nodes
            .iter()
            .map(|n| {
                let mut alts: Vec<&TermId> = n.alt_ids.iter().collect();
                alts.sort();
                (&n.id, alts)
            })
            .collect();
        nodes.sort();

        let mut edges: Vec<&DirectedEdge> = input.edges.iter().collect();
        edges.sort();
        edges.dedup();

        let mut hasher = blake3::Hasher::new();
        hasher.update(&(nodes.len() as u64).to_le_bytes());
        for (id, alts) in &nodes {
            write_id(&mut hasher, id);
            hasher.update(&(alts.len() as u64).to_le_bytes());
            for alt in alts {
                write_id(&mut hasher, alt);
            }
        }
        hasher.update(&(edges.len() as u64).to_le_bytes());
        for edge in &edges {
            write_id(&mut hasher, &edge.child);
            write_id(&mut hasher, &edge.parent);
        }
        write_id(&mut hasher, &input.root);

        Self(hasher.finalize())
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        blake3::Hash::from_hex(hex)
            .map(Self)
            .map_err(|e| OntologyError::snapshot(format!("invalid fingerprint {hex:?}: {e}")))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

fn write_id(hasher: &mut blake3::Hasher, id: &TermId) {
    let value = id.value();
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

impl fmt::Display for GraphFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
