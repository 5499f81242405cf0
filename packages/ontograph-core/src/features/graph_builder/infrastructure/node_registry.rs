//! Phase 1: node registration
//!
//! Staging indices follow declaration order. All primary ids are
//! registered before any alternate id, so an alternate id that collides
//! with a primary id is the one reported.

use ahash::AHashMap;
use tracing::debug;

use super::issues::IssueSink;
use crate::features::graph_builder::domain::{GraphBuilderError, NodeDecl};
use crate::features::ontology_graph::NodeIdx;
use crate::shared::models::TermId;

pub(crate) struct StagedNodes {
    pub ids: Vec<TermId>,
    pub alt_ids: Vec<Vec<TermId>>,
    /// Primary and alternate ids
    pub lookup: AHashMap<TermId, NodeIdx>,
}

impl StagedNodes {
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

pub(crate) fn register_nodes(
    nodes: &[NodeDecl],
    sink: &mut IssueSink,
) -> Result<StagedNodes, GraphBuilderError> {
    let mut ids = Vec::with_capacity(nodes.len());
    let mut lookup = AHashMap::with_capacity(nodes.len());
    let mut accepted = Vec::with_capacity(nodes.len());

    for decl in nodes {
        if lookup.contains_key(&decl.id) {
            sink.report(GraphBuilderError::DuplicateIdentifier(decl.id.clone()))?;
            continue;
        }
        lookup.insert(decl.id.clone(), ids.len() as NodeIdx);
        ids.push(decl.id.clone());
        accepted.push(decl);
    }

    let mut alt_ids = Vec::with_capacity(ids.len());
    for (idx, decl) in accepted.into_iter().enumerate() {
        let mut alts = Vec::with_capacity(decl.alt_ids.len());
        for alt in &decl.alt_ids {
            if lookup.contains_key(alt) {
                sink.report(GraphBuilderError::DuplicateIdentifier(alt.clone()))?;
                continue;
            }
            lookup.insert(alt.clone(), idx as NodeIdx);
            alts.push(alt.clone());
        }
        alt_ids.push(alts);
    }

    debug!(
        nodes = ids.len(),
        alt_ids = lookup.len() - ids.len(),
        "registered nodes"
    );
    Ok(StagedNodes {
        ids,
        alt_ids,
        lookup,
    })
}
