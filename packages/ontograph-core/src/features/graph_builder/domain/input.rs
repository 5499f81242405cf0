//! Graph construction input

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use super::error::GraphBuilderError;
use crate::shared::constants::OWL_THING;
use crate::shared::models::{OntologyTerm, TermId};

/// One concept and the obsolete ids that resolve to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDecl {
    pub id: TermId,
    #[serde(default)]
    pub alt_ids: Vec<TermId>,
}

impl NodeDecl {
    pub fn new(id: TermId) -> Self {
        Self {
            id,
            alt_ids: Vec::new(),
        }
    }

    pub fn with_alt_ids(mut self, alt_ids: Vec<TermId>) -> Self {
        self.alt_ids = alt_ids;
        self
    }

    pub fn from_term<T: OntologyTerm>(term: &T) -> Self {
        Self {
            id: term.identifier().clone(),
            alt_ids: term.alt_term_ids().to_vec(),
        }
    }
}

impl From<TermId> for NodeDecl {
    fn from(id: TermId) -> Self {
        Self::new(id)
    }
}

/// `child` is_a `parent`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DirectedEdge {
    pub child: TermId,
    pub parent: TermId,
}

impl DirectedEdge {
    pub fn new(child: TermId, parent: TermId) -> Self {
        Self { child, parent }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
    pub nodes: Vec<NodeDecl>,
    pub edges: Vec<DirectedEdge>,
    pub root: TermId,
}

impl GraphInput {
    pub fn new(nodes: Vec<NodeDecl>, edges: Vec<DirectedEdge>, root: TermId) -> Self {
        Self { nodes, edges, root }
    }

    /// Pick the root from the edges: terms that appear as a parent but
    /// never as a child. Several candidates get `owl:Thing` as a common
    /// parent.
    ///
    /// Endpoints are compared by primary id, so a term that is a child
    /// only under one of its alternate ids is not a candidate.
    pub fn with_inferred_root(
        mut nodes: Vec<NodeDecl>,
        mut edges: Vec<DirectedEdge>,
    ) -> Result<Self, GraphBuilderError> {
        let primary: AHashMap<&TermId, &TermId> = nodes
            .iter()
            .flat_map(|n| n.alt_ids.iter().map(move |alt| (alt, &n.id)))
            .collect();
        let canonical = |id: &TermId| -> TermId { primary.get(id).copied().unwrap_or(id).clone() };

        let children: AHashSet<TermId> = edges.iter().map(|e| canonical(&e.child)).collect();
        let mut candidates: Vec<TermId> = edges
            .iter()
            .map(|e| canonical(&e.parent))
            .filter(|p| !children.contains(p))
            .collect();
        candidates.sort();
        candidates.dedup();

        let owl_thing: &TermId = &OWL_THING;
        let root = match candidates.len() {
            0 => return Err(GraphBuilderError::NoRootCandidate),
            1 => candidates.remove(0),
            _ => {
                if !nodes.iter().any(|n| &n.id == owl_thing) {
                    nodes.push(NodeDecl::new(owl_thing.clone()));
                }
                for candidate in candidates.into_iter().filter(|c| c != owl_thing) {
                    edges.push(DirectedEdge::new(candidate, owl_thing.clone()));
                }
                owl_thing.clone()
            }
        };

        Ok(Self { nodes, edges, root })
    }
}
