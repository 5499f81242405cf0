//! Ontology with term metadata
//!
//! Pairs a graph index with one term record per node, stored in node
//! index order. Obsolete terms are not part of the hierarchy; their ids
//! are expected to live on as alternate ids of current terms.

use crate::errors::{OntologyError, Result};
use crate::features::graph_builder::{DirectedEdge, GraphBuilder, GraphInput, NodeDecl};
use crate::features::ontology_graph::{CsrOntologyGraph, NodeIdx, OntologyGraph};
use crate::shared::models::{MinimalTerm, OntologyTerm, Term, TermId};

#[derive(Debug, Clone)]
pub struct DefaultOntology<T> {
    graph: CsrOntologyGraph,
    /// `terms[i]` describes node `i`; `None` for nodes without metadata
    /// (a synthetic `owl:Thing` root)
    terms: Vec<Option<T>>,
    term_count: usize,
    version: Option<String>,
}

/// Ontology with minimal term metadata
pub type MinimalOntology = DefaultOntology<MinimalTerm>;

/// Ontology with full term metadata
pub type Ontology = DefaultOntology<Term>;

impl<T: OntologyTerm> DefaultOntology<T> {
    /// Build the hierarchy from term records and is_a edges.
    ///
    /// Without an explicit `root`, it is inferred from the edges (see
    /// [`GraphInput::with_inferred_root`]).
    pub fn from_terms(
        builder: &GraphBuilder,
        terms: Vec<T>,
        edges: Vec<DirectedEdge>,
        root: Option<TermId>,
        version: Option<String>,
    ) -> Result<Self> {
        let terms: Vec<T> = terms.into_iter().filter(|t| t.is_current()).collect();
        let nodes: Vec<NodeDecl> = terms.iter().map(NodeDecl::from_term).collect();

        let input = match root {
            Some(root) => GraphInput::new(nodes, edges, root),
            None => GraphInput::with_inferred_root(nodes, edges)?,
        };
        let graph = builder.build(&input)?;
        Self::from_graph(graph, terms, version)
    }

    /// Attach term records to an already built graph. Every term must be
    /// a node of the graph.
    pub fn from_graph(graph: CsrOntologyGraph, terms: Vec<T>, version: Option<String>) -> Result<Self> {
        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None)
            .take(graph.node_count())
            .collect();
        let mut term_count = 0;
        for term in terms {
            let idx = graph.resolve(term.identifier())?;
            let slot = &mut slots[idx as usize];
            if slot.is_some() {
                return Err(OntologyError::invalid_configuration(format!(
                    "more than one term record for {}",
                    term.identifier()
                )));
            }
            *slot = Some(term);
            term_count += 1;
        }

        Ok(Self {
            graph,
            terms: slots,
            term_count,
            version,
        })
    }

    pub fn graph(&self) -> &CsrOntologyGraph {
        &self.graph
    }

    /// Term for a primary or alternate id
    pub fn get_term(&self, id: &TermId) -> Option<&T> {
        let idx = self.graph.idx_of(id)?;
        self.terms[idx as usize].as_ref()
    }

    pub fn get_term_name(&self, id: &TermId) -> Option<&str> {
        self.get_term(id).map(|t| t.name())
    }

    /// Current terms in node-index order
    pub fn terms(&self) -> impl Iterator<Item = &T> {
        self.terms.iter().flatten()
    }

    /// Number of current terms
    pub fn len(&self) -> usize {
        self.term_count
    }

    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl<T: OntologyTerm> OntologyGraph for DefaultOntology<T> {
    fn root_idx(&self) -> NodeIdx {
        self.graph.root_idx()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn idx_of(&self, id: &TermId) -> Option<NodeIdx> {
        self.graph.idx_of(id)
    }

    fn term_id_at(&self, idx: NodeIdx) -> &TermId {
        self.graph.term_id_at(idx)
    }

    fn alt_term_ids_at(&self, idx: NodeIdx) -> &[TermId] {
        self.graph.alt_term_ids_at(idx)
    }

    fn parents_of_idx(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.graph.parents_of_idx(idx)
    }

    fn children_of_idx(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.graph.children_of_idx(idx)
    }

    fn depth_of_idx(&self, idx: NodeIdx) -> Option<u32> {
        self.graph.depth_of_idx(idx)
    }

    fn term_label(&self, id: &TermId) -> Option<&str> {
        self.get_term_name(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::OWL_THING;

    fn tid(curie: &str) -> TermId {
        TermId::from_curie(curie).unwrap()
    }

    fn term(curie: &str, name: &str) -> MinimalTerm {
        MinimalTerm::new(tid(curie), name, vec![], false)
    }

    fn edge(child: &str, parent: &str) -> DirectedEdge {
        DirectedEdge::new(tid(child), tid(parent))
    }

    #[test]
    fn test_obsolete_terms_are_excluded() {
        let terms = vec![
            term("HP:0000001", "All"),
            MinimalTerm::new(tid("HP:0000118"), "Phenotypic abnormality", vec![tid("HP:0000117")], false),
            MinimalTerm::new(tid("HP:0000117"), "obsolete Phenotypic abnormality", vec![], true),
        ];
        let ontology = MinimalOntology::from_terms(
            &GraphBuilder::default(),
            terms,
            vec![edge("HP:0000118", "HP:0000001")],
            Some(tid("HP:0000001")),
            Some("2024-04-26".to_string()),
        )
        .unwrap();

        assert_eq!(ontology.len(), 2);
        assert_eq!(ontology.version(), Some("2024-04-26"));
        assert_eq!(
            ontology.get_term_name(&tid("HP:0000117")),
            Some("Phenotypic abnormality")
        );
        assert_eq!(ontology.term_label(&tid("HP:0000001")), Some("All"));
        assert!(ontology.is_parent_of(&tid("HP:0000001"), &tid("HP:0000117")).unwrap());
    }

    #[test]
    fn test_inferred_owl_thing_root_has_no_metadata() {
        let terms = vec![
            term("GO:1", "a"),
            term("GO:2", "b"),
            term("GO:3", "c"),
            term("GO:4", "d"),
        ];
        let ontology = MinimalOntology::from_terms(
            &GraphBuilder::default(),
            terms,
            vec![edge("GO:3", "GO:1"), edge("GO:4", "GO:2")],
            None,
            None,
        )
        .unwrap();

        assert_eq!(ontology.root(), &*OWL_THING);
        assert!(ontology.get_term(&OWL_THING).is_none());
        assert_eq!(ontology.len(), 4);
        assert_eq!(ontology.size(), 5);
        let names: Vec<_> = ontology.terms().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_from_graph_rejects_foreign_terms() {
        let ontology = MinimalOntology::from_terms(
            &GraphBuilder::default(),
            vec![term("HP:1", "root"), term("HP:2", "child")],
            vec![edge("HP:2", "HP:1")],
            Some(tid("HP:1")),
            None,
        )
        .unwrap();

        let err = MinimalOntology::from_graph(
            ontology.graph().clone(),
            vec![term("HP:3", "stranger")],
            None,
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
