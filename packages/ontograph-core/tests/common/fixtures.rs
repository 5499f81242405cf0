//! Test hierarchies
//!
//! `toy_*`: ten terms under prefix `T` with one diamond
//! (`T:0110` is_a `T:010` and `T:011`, both is_a `T:01`). It is the
//! usual nine-node diamond hierarchy plus the leaf `T:03`, which gives
//! the root a third child and the sorter a term with no close sibling:
//!
//! ```text
//! T:1
//! ├── T:01
//! │   ├── T:010 ──┐
//! │   └── T:011 ──┴── T:0110
//! ├── T:02
//! │   ├── T:020
//! │   ├── T:021
//! │   └── T:022
//! └── T:03
//! ```
//!
//! `hpo_*`: a small slice of the Human Phenotype Ontology with names,
//! alternate ids and one obsolete term.

use ahash::AHashMap;

use ontograph_core::config::{DanglingEdgePolicy, DisconnectedNodePolicy, GraphBuildConfig};
use ontograph_core::shared::constants::hpo;
use ontograph_core::{
    CsrOntologyGraph, DirectedEdge, GraphBuilder, GraphInput, MinimalOntology, MinimalTerm,
    NodeDecl, TermId,
};

pub fn tid(curie: &str) -> TermId {
    TermId::from_curie(curie).unwrap()
}

pub fn tids(curies: &[&str]) -> Vec<TermId> {
    curies.iter().map(|c| tid(c)).collect()
}

pub fn edge(child: &str, parent: &str) -> DirectedEdge {
    DirectedEdge::new(tid(child), tid(parent))
}

/// Nodes without alternate ids
pub fn graph_input(nodes: &[&str], edges: &[(&str, &str)], root: &str) -> GraphInput {
    GraphInput::new(
        nodes.iter().map(|n| NodeDecl::new(tid(n))).collect(),
        edges.iter().map(|(c, p)| edge(c, p)).collect(),
        tid(root),
    )
}

pub fn subset_builder() -> GraphBuilder {
    GraphBuilder::new(
        GraphBuildConfig::default()
            .disconnected_nodes(DisconnectedNodePolicy::Allow)
            .dangling_edges(DanglingEdgePolicy::Drop),
    )
}

// ----------------------------------------------------------------------
// Toy hierarchy
// ----------------------------------------------------------------------

pub const TOY_NODES: &[&str] = &[
    "T:1", "T:01", "T:010", "T:011", "T:0110", "T:02", "T:020", "T:021", "T:022", "T:03",
];

pub const TOY_EDGES: &[(&str, &str)] = &[
    ("T:01", "T:1"),
    ("T:010", "T:01"),
    ("T:011", "T:01"),
    ("T:0110", "T:010"),
    ("T:0110", "T:011"),
    ("T:02", "T:1"),
    ("T:020", "T:02"),
    ("T:021", "T:02"),
    ("T:022", "T:02"),
    ("T:03", "T:1"),
];

pub fn toy_input() -> GraphInput {
    graph_input(TOY_NODES, TOY_EDGES, "T:1")
}

/// The toy hierarchy without `T:03`: nine terms, one diamond
pub fn nine_node_input() -> GraphInput {
    let nodes: Vec<&str> = TOY_NODES.iter().copied().filter(|&n| n != "T:03").collect();
    let edges: Vec<(&str, &str)> = TOY_EDGES.iter().copied().filter(|&(c, _)| c != "T:03").collect();
    graph_input(&nodes, &edges, "T:1")
}

pub fn toy_graph() -> CsrOntologyGraph {
    GraphBuilder::default().build(&toy_input()).unwrap()
}

/// Information content that grows with specificity
pub fn toy_ic() -> AHashMap<TermId, f64> {
    [
        ("T:1", 0.0),
        ("T:01", 1.0),
        ("T:010", 2.0),
        ("T:011", 2.3),
        ("T:0110", 3.2),
        ("T:02", 1.5),
        ("T:020", 2.4),
        ("T:021", 2.5),
        ("T:022", 2.8),
        ("T:03", 2.0),
    ]
    .into_iter()
    .map(|(id, ic)| (tid(id), ic))
    .collect()
}

// ----------------------------------------------------------------------
// HPO slice
// ----------------------------------------------------------------------

pub const ALL: &str = "HP:0000001";
pub const PHENOTYPIC_ABNORMALITY: &str = "HP:0000118";
pub const NERVOUS_SYSTEM: &str = "HP:0000707";
pub const SEIZURE: &str = "HP:0001250";
pub const SEIZURE_ALT: &str = "HP:0002279";
pub const FOCAL_ONSET_SEIZURE: &str = "HP:0007359";
pub const FOCAL_CLONIC_SEIZURE: &str = "HP:0002266";
pub const SKELETAL_SYSTEM: &str = "HP:0000924";
pub const ARACHNODACTYLY: &str = "HP:0001166";
pub const ARACHNODACTYLY_ALT: &str = "HP:0001519";
pub const MODE_OF_INHERITANCE: &str = "HP:0000005";
pub const AUTOSOMAL_DOMINANT: &str = "HP:0000006";
pub const CLINICAL_MODIFIER: &str = "HP:0012823";
pub const ONSET: &str = "HP:0003674";
pub const OBSOLETE_TERM: &str = "HP:0000489";

pub fn hpo_terms() -> Vec<MinimalTerm> {
    let term = |id: &str, name: &str, alts: &[&str]| MinimalTerm::new(tid(id), name, tids(alts), false);
    vec![
        term(ALL, "All", &[]),
        term(PHENOTYPIC_ABNORMALITY, "Phenotypic abnormality", &[]),
        term(NERVOUS_SYSTEM, "Abnormality of the nervous system", &[]),
        term(SEIZURE, "Seizure", &[SEIZURE_ALT]),
        term(FOCAL_ONSET_SEIZURE, "Focal-onset seizure", &[]),
        term(FOCAL_CLONIC_SEIZURE, "Focal clonic seizure", &[]),
        term(SKELETAL_SYSTEM, "Abnormality of the skeletal system", &[]),
        term(ARACHNODACTYLY, "Arachnodactyly", &[ARACHNODACTYLY_ALT]),
        term(MODE_OF_INHERITANCE, "Mode of inheritance", &[]),
        term(AUTOSOMAL_DOMINANT, "Autosomal dominant inheritance", &[]),
        term(CLINICAL_MODIFIER, "Clinical modifier", &[]),
        term(ONSET, "Onset", &[]),
        MinimalTerm::new(tid(OBSOLETE_TERM), "obsolete Abnormality of globe location", vec![], true),
    ]
}

pub fn hpo_edges() -> Vec<DirectedEdge> {
    vec![
        edge(PHENOTYPIC_ABNORMALITY, ALL),
        edge(NERVOUS_SYSTEM, PHENOTYPIC_ABNORMALITY),
        edge(SEIZURE, NERVOUS_SYSTEM),
        edge(FOCAL_ONSET_SEIZURE, SEIZURE),
        edge(FOCAL_CLONIC_SEIZURE, FOCAL_ONSET_SEIZURE),
        edge(SKELETAL_SYSTEM, PHENOTYPIC_ABNORMALITY),
        edge(ARACHNODACTYLY, SKELETAL_SYSTEM),
        edge(MODE_OF_INHERITANCE, ALL),
        edge(AUTOSOMAL_DOMINANT, MODE_OF_INHERITANCE),
        edge(CLINICAL_MODIFIER, ALL),
        edge(ONSET, CLINICAL_MODIFIER),
    ]
}

pub fn hpo_ontology() -> MinimalOntology {
    MinimalOntology::from_terms(
        &GraphBuilder::default(),
        hpo_terms(),
        hpo_edges(),
        Some(hpo::ALL.clone()),
        Some("2024-04-26".to_string()),
    )
    .unwrap()
}

// ----------------------------------------------------------------------
// Synthetic DAG
// ----------------------------------------------------------------------

/// Layered DAG: `width` nodes per layer, each node below the first layer
/// has up to two parents in the layer above
pub fn layered_input(layers: usize, width: usize) -> GraphInput {
    let name = |layer: usize, i: usize| format!("S:{layer:03}{i:05}");
    let mut nodes = vec![NodeDecl::new(tid("S:root"))];
    let mut edges = Vec::new();
    for layer in 0..layers {
        for i in 0..width {
            let id = tid(&name(layer, i));
            nodes.push(NodeDecl::new(id.clone()));
            if layer == 0 {
                edges.push(DirectedEdge::new(id, tid("S:root")));
            } else {
                edges.push(DirectedEdge::new(id.clone(), tid(&name(layer - 1, i))));
                edges.push(DirectedEdge::new(id, tid(&name(layer - 1, (i * 7 + 3) % width))));
            }
        }
    }
    GraphInput::new(nodes, edges, tid("S:root"))
}
