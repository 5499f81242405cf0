//! GraphBuilder integration tests
//!
//! Covers index assignment, every structural issue, report modes and
//! the subset policies.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;

use ontograph_core::config::{GraphBuildConfig, Preset, ReportMode};
use ontograph_core::features::graph_builder::{GraphBuilderUseCase, GraphBuilderUseCaseImpl};
use ontograph_core::shared::constants::OWL_THING;
use ontograph_core::{
    GraphBuilder, GraphBuilderError, GraphFingerprint, GraphInput, NodeDecl, OntologyGraph, TermId,
};

fn ids_in_index_order<G: OntologyGraph>(graph: &G) -> Vec<&str> {
    graph.term_ids().map(|id| id.value()).collect()
}

// ============================================================
// Index assignment
// ============================================================

#[test]
fn test_toy_indices_are_breadth_first_by_identifier() {
    let graph = toy_graph();

    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.edge_count(), 10);
    assert_eq!(graph.root(), &tid("T:1"));
    assert_eq!(
        ids_in_index_order(&graph),
        vec!["T:1", "T:01", "T:02", "T:03", "T:010", "T:011", "T:020", "T:021", "T:022", "T:0110"]
    );
    assert_index_invariants(&graph);
}

#[test]
fn test_declaration_order_does_not_change_indices() {
    let mut input = toy_input();
    input.nodes.reverse();
    input.edges.reverse();
    let shuffled = GraphBuilder::default().build(&input).unwrap();

    assert_eq!(ids_in_index_order(&shuffled), ids_in_index_order(&toy_graph()));
    assert_eq!(shuffled.parents_csr(), toy_graph().parents_csr());
}

#[test]
fn test_depths_are_shortest_distances() {
    let graph = toy_graph();
    assert_eq!(graph.depth(&tid("T:1")).unwrap(), Some(0));
    assert_eq!(graph.depth(&tid("T:022")).unwrap(), Some(2));
    assert_eq!(graph.depth(&tid("T:0110")).unwrap(), Some(3));
}

#[test]
fn test_duplicate_edges_are_collapsed() {
    let mut input = toy_input();
    input.edges.push(edge("T:0110", "T:010"));
    input.edges.push(edge("T:03", "T:1"));
    let graph = GraphBuilder::default().build(&input).unwrap();

    assert_eq!(graph.edge_count(), 10);
    assert_eq!(graph.get_parents(&tid("T:0110")).unwrap().len(), 2);
}

#[test]
fn test_edge_endpoints_resolve_alternate_ids() {
    let input = GraphInput::new(
        vec![
            NodeDecl::new(tid("A:0")),
            NodeDecl::new(tid("A:1")).with_alt_ids(vec![tid("A:100")]),
            NodeDecl::new(tid("A:2")),
        ],
        vec![edge("A:100", "A:0"), edge("A:2", "A:100")],
        tid("A:0"),
    );
    let graph = GraphBuilder::default().build(&input).unwrap();

    assert!(graph.is_parent_of(&tid("A:1"), &tid("A:2")).unwrap());
    assert_eq!(graph.alt_id_count(), 1);
}

// ============================================================
// Structural issues
// ============================================================

/// A:4 -> X:9 is dangling; A:2 and A:3 form a cycle outside the root
/// component; A:2, A:3 and A:4 are unreachable.
fn broken_input() -> GraphInput {
    graph_input(
        &["A:0", "A:1", "A:2", "A:3", "A:4"],
        &[("A:1", "A:0"), ("A:3", "A:2"), ("A:2", "A:3"), ("A:4", "X:9")],
        "A:0",
    )
}

#[test]
fn test_full_mode_reports_every_issue_in_discovery_order() {
    let err = GraphBuilder::default().build(&broken_input()).unwrap_err();

    assert_eq!(
        err.issues(),
        &[
            GraphBuilderError::UnknownIdentifier {
                id: tid("X:9"),
                child: tid("A:4"),
                parent: tid("X:9"),
            },
            GraphBuilderError::CycleDetected {
                cycle: tids(&["A:2", "A:3", "A:2"]),
            },
            GraphBuilderError::DisconnectedNode(tid("A:2")),
            GraphBuilderError::DisconnectedNode(tid("A:3")),
            GraphBuilderError::DisconnectedNode(tid("A:4")),
        ]
    );
    assert!(err.to_string().starts_with("5 build issues"));
}

#[test]
fn test_fail_fast_stops_at_first_issue() {
    let builder = GraphBuilder::new(GraphBuildConfig::default().report_mode(ReportMode::FailFast));
    let err = builder.build(&broken_input()).unwrap_err();

    assert!(matches!(err, GraphBuilderError::UnknownIdentifier { .. }));
    assert_eq!(err.issues().len(), 1);
}

#[test]
fn test_single_issue_is_not_wrapped() {
    let input = graph_input(&["A:0", "A:1"], &[("A:1", "A:0"), ("A:1", "A:1")], "A:0");
    let err = GraphBuilder::default().build(&input).unwrap_err();

    assert_eq!(
        err,
        GraphBuilderError::CycleDetected {
            cycle: tids(&["A:1", "A:1"])
        }
    );
}

#[test]
fn test_cycle_in_root_component() {
    let input = graph_input(
        &["A:0", "A:1", "A:2", "A:3"],
        &[("A:1", "A:0"), ("A:2", "A:1"), ("A:3", "A:2"), ("A:1", "A:3")],
        "A:0",
    );
    let err = GraphBuilder::default().build(&input).unwrap_err();

    assert_eq!(
        err,
        GraphBuilderError::CycleDetected {
            cycle: tids(&["A:1", "A:2", "A:3", "A:1"])
        }
    );
}

#[test]
fn test_duplicate_identifiers() {
    let input = GraphInput::new(
        vec![
            NodeDecl::new(tid("A:0")),
            NodeDecl::new(tid("A:1")).with_alt_ids(vec![tid("A:0")]),
            NodeDecl::new(tid("A:1")),
        ],
        vec![edge("A:1", "A:0")],
        tid("A:0"),
    );
    let err = GraphBuilder::default().build(&input).unwrap_err();

    assert_eq!(
        err.issues(),
        &[
            GraphBuilderError::DuplicateIdentifier(tid("A:1")),
            GraphBuilderError::DuplicateIdentifier(tid("A:0")),
        ]
    );
}

#[test]
fn test_root_not_found() {
    let input = graph_input(&["A:1"], &[], "A:0");
    let err = GraphBuilder::default().build(&input).unwrap_err();
    assert_eq!(err, GraphBuilderError::RootNotFound(tid("A:0")));
}

#[test]
fn test_root_with_parent() {
    let input = graph_input(&["A:0", "A:9"], &[("A:0", "A:9")], "A:0");
    let err = GraphBuilder::default().build(&input).unwrap_err();

    assert!(err.issues().contains(&GraphBuilderError::RootHasParent {
        root: tid("A:0"),
        parent: tid("A:9"),
    }));
}

// ============================================================
// Policies
// ============================================================

#[test]
fn test_subset_policy_keeps_disconnected_nodes() {
    let input = graph_input(
        &["A:0", "A:1", "A:2", "A:3"],
        &[("A:1", "A:0"), ("A:2", "B:7"), ("A:3", "A:2")],
        "A:0",
    );
    let graph = subset_builder().build(&input).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.disconnected_count(), 2);
    assert_eq!(graph.depth(&tid("A:3")).unwrap(), None);
    assert!(graph.is_ancestor_of(&tid("A:2"), &tid("A:3")).unwrap());
    assert_eq!(ids_in_index_order(&graph), vec!["A:0", "A:1", "A:2", "A:3"]);
}

#[test]
fn test_subset_preset_matches_explicit_policies() {
    assert_eq!(Preset::Subset.build_config(), *subset_builder().config());
}

#[test]
fn test_subset_policy_still_rejects_cycles() {
    let input = graph_input(&["A:0", "A:1", "A:2"], &[("A:1", "A:2"), ("A:2", "A:1")], "A:0");
    let err = subset_builder().build(&input).unwrap_err();
    assert!(matches!(err, GraphBuilderError::CycleDetected { .. }));
}

// ============================================================
// Root inference and use case
// ============================================================

#[test]
fn test_inferred_owl_thing_root() {
    let input = GraphInput::with_inferred_root(
        vec![
            NodeDecl::new(tid("GO:1")),
            NodeDecl::new(tid("GO:2")),
            NodeDecl::new(tid("GO:3")),
        ],
        vec![edge("GO:3", "GO:1"), edge("GO:3", "GO:2")],
    )
    .unwrap();
    let graph = GraphBuilder::default().build(&input).unwrap();

    let owl_thing: &TermId = &OWL_THING;
    assert_eq!(graph.root(), owl_thing);
    let children: Vec<_> = graph.get_children(owl_thing).unwrap().cloned().collect();
    assert_eq!(children, tids(&["GO:1", "GO:2"]));
}

#[test]
fn test_inferred_root_resolves_alternate_id_children() {
    let input = GraphInput::with_inferred_root(
        vec![
            NodeDecl::new(tid("X:A")),
            NodeDecl::new(tid("X:B")).with_alt_ids(vec![tid("X:B2")]),
            NodeDecl::new(tid("X:C")),
        ],
        vec![edge("X:B2", "X:A"), edge("X:C", "X:B")],
    )
    .unwrap();
    let graph = GraphBuilder::default().build(&input).unwrap();

    assert_eq!(graph.root(), &tid("X:A"));
    assert!(!graph.contains(&OWL_THING));
    let parents: Vec<_> = graph.get_parents(&tid("X:B")).unwrap().cloned().collect();
    assert_eq!(parents, tids(&["X:A"]));
    assert_eq!(graph.depth(&tid("X:C")).unwrap(), Some(2));
}

#[test]
fn test_no_root_candidate() {
    let err = GraphInput::with_inferred_root(
        vec![NodeDecl::new(tid("A:1")), NodeDecl::new(tid("A:2"))],
        vec![edge("A:1", "A:2"), edge("A:2", "A:1")],
    )
    .unwrap_err();
    assert_eq!(err, GraphBuilderError::NoRootCandidate);
}

#[test]
fn test_use_case_returns_input_fingerprint() {
    let use_case = GraphBuilderUseCaseImpl::default();
    let result = use_case.build_graph(&toy_input()).unwrap();

    assert_eq!(result.graph.node_count(), 10);
    assert_eq!(result.fingerprint, GraphFingerprint::of(&toy_input()));
}

#[test]
fn test_use_case_wraps_build_errors() {
    let err = GraphBuilderUseCaseImpl::default()
        .build_graph(&broken_input())
        .unwrap_err();
    assert!(matches!(err, ontograph_core::OntologyError::Build(GraphBuilderError::Multiple(_))));
}
