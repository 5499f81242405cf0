//! Custom assertions for graph and sort results

use ontograph_core::{OntologyGraph, TermId};

/// Assert that `perm` is a bijection over `0..n`
pub fn assert_permutation(perm: &[usize], n: usize) {
    let mut sorted = perm.to_vec();
    sorted.sort_unstable();
    assert_eq!(
        sorted,
        (0..n).collect::<Vec<_>>(),
        "Expected a permutation of 0..{n}, got {perm:?}"
    );
}

/// Assert that every member of `group` occupies one contiguous block of `sorted`
pub fn assert_contiguous(sorted: &[TermId], group: &[TermId]) {
    let positions: Vec<usize> = sorted
        .iter()
        .enumerate()
        .filter(|(_, id)| group.contains(id))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(positions.len(), group.len(), "group {group:?} not fully present in {sorted:?}");
    let span = positions.last().unwrap() - positions.first().unwrap() + 1;
    assert_eq!(span, group.len(), "group {group:?} is split in {sorted:?}");
}

/// Assert the structural invariants of a built index
pub fn assert_index_invariants<G: OntologyGraph>(graph: &G) {
    let root = graph.root_idx();
    assert!(graph.parents_of_idx(root).is_empty(), "root has parents");

    for idx in 0..graph.node_count() as u32 {
        for run in [graph.parents_of_idx(idx), graph.children_of_idx(idx)] {
            assert!(
                run.windows(2).all(|w| w[0] < w[1]),
                "run of node {idx} is not strictly ascending: {run:?}"
            );
        }
        for &parent in graph.parents_of_idx(idx) {
            assert!(graph.children_of_idx(parent).contains(&idx));
        }
    }
}
