//! Phase 3: acyclicity and reachability
//!
//! Iterative tri-color depth-first search over the staging children
//! view. Meeting an in-progress node closes a cycle; the gray stack from
//! that node to the current one is the cycle path.

use crate::features::ontology_graph::{CsrArray, NodeIdx};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

pub(crate) struct DagCheck {
    /// Each path starts and ends with the same node
    pub cycles: Vec<Vec<NodeIdx>>,
    /// Nodes reachable from the root along child edges
    pub reached: Vec<bool>,
}

/// Search from `root` first, then from every unvisited node in
/// `seed_order`, so cycles outside the root's component are found too.
pub(crate) fn check_dag(children: &CsrArray, root: NodeIdx, seed_order: &[NodeIdx]) -> DagCheck {
    let n = children.node_count();
    let mut color = vec![Color::Unvisited; n];
    let mut cycles = Vec::new();

    dfs(children, root, &mut color, &mut cycles);
    let reached = color.iter().map(|&c| c != Color::Unvisited).collect();

    for &seed in seed_order {
        if color[seed as usize] == Color::Unvisited {
            dfs(children, seed, &mut color, &mut cycles);
        }
    }

    DagCheck { cycles, reached }
}

fn dfs(children: &CsrArray, start: NodeIdx, color: &mut [Color], cycles: &mut Vec<Vec<NodeIdx>>) {
    // (node, position of the next child to visit)
    let mut stack: Vec<(NodeIdx, usize)> = vec![(start, 0)];
    color[start as usize] = Color::InProgress;

    while let Some(top) = stack.last_mut() {
        let (node, pos) = *top;
        let run = children.row(node);
        if pos == run.len() {
            color[node as usize] = Color::Done;
            stack.pop();
            continue;
        }
        top.1 += 1;

        let child = run[pos];
        match color[child as usize] {
            Color::Unvisited => {
                color[child as usize] = Color::InProgress;
                stack.push((child, 0));
            }
            Color::InProgress => {
                let from = stack.iter().rposition(|&(n, _)| n == child).unwrap_or(0);
                let mut cycle: Vec<NodeIdx> = stack[from..].iter().map(|&(n, _)| n).collect();
                cycle.push(child);
                cycles.push(cycle);
            }
            Color::Done => {}
        }
    }
}
