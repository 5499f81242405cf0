//! Single-linkage agglomerative clustering with ordered merges
//!
//! Clusters keep a left-to-right position. Each round merges the pair
//! with the smallest linkage anywhere in the current order (ties: smaller
//! combined size, then lower original minimum index, then the partner's
//! minimum index). The merged cluster takes the earlier position and
//! its two halves are oriented toward the neighbors.

use tracing::trace;

use crate::features::similarity::DistanceMatrix;

struct Cluster {
    members: Vec<usize>,
    min_index: usize,
}

impl Cluster {
    fn first(&self) -> usize {
        self.members[0]
    }

    fn last(&self) -> usize {
        self.members[self.members.len() - 1]
    }

    /// Distance from `item` to the nearer end of this cluster
    fn boundary_distance(&self, distances: &DistanceMatrix, item: usize) -> f64 {
        distances
            .get(item, self.first())
            .min(distances.get(item, self.last()))
    }
}

/// Final left-to-right order of the items of `distances`
pub(crate) fn agglomerate(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.len();
    if n < 2 {
        return (0..n).collect();
    }

    let mut linkage: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| distances.get(i, j)).collect())
        .collect();
    let mut slots: Vec<Option<Cluster>> = (0..n)
        .map(|i| {
            Some(Cluster {
                members: vec![i],
                min_index: i,
            })
        })
        .collect();
    let mut order: Vec<usize> = (0..n).collect();

    while order.len() > 1 {
        let (a, b) = closest_pair(&linkage, &slots);

        let (Some(pa), Some(pb)) = (
            order.iter().position(|&s| s == a),
            order.iter().position(|&s| s == b),
        ) else {
            break;
        };
        let (x, y) = if pa < pb { (a, b) } else { (b, a) };
        let pos = pa.min(pb);
        order.retain(|&s| s != x && s != y);

        let (Some(cx), Some(cy)) = (slots[x].take(), slots[y].take()) else {
            break;
        };
        let left = pos.checked_sub(1).and_then(|p| order.get(p)).and_then(|&s| slots[s].as_ref());
        let right = order.get(pos).and_then(|&s| slots[s].as_ref());

        let swap = if let Some(left) = left {
            let anchor = left.last();
            cy.boundary_distance(distances, anchor) < cx.boundary_distance(distances, anchor)
        } else if let Some(right) = right {
            let anchor = right.first();
            cx.boundary_distance(distances, anchor) < cy.boundary_distance(distances, anchor)
        } else {
            false
        };

        trace!(
            left = ?cx.members,
            right = ?cy.members,
            swap,
            linkage = linkage[x][y],
            "merging clusters"
        );

        let (head, tail) = if swap { (cy, cx) } else { (cx, cy) };
        let min_index = head.min_index.min(tail.min_index);
        let mut members = head.members;
        members.extend(tail.members);
        slots[x] = Some(Cluster { members, min_index });

        for k in 0..n {
            if k != x && slots[k].is_some() {
                let merged = linkage[x][k].min(linkage[y][k]);
                linkage[x][k] = merged;
                linkage[k][x] = merged;
            }
        }
        order.insert(pos, x);
    }

    order
        .first()
        .and_then(|&s| slots[s].take())
        .map(|c| c.members)
        .unwrap_or_default()
}

/// Live pair with the smallest `(linkage, size, min index, partner min index)`
fn closest_pair(linkage: &[Vec<f64>], slots: &[Option<Cluster>]) -> (usize, usize) {
    let live: Vec<(usize, &Cluster)> = slots
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.as_ref().map(|c| (i, c)))
        .collect();

    let mut best: Option<((f64, usize, usize, usize), (usize, usize))> = None;
    for (p, &(i, ci)) in live.iter().enumerate() {
        for &(j, cj) in &live[p + 1..] {
            let key = (
                linkage[i][j],
                ci.members.len() + cj.members.len(),
                ci.min_index.min(cj.min_index),
                ci.min_index.max(cj.min_index),
            );
            let better = match &best {
                None => true,
                Some((current, _)) => {
                    key.0
                        .total_cmp(&current.0)
                        .then(key.1.cmp(&current.1))
                        .then(key.2.cmp(&current.2))
                        .then(key.3.cmp(&current.3))
                        .is_lt()
                }
            };
            if better {
                best = Some((key, (i, j)));
            }
        }
    }

    best.map(|(_, pair)| pair).unwrap_or((0, 0))
}
