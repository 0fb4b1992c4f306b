//! This module implements a best-first A* search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! but keeps the cost and predecessor maps in a reusable [SearchContext] so that they can be
//! inspected after a query and their allocations reused by the next one.
use fxhash::{FxBuildHasher, FxHashMap};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use crate::reconstruct::reconstruct_path;
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder<N, K> {
    estimated_cost: K,
    cost: K,
    node: N,
}

impl<N: Eq, K: PartialEq> Eq for SmallestCostHolder<N, K> {}

impl<N: PartialEq, K: PartialEq> PartialEq for SmallestCostHolder<N, K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.node.eq(&other.node)
    }
}

impl<N: Ord, K: Ord> PartialOrd for SmallestCostHolder<N, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, K: Ord> Ord for SmallestCostHolder<N, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then the largest cost (deepest node), then the
        // smallest node so that equal estimates are always expanded in the same order.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Bookkeeping of a single search: best known accumulated cost (g) and estimated total cost (f)
/// per visited node, the predecessor of every visited node but the start, and the frontier.
///
/// Each query clears the context first, so one context can serve many queries but never two
/// at once.
pub struct SearchContext<N, C> {
    g_scores: FxIndexMap<N, C>,
    f_scores: FxHashMap<N, C>,
    came_from: FxHashMap<N, N>,
    frontier: BinaryHeap<SmallestCostHolder<N, C>>,
}

impl<N: Ord, C: Ord> Default for SearchContext<N, C> {
    fn default() -> Self {
        SearchContext {
            g_scores: FxIndexMap::default(),
            f_scores: FxHashMap::default(),
            came_from: FxHashMap::default(),
            frontier: BinaryHeap::new(),
        }
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Ord + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.g_scores.clear();
        self.f_scores.clear();
        self.came_from.clear();
        self.frontier.clear();
    }

    /// Best known accumulated cost of every visited node, in discovery order.
    pub fn g_scores(&self) -> impl Iterator<Item = (&N, &C)> {
        self.g_scores.iter()
    }

    pub fn g_score(&self, node: &N) -> Option<C> {
        self.g_scores.get(node).copied()
    }

    pub fn f_score(&self, node: &N) -> Option<C> {
        self.f_scores.get(node).copied()
    }

    pub fn predecessors(&self) -> &FxHashMap<N, N> {
        &self.came_from
    }

    /// Number of visited nodes.
    pub fn visited(&self) -> usize {
        self.g_scores.len()
    }

    /// Searches from `start` until a node satisfying `success` is popped from the frontier.
    /// Returns the path from `start` to that node together with its cost, or [None] once the
    /// frontier runs empty.
    ///
    /// The result is optimal as long as `heuristic` never overestimates the remaining cost.
    /// A node may be pushed several times when a cheaper route to it is found; the stale
    /// entries are skipped when popped.
    pub fn astar<FN, IN, FH, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.clear();
        let h = heuristic(start);
        self.g_scores.insert(start.clone(), Zero::zero());
        self.f_scores.insert(start.clone(), h);
        self.frontier.push(SmallestCostHolder {
            estimated_cost: h,
            cost: Zero::zero(),
            node: start.clone(),
        });
        while let Some(SmallestCostHolder { cost, node, .. }) = self.frontier.pop() {
            if success(&node) {
                debug!("Goal reached after visiting {} nodes", self.g_scores.len());
                let path = reconstruct_path(&self.came_from, node);
                return Some((path, cost));
            }
            // We may have inserted a node several times into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if self.g_scores.get(&node).is_some_and(|&best| cost > best) {
                continue;
            }
            for (successor, move_cost) in successors(&node) {
                let new_cost = cost + move_cost;
                let h; // heuristic(&successor)
                match self.g_scores.entry(successor.clone()) {
                    Vacant(e) => {
                        h = heuristic(e.key());
                        e.insert(new_cost);
                    }
                    Occupied(mut e) => {
                        if *e.get() > new_cost {
                            h = heuristic(e.key());
                            e.insert(new_cost);
                        } else {
                            continue;
                        }
                    }
                }
                let estimated_cost = new_cost + h;
                self.f_scores.insert(successor.clone(), estimated_cost);
                self.came_from.insert(successor.clone(), node.clone());
                self.frontier.push(SmallestCostHolder {
                    estimated_cost,
                    cost: new_cost,
                    node: successor,
                });
            }
        }
        debug!(
            "Frontier exhausted after visiting {} nodes",
            self.g_scores.len()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a search that never succeeds and returns the nodes in the order they expanded.
    fn expansion_order(edges: &[(u32, u32, u32)], heuristic: &[u32]) -> Vec<u32> {
        let mut ct: SearchContext<u32, u32> = SearchContext::new();
        let mut expanded = Vec::new();
        let result = ct.astar(
            &0,
            |&node| {
                expanded.push(node);
                edges
                    .iter()
                    .filter(|&&(from, _, _)| from == node)
                    .map(|&(_, to, cost)| (to, cost))
                    .collect::<Vec<_>>()
            },
            |&node| heuristic[node as usize],
            |_| false,
        );
        assert!(result.is_none());
        expanded
    }

    /// Equal estimates and equal costs expand the smaller node first.
    #[test]
    fn equal_entries_expand_smaller_node_first() {
        let order = expansion_order(&[(0, 2, 1), (0, 1, 1)], &[0, 0, 0]);
        assert_eq!(order, vec![0, 1, 2]);
    }

    /// Equal estimates expand the entry with the larger accumulated cost first.
    #[test]
    fn equal_estimates_expand_deeper_entry_first() {
        // f(1) = 1 + 1, f(2) = 2 + 0, f(3) = 1 + 1
        let order = expansion_order(&[(0, 1, 1), (0, 2, 2), (0, 3, 1)], &[2, 1, 0, 1]);
        assert_eq!(order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn lower_estimate_wins_over_tie_breaks() {
        let order = expansion_order(&[(0, 1, 1), (0, 2, 1)], &[0, 3, 0]);
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn cheaper_route_replaces_recorded_cost() {
        // 2 is first reached at cost 5, then improved to cost 2 through 1.
        let mut ct: SearchContext<u32, u32> = SearchContext::new();
        let (path, cost) = ct
            .astar(
                &0,
                |&node| match node {
                    0 => vec![(2, 5), (1, 1)],
                    1 => vec![(2, 1)],
                    2 => vec![(3, 1)],
                    _ => vec![],
                },
                |_| 0,
                |&node| node == 3,
            )
            .unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(cost, 3);
        assert_eq!(ct.g_score(&2), Some(2));
        assert_eq!(ct.predecessors().get(&2), Some(&1));
    }
}
