use crate::coord::Coord;
use itertools::Itertools;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Walks the predecessor relation back from `end` until a node without predecessor (the start)
/// is reached, and returns the visited nodes ordered from start to `end`, both inclusive.
pub fn reconstruct_path<N, S>(predecessors: &HashMap<N, N, S>, end: N) -> Vec<N>
where
    N: Eq + Hash + Clone,
    S: BuildHasher,
{
    let mut path: Vec<N> =
        std::iter::successors(Some(end), |node| predecessors.get(node).cloned()).collect();
    path.reverse();
    path
}

/// Number of steps taken along `path`, or [None] for the empty "no path" result.
pub fn path_steps<N>(path: &[N]) -> Option<usize> {
    path.len().checked_sub(1)
}

/// Checks that every consecutive pair of coordinates is a single axis-aligned unit step.
pub fn is_valid_path(path: &[Coord]) -> bool {
    path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}
