use crate::coord::Coord;
use crate::island_grid::IslandGrid;
use crate::reconstruct::path_steps;
use crate::search::SearchContext;
use crate::STEP_COST;
use log::{info, warn};

pub mod astar;

pub use astar::AstarSolver;

/// A search strategy over the water cells of an [IslandGrid].
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Coord, usize)>;

    /// Estimate of the remaining cost from `p1` to `p2`.
    fn heuristic(&self, grid: &IslandGrid, p1: &Coord, p2: &Coord) -> usize;

    fn successors(&self, grid: &IslandGrid, node: &Coord) -> Self::Successors;

    /// Total cost of following `path`, every step costing [STEP_COST].
    fn get_path_cost(&self, path: &[Coord]) -> usize {
        path_steps(path).unwrap_or(0) * STEP_COST
    }

    /// Computes a path from start to goal, both inclusive, or [None] if no path exists.
    fn get_path_single_goal(
        &self,
        grid: &IslandGrid,
        start: Coord,
        goal: Coord,
    ) -> Option<Vec<Coord>> {
        let mut ct = SearchContext::new();
        self.get_path_single_goal_with_context(grid, &mut ct, start, goal)
    }

    /// Same as [get_path_single_goal](Self::get_path_single_goal), but runs the search in a
    /// caller-owned [SearchContext] whose maps can be inspected afterwards.
    fn get_path_single_goal_with_context(
        &self,
        grid: &IslandGrid,
        ct: &mut SearchContext<Coord, usize>,
        start: Coord,
        goal: Coord,
    ) -> Option<Vec<Coord>> {
        ct.clear();
        if !grid.is_water(start) || !grid.is_water(goal) {
            warn!("Endpoints {start} and {goal} must both be water cells on the grid");
            return None;
        }
        // Check if start and goal are on the same connected component.
        if grid.unreachable(start, goal) {
            info!("{goal} is not reachable from {start}");
            return None;
        }
        // The goal is reachable from the start, compute a path
        let result = ct
            .astar(
                &start,
                |node| self.successors(grid, node),
                |point| self.heuristic(grid, point, &goal),
                |point| *point == goal,
            )
            .map(|(v, _c)| v);
        if result.is_none() {
            warn!(
                "{goal} is reachable from {start} but no path was found, are the components stale?"
            );
        }
        result
    }
}

/// Finds a shortest 4-directional path over water from `start` to `end` using A* with the
/// Manhattan distance heuristic.
///
/// Returns the path from `start` to `end`, both inclusive, or an empty [Vec] if `end` cannot be
/// reached (or either endpoint is not a water cell on the grid).
pub fn find_path(grid: &IslandGrid, start: Coord, end: Coord) -> Vec<Coord> {
    AstarSolver::new()
        .get_path_single_goal(grid, start, end)
        .unwrap_or_default()
}
