use smallvec::SmallVec;

use crate::{coord::Coord, island_grid::IslandGrid, solver::GridSolver, N_SMALLVEC_SIZE, STEP_COST};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Coord, usize); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &IslandGrid, node: &Coord) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    /// Manhattan distance times the heuristic factor. Factors above 1.0 trade optimality for
    /// fewer expansions.
    fn heuristic(&self, _grid: &IslandGrid, p1: &Coord, p2: &Coord) -> usize {
        ((p1.manhattan_distance(p2) * STEP_COST) as f32 * self.heuristic_factor) as usize
    }
}
