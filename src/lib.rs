//! # island_pathfinding
//!
//! Generates a bounded grid holding a single connected landmass surrounded by water, and finds
//! shortest walkable routes between water cells with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Movement is 4-directional with a
//! uniform step cost, so the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) is an admissible and
//! consistent heuristic and returned paths are optimal. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! of the water to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use island_pathfinding::{find_path, generate, Coord};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let grid = generate(20, 20, 0.3, &mut rng);
//! let path = find_path(&grid, Coord::new(0, 0), Coord::new(19, 19));
//! // The border is always water, so the corners are connected.
//! assert_eq!(path.len() - 1, 38);
//! ```
pub mod config;
pub mod coord;
pub mod error;
pub mod generator;
pub mod island_grid;
pub mod reconstruct;
pub mod search;
pub mod solver;

pub use config::{MapConfig, RouteQuery};
pub use coord::Coord;
pub use error::IslandError;
pub use generator::{generate, RandomSource, RegionGenerator};
pub use island_grid::{Cell, IslandGrid};
pub use reconstruct::{is_valid_path, path_steps, reconstruct_path};
pub use search::SearchContext;
pub use solver::{find_path, AstarSolver, GridSolver};

/// Cost of a single axis-aligned step.
pub const STEP_COST: usize = 1;
pub const N_SMALLVEC_SIZE: usize = 4;
