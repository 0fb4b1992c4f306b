//! Validation of map parameters and route queries before they reach the generator and solver.
use crate::coord::Coord;
use crate::error::IslandError;
use crate::generator::{generate, RandomSource};
use crate::island_grid::IslandGrid;
use crate::solver::find_path;

/// Parameters of a generated map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
    /// Target fraction of all cells that become land, in `[0, 1]`.
    pub land_ratio: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            width: 50,
            height: 50,
            land_ratio: 0.3,
        }
    }
}

impl MapConfig {
    pub fn new(width: usize, height: usize, land_ratio: f64) -> MapConfig {
        MapConfig {
            width,
            height,
            land_ratio,
        }
    }

    pub fn validate(&self) -> Result<(), IslandError> {
        if self.width == 0 || self.height == 0 {
            return Err(IslandError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.land_ratio) {
            return Err(IslandError::InvalidLandRatio(self.land_ratio));
        }
        Ok(())
    }

    /// Validates the parameters and generates a map from them.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<IslandGrid, IslandError> {
        self.validate()?;
        Ok(generate(self.width, self.height, self.land_ratio, rng))
    }
}

/// A start and end cell to route between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteQuery {
    pub start: Coord,
    pub end: Coord,
}

impl RouteQuery {
    pub fn new(start: Coord, end: Coord) -> RouteQuery {
        RouteQuery { start, end }
    }

    /// From the top-left to the bottom-right corner of `grid`.
    pub fn corners(grid: &IslandGrid) -> RouteQuery {
        RouteQuery {
            start: Coord::new(0, 0),
            end: Coord::new(
                grid.width().saturating_sub(1),
                grid.height().saturating_sub(1),
            ),
        }
    }

    /// Both endpoints must be in bounds and hold water.
    pub fn validate(&self, grid: &IslandGrid) -> Result<(), IslandError> {
        for coord in [self.start, self.end] {
            if !grid.in_bounds(coord) {
                return Err(IslandError::OutOfBounds {
                    coord,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
            if !grid.is_water(coord) {
                return Err(IslandError::NotWater(coord));
            }
        }
        Ok(())
    }

    /// Validates the query and finds a shortest path. An unreachable end is not an error and
    /// yields an empty path.
    pub fn run(&self, grid: &IslandGrid) -> Result<Vec<Coord>, IslandError> {
        self.validate(grid)?;
        Ok(find_path(grid, self.start, self.end))
    }
}
