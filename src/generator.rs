//! Randomised growth of a single connected landmass.
//!
//! Growth starts from one interior seed cell and expands depth-first: the most recently
//! converted cell is expanded next, which produces elongated, tendril-like islands rather than
//! compact blobs. Cells on the outermost ring are never converted, so every generated map is
//! surrounded by water.
use crate::coord::{Coord, DIRECTIONS};
use crate::island_grid::{Cell, IslandGrid};
use core::ops::Range;
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Source of randomness for map generation. Implemented for every [Rng], so a seeded
/// [rand::rngs::StdRng] yields reproducible maps.
pub trait RandomSource {
    /// Picks a value uniformly from a non-empty `range`.
    fn pick_uniform_in_range(&mut self, range: Range<usize>) -> usize;
    /// Shuffles `items` in place.
    fn shuffle_sequence<T>(&mut self, items: &mut [T]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_uniform_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }

    fn shuffle_sequence<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

/// Generates island maps using its owned random source.
#[derive(Clone, Debug)]
pub struct RegionGenerator<R: RandomSource> {
    pub rng: R,
}

impl<R: RandomSource> RegionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a `width` by `height` map whose land covers `floor(width * height * land_ratio)`
    /// cells, see [generate].
    pub fn generate(&mut self, width: usize, height: usize, land_ratio: f64) -> IslandGrid {
        generate(width, height, land_ratio, &mut self.rng)
    }
}

/// Number of land cells requested for the given dimensions and ratio.
pub fn target_land_cells(width: usize, height: usize, land_ratio: f64) -> usize {
    // NaN and negative ratios saturate to zero
    ((width * height) as f64 * land_ratio).floor() as usize
}

/// Generates a map with a single 4-connected landmass surrounded by water.
///
/// If the interior cannot hold the requested amount of land, growth stops once the interior is
/// exhausted and the returned map holds fewer land cells than requested. A grid narrower or
/// shorter than 3 cells has no interior and is returned as all water.
///
/// The returned grid has up-to-date water components.
pub fn generate<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    land_ratio: f64,
    rng: &mut R,
) -> IslandGrid {
    let target = target_land_cells(width, height, land_ratio);
    let mut grid = IslandGrid::new(width, height, Cell::Water);
    if target == 0 {
        info!("Generated {width}x{height} map without land (ratio {land_ratio})");
        return grid;
    }
    if grid.interior_capacity() == 0 {
        warn!(
            "{width}x{height} map has no interior, {target} land cells requested but none placed"
        );
        return grid;
    }

    let seed = Coord::new(
        rng.pick_uniform_in_range(1..width - 1),
        rng.pick_uniform_in_range(1..height - 1),
    );
    debug!("Seeding land at {seed}");
    grid.set(seed, Cell::Land);
    let mut remaining = target - 1;

    // Stack: the most recently converted cell expands first.
    let mut frontier = vec![seed];
    let mut directions = DIRECTIONS;
    'growth: while remaining > 0 {
        let Some(current) = frontier.pop() else {
            break;
        };
        rng.shuffle_sequence(&mut directions);
        for &d in &directions {
            let Some(next) = current.offset(d) else {
                continue;
            };
            if grid.is_interior(next) && grid.is_water(next) {
                grid.set(next, Cell::Land);
                frontier.push(next);
                remaining -= 1;
                if remaining == 0 {
                    break 'growth;
                }
            }
        }
    }
    grid.update();

    let placed = target - remaining;
    if remaining > 0 {
        warn!(
            "Interior of {width}x{height} map exhausted: placed {placed} of {target} land cells"
        );
    } else {
        info!("Generated {width}x{height} map with {placed} land cells");
    }
    grid
}
