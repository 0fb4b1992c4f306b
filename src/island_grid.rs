use crate::coord::Coord;
use crate::error::IslandError;
use crate::{N_SMALLVEC_SIZE, STEP_COST};
use core::fmt;
use core::str::FromStr;
use fxhash::FxHashSet;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// State of a single grid cell. [Cell::Water] is traversable, [Cell::Land] is an obstacle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Water,
    Land,
}

impl Cell {
    pub const WATER_SYMBOL: char = 'W';
    pub const LAND_SYMBOL: char = 'L';

    pub fn symbol(self) -> char {
        match self {
            Cell::Water => Cell::WATER_SYMBOL,
            Cell::Land => Cell::LAND_SYMBOL,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            Cell::WATER_SYMBOL => Some(Cell::Water),
            Cell::LAND_SYMBOL => Some(Cell::Land),
            _ => None,
        }
    }
}

/// [IslandGrid] stores the [Cell] values of a fixed-size map in row-major order and maintains
/// the 4-connected components of its water cells in a [UnionFind] structure, so that
/// reachability between two water cells can be answered without searching.
#[derive(Clone, Debug)]
pub struct IslandGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for IslandGrid {
    fn default() -> IslandGrid {
        IslandGrid {
            width: 0,
            height: 0,
            cells: Vec::new(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl IslandGrid {
    /// Creates a `width` by `height` grid filled with `cell`. Components are generated, so the
    /// grid is ready for queries.
    pub fn new(width: usize, height: usize, cell: Cell) -> IslandGrid {
        let mut grid = IslandGrid {
            width,
            height,
            cells: vec![cell; width * height],
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn get_ix(&self, coord: Coord) -> usize {
        coord.y * self.width + coord.x
    }

    /// The cell at `coord`, or [None] if it is out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(self.cells[self.get_ix(coord)])
        } else {
            None
        }
    }

    pub fn is_water(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Water)
    }

    /// True for cells on the outermost ring.
    pub fn on_border(&self, coord: Coord) -> bool {
        self.in_bounds(coord)
            && (coord.x == 0
                || coord.y == 0
                || coord.x == self.width - 1
                || coord.y == self.height - 1)
    }

    /// True for cells strictly inside the outermost ring.
    pub fn is_interior(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.on_border(coord)
    }

    /// Number of interior cells, i.e. the most land a generated map can hold.
    pub fn interior_capacity(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        iproduct!(0..self.height, 0..self.width).map(|(y, x)| Coord::new(x, y))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// In-bounds axis-aligned neighbours of `coord` that hold `cell`.
    pub fn neighbours_with(
        &self,
        coord: Coord,
        cell: Cell,
    ) -> impl Iterator<Item = Coord> + '_ {
        coord
            .neumann_neighborhood()
            .into_iter()
            .filter(move |&n| self.get(n) == Some(cell))
    }

    /// Water neighbours of `pos` paired with the cost of stepping onto them.
    pub fn neighborhood_points_and_cost(
        &self,
        pos: &Coord,
    ) -> SmallVec<[(Coord, usize); N_SMALLVEC_SIZE]> {
        self.neighbours_with(*pos, Cell::Water)
            .map(|p| (p, STEP_COST))
            .collect()
    }

    /// Updates a cell. Joins newly connected water components and flags the components as dirty
    /// if a water cell turning into land (potentially) splits a component.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        if !self.in_bounds(coord) {
            return;
        }
        let ix = self.get_ix(coord);
        let previous = self.cells[ix];
        self.cells[ix] = cell;
        match (previous, cell) {
            (Cell::Water, Cell::Land) => self.components_dirty = true,
            (_, Cell::Water) => {
                let joined = self
                    .neighbours_with(coord, Cell::Water)
                    .map(|n| self.get_ix(n))
                    .collect::<Vec<usize>>();
                for n_ix in joined {
                    self.components.union(ix, n_ix);
                }
            }
            _ => {}
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up neighbouring water cells to the same
    /// components. Only right and down neighbours are visited since unions are symmetric.
    pub fn generate_components(&mut self) {
        debug!(
            "Generating water components for {}x{} grid",
            self.width, self.height
        );
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for coord in self.coords().collect::<Vec<_>>() {
            if !self.is_water(coord) {
                continue;
            }
            let ix = self.get_ix(coord);
            for n in [Coord::new(coord.x + 1, coord.y), Coord::new(coord.x, coord.y + 1)] {
                if self.is_water(n) {
                    let n_ix = self.get_ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    /// Retrieves the component id a given water [Coord] belongs to.
    pub fn get_component(&self, coord: Coord) -> Option<usize> {
        if self.is_water(coord) {
            Some(self.components.find(self.get_ix(coord)))
        } else {
            None
        }
    }

    /// Checks if start and goal are water cells on the same component. Stale components
    /// (see [IslandGrid::update]) may report false positives but never false negatives.
    pub fn reachable(&self, start: Coord, goal: Coord) -> bool {
        match (self.get_component(start), self.get_component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn unreachable(&self, start: Coord, goal: Coord) -> bool {
        !self.reachable(start, goal)
    }

    /// Number of 4-connected land components.
    pub fn land_component_count(&self) -> usize {
        let mut land = UnionFind::new(self.width * self.height);
        for coord in self.coords() {
            if self.get(coord) != Some(Cell::Land) {
                continue;
            }
            for n in [Coord::new(coord.x + 1, coord.y), Coord::new(coord.x, coord.y + 1)] {
                if self.get(n) == Some(Cell::Land) {
                    land.union(self.get_ix(coord), self.get_ix(n));
                }
            }
        }
        self.coords()
            .filter(|&c| self.get(c) == Some(Cell::Land))
            .map(|c| land.find(self.get_ix(c)))
            .collect::<FxHashSet<usize>>()
            .len()
    }

    /// True if the grid holds exactly one landmass.
    pub fn is_single_landmass(&self) -> bool {
        self.land_component_count() == 1
    }

    pub fn border_is_water(&self) -> bool {
        self.coords()
            .filter(|&c| self.on_border(c))
            .all(|c| self.is_water(c))
    }
}

impl fmt::Display for IslandGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line = row.iter().map(|c| c.symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for IslandGrid {
    type Err = IslandError;

    /// Parses the [Display] format: one line per row, one symbol per cell. Whitespace around
    /// rows is trimmed and blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;
        for (line_ix, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(column, symbol)| {
                    Cell::from_symbol(symbol).ok_or(IslandError::Parse {
                        line: line_ix + 1,
                        column: column + 1,
                        symbol,
                    })
                })
                .collect::<Result<Vec<Cell>, _>>()?;
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(IslandError::RaggedRows {
                    line: line_ix + 1,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend(row);
            height += 1;
        }
        let width = width.ok_or(IslandError::EmptyGrid)?;
        let mut grid = IslandGrid {
            width,
            height,
            cells,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether water cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // A land wall splits the water into a left and a right half:
        //  ___
        // |WLW|
        // |WLW|
        //  ___
        let grid: IslandGrid = "WLW\nWLW".parse().unwrap();
        assert!(grid.reachable(Coord::new(0, 0), Coord::new(0, 1)));
        assert!(grid.unreachable(Coord::new(0, 0), Coord::new(2, 0)));
        assert!(grid.unreachable(Coord::new(0, 0), Coord::new(1, 0)));
        assert_eq!(grid.get_component(Coord::new(1, 1)), None);
    }

    #[test]
    fn diagonal_water_is_not_connected() {
        //  __
        // |WL|
        // |LW|
        //  __
        let grid: IslandGrid = "WL\nLW".parse().unwrap();
        assert!(grid.unreachable(Coord::new(0, 0), Coord::new(1, 1)));
    }

    #[test]
    fn set_joins_and_dirties_components() {
        let mut grid: IslandGrid = "WLW".parse().unwrap();
        assert!(grid.unreachable(Coord::new(0, 0), Coord::new(2, 0)));
        grid.set(Coord::new(1, 0), Cell::Water);
        assert!(!grid.components_dirty);
        assert!(grid.reachable(Coord::new(0, 0), Coord::new(2, 0)));
        grid.set(Coord::new(1, 0), Cell::Land);
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.unreachable(Coord::new(0, 0), Coord::new(2, 0)));
    }

    #[test]
    fn border_and_interior() {
        let grid = IslandGrid::new(4, 3, Cell::Water);
        assert!(grid.on_border(Coord::new(0, 1)));
        assert!(grid.on_border(Coord::new(3, 1)));
        assert!(grid.on_border(Coord::new(2, 2)));
        assert!(grid.is_interior(Coord::new(1, 1)));
        assert!(grid.is_interior(Coord::new(2, 1)));
        assert!(!grid.is_interior(Coord::new(4, 1)));
        assert_eq!(grid.interior_capacity(), 2);
        assert_eq!(IslandGrid::new(2, 5, Cell::Water).interior_capacity(), 0);
    }

    #[test]
    fn counts_land_components() {
        let grid: IslandGrid = "WWWWW\nWLWLW\nWLLLW\nWWWWW".parse().unwrap();
        assert_eq!(grid.count(Cell::Land), 5);
        assert!(grid.is_single_landmass());
        assert!(grid.border_is_water());
        let split: IslandGrid = "WWWWW\nWLWLW\nWWWWW".parse().unwrap();
        assert_eq!(split.land_component_count(), 2);
        assert!(!split.is_single_landmass());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let text = "WWWW\nWLLW\nWWWW\n";
        let grid: IslandGrid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<IslandGrid>().unwrap_err(), IslandError::EmptyGrid);
        assert_eq!(
            "WW\nWX".parse::<IslandGrid>().unwrap_err(),
            IslandError::Parse {
                line: 2,
                column: 2,
                symbol: 'X'
            }
        );
        assert_eq!(
            "WWW\nWW".parse::<IslandGrid>().unwrap_err(),
            IslandError::RaggedRows {
                line: 2,
                expected: 3,
                found: 2
            }
        );
    }
}
