use core::fmt;
use smallvec::SmallVec;

/// A cell address on the grid. `x` is the column and `y` the row, both counted from the
/// top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

/// The four axis-aligned unit steps, in the order right, down, left, up.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

impl Coord {
    pub const fn new(x: usize, y: usize) -> Coord {
        Coord { x, y }
    }

    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Applies a unit step, returning [None] if the result would leave the non-negative quadrant.
    pub fn offset(&self, (dx, dy): (isize, isize)) -> Option<Coord> {
        Some(Coord::new(
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
        ))
    }

    /// The (up to) four axis-aligned neighbours. Neighbours with a negative component are
    /// omitted; the upper bound is left to the grid.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coord; 4]> {
        DIRECTIONS
            .iter()
            .filter_map(|&d| self.offset(d))
            .collect()
    }

    /// True if the two coordinates differ by exactly one unit along exactly one axis.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Coord {
        Coord::new(x, y)
    }
}
