use crate::coord::Coord;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IslandError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Land ratio must lie in [0, 1], got {0}")]
    InvalidLandRatio(f64),
    #[error("{coord} lies outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },
    #[error("{0} is not a water cell")]
    NotWater(Coord),
    #[error("Unknown cell symbol {symbol:?} at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        symbol: char,
    },
    #[error("Line {line} has {found} cells, expected {expected}")]
    RaggedRows {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Grid text contains no rows")]
    EmptyGrid,
}
