use super::Coord;
use aoc24_solver::{ParseError, SolveError};
use thiserror::Error;

/// Grid text (or coordinate list) that cannot form a valid grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected cell {cell:?} at row {row}, column {col}")]
    UnexpectedCell { row: usize, col: usize, cell: char },
    #[error("second start tile at {second} (first at {first})")]
    DuplicateStart { first: Coord, second: Coord },
    #[error("second end tile at {second} (first at {first})")]
    DuplicateEnd { first: Coord, second: Coord },
    #[error("{0} lies outside the grid")]
    OutOfBounds(Coord),
    #[error("grid dimension {0} does not fit a coordinate")]
    TooLarge(usize),
}

/// A query needed a landmark the grid does not have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingLandmark {
    #[error("grid has no start tile")]
    Start,
    #[error("grid has no end tile")]
    End,
}

impl From<GridError> for ParseError {
    fn from(e: GridError) -> Self {
        ParseError::InvalidFormat(e.to_string())
    }
}

impl From<GridError> for SolveError {
    fn from(e: GridError) -> Self {
        SolveError::failed(e)
    }
}

impl From<MissingLandmark> for ParseError {
    fn from(e: MissingLandmark) -> Self {
        ParseError::MissingData(e.to_string())
    }
}

impl From<MissingLandmark> for SolveError {
    fn from(e: MissingLandmark) -> Self {
        SolveError::failed(e)
    }
}
