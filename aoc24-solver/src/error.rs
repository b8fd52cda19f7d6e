//! Errors raised while registering, parsing and solving puzzles
//!
//! A failed part is either a puzzle that has no answer for its input, input
//! that could not be used, or a solver that could not run. [`Verdict`] names
//! the three so a report can tell them apart.

use std::sync::Arc;
use thiserror::Error;

/// Why puzzle input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A tile, line or number the puzzle does not allow
    #[error("malformed input: {0}")]
    InvalidFormat(String),
    /// Something the puzzle needs is absent, such as the start tile or the input file itself
    #[error("incomplete input: {0}")]
    MissingData(String),
}

/// Why a part produced no answer
#[derive(Debug, Clone, Error)]
pub enum SolveError {
    #[error("part {0} has no implementation")]
    PartNotImplemented(u8),
    /// Part 0, or a part past the solver's `PARTS`
    #[error("part {0} does not exist")]
    PartOutOfRange(u8),
    /// The input is well formed but admits no answer: the goal is unreachable
    /// or the walker never leaves
    #[error("no solution: {0}")]
    NoSolution(String),
    /// The solver hit an error of its own
    #[error("solver failed: {0}")]
    SolveFailed(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    pub fn failed(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        SolveError::SolveFailed(Arc::new(e))
    }
}

/// Any failure between looking up a solver and reading its answer.
///
/// Cheap to clone, so one parse failure can be reported against every part.
#[derive(Debug, Clone, Error)]
pub enum SolverError {
    #[error("no solver for {0}/{1:02}")]
    NotFound(u16, u8),
    #[error("{0}/{1:02} is not a puzzle day")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// How a part ended, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Solved,
    /// Ran to completion and proved there is no answer
    NoSolution,
    /// Input missing or malformed
    BadInput,
    /// The solver is missing or could not run the part
    Failed,
}

impl SolverError {
    pub fn verdict(&self) -> Verdict {
        match self {
            SolverError::Solve(SolveError::NoSolution(_)) => Verdict::NoSolution,
            SolverError::Parse(_) => Verdict::BadInput,
            SolverError::NotFound(..)
            | SolverError::InvalidYearDay(..)
            | SolverError::Solve(_) => Verdict::Failed,
        }
    }
}

impl Verdict {
    pub fn of<T>(answer: &Result<T, SolverError>) -> Self {
        match answer {
            Ok(_) => Verdict::Solved,
            Err(e) => e.verdict(),
        }
    }
}

/// Why a solver could not be registered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{0}/{1:02} already has a solver")]
    DuplicateFactory(u16, u8),
    #[error("cannot register {0}/{1:02}: not a puzzle day")]
    InvalidYearDay(u16, u8),
}
