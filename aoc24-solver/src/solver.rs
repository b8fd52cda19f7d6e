//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle text into the data shared by every part.
///
/// # Example
///
/// ```
/// use aoc24_solver::{AocParser, ParseError};
///
/// struct WallCount;
///
/// impl AocParser for WallCount {
///     type SharedData<'a> = usize;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         if input.trim().is_empty() {
///             return Err(ParseError::MissingData("empty grid".into()));
///         }
///         Ok(input.bytes().filter(|&b| b == b'#').count())
///     }
/// }
///
/// assert_eq!(WallCount::parse("#.#\n...").unwrap(), 2);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results parts want to share.
    ///
    /// Owned structs are the common case; `&'a str` works when no
    /// transformation is needed.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implemented once per part; the `AocSolver` derive generates the
/// [`Solver`] dispatch over all of them.
///
/// ```
/// use aoc24_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Rows;
///
/// impl AocParser for Rows {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl PartSolver<1> for Rows {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let mut rows = Rows::parse("#.#\n...\n#.#").unwrap();
/// assert_eq!(<Rows as PartSolver<1>>::solve(&mut rows).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part using (and possibly filling in) the shared data.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver for one puzzle day.
///
/// ```
/// use aoc24_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Corridor;
///
/// impl AocParser for Corridor {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Corridor {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.len().to_string()),
///             2 => Ok(shared.matches('#').count().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Corridor::parse("S..#..E\n").unwrap();
/// assert_eq!(Corridor::solve_part(&mut shared, 1).unwrap(), "7");
/// assert_eq!(Corridor::solve_part(&mut shared, 2).unwrap(), "1");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part (1-based)
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects `0` and parts above `PARTS`
    /// with [`SolveError::PartOutOfRange`].
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
