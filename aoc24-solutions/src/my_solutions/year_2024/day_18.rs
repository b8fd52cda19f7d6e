use anyhow::{anyhow, Context};
use aoc24_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc24_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

use crate::utils::grid::{Coord, Grid, GridError};
use crate::utils::search::{distance_to, CardinalMoves};

/// Memory space is `SIZE` x `SIZE`
const SIZE: i32 = 71;
const FALLEN: usize = 1024;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["grid", "bfs", "binary-search"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    bytes: Vec<Coord>,
}

fn parse_byte(line: &str) -> anyhow::Result<Coord> {
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, found {line:?}"))?;
    let x: i32 = x.trim().parse().context("invalid x")?;
    let y: i32 = y.trim().parse().context("invalid y")?;
    Ok(Coord::new(y, x))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let bytes = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| {
                parse_byte(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {e:#}", idx + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if bytes.is_empty() {
            return Err(ParseError::MissingData("no falling bytes".into()));
        }
        Ok(SharedData { bytes })
    }
}

/// Fewest steps from the top-left to the bottom-right corner once the first
/// `fallen` bytes have landed; `None` when the exit is cut off.
fn steps_to_exit(bytes: &[Coord], size: i32, fallen: usize) -> Result<Option<u64>, GridError> {
    let fallen = &bytes[..fallen.min(bytes.len())];
    let grid = Grid::from_obstacles(size, size, fallen.iter().copied())?;
    let entry = Coord::new(0, 0);
    let exit = Coord::new(size - 1, size - 1);
    if grid.is_obstacle(entry) {
        return Ok(None);
    }
    Ok(distance_to(&CardinalMoves::new(&grid), entry, |c| c == exit).map(|r| r.cost))
}

/// The first byte whose landing cuts the exit off, found by bisecting on the
/// number of fallen bytes.
fn first_blocking(bytes: &[Coord], size: i32) -> Result<Option<Coord>, GridError> {
    if steps_to_exit(bytes, size, bytes.len())?.is_some() {
        return Ok(None);
    }
    // Reachable with `lo` bytes down, cut off with `hi`
    let (mut lo, mut hi) = (0, bytes.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if steps_to_exit(bytes, size, mid)?.is_some() {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    debug!("exit cut off after {hi} bytes");
    Ok(Some(bytes[hi - 1]))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        steps_to_exit(&shared.bytes, SIZE, FALLEN)?
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoSolution("exit is already cut off".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_blocking(&shared.bytes, SIZE)?
            .map(|byte| format!("{},{}", byte.col, byte.row))
            .ok_or_else(|| SolveError::NoSolution("exit stays reachable".into()))
    }
}
