use aoc24_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc24_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::query::{optimal_tiles, OptimalTiles};

const TURN_COST: u64 = 1000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    best: Option<OptimalTiles>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        grid.require_start()?;
        grid.require_end()?;
        Ok(SharedData { grid, best: None })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.cost.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.tiles.to_string())
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> Result<OptimalTiles, SolveError> {
    if let Some(best) = shared.best {
        return Ok(best);
    }
    let best = optimal_tiles(&shared.grid, TURN_COST)?
        .ok_or_else(|| SolveError::NoSolution("end tile is unreachable".into()))?;
    shared.best = Some(best);
    Ok(best)
}
