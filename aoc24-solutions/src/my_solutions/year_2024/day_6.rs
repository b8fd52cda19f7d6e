use aoc24_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc24_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Legend};
use crate::utils::query::{loop_obstructions_par, patrol_route};
use crate::utils::search::WalkOutcome;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["grid", "walk"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_with(input, &Legend::GUARD)?;
        grid.require_start()?;
        Ok(SharedData { grid })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match patrol_route(&shared.grid)? {
            WalkOutcome::Exited { visited } => Ok(visited.len().to_string()),
            WalkOutcome::Loop { .. } => Err(SolveError::NoSolution(
                "guard never leaves the lab".into(),
            )),
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(loop_obstructions_par(&shared.grid)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::query::loop_obstructions;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn test_part1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "41");
    }

    #[test]
    fn test_part2() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "6");
        assert_eq!(loop_obstructions(&shared.grid), Ok(6));
    }

    #[test]
    fn test_looping_guard_has_no_answer() {
        let mut shared = Solver::parse(".#..\n...#\n#^..\n..#.").unwrap();
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut shared),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_guard_drawn_facing_right() {
        let mut shared = Solver::parse("....#\n.>...\n.....").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "4");
    }

    #[test]
    fn test_maze_glyphs_rejected() {
        assert!(matches!(
            Solver::parse("S...\n.#..\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Solver::parse("^..E\n.#..\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_missing_guard_rejected() {
        assert!(matches!(
            Solver::parse("....\n.#..\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
