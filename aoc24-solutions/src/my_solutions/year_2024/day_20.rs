use std::collections::HashMap;

use aoc24_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc24_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Coord, Grid};
use crate::utils::query::{count_shortcuts, track_distances};

/// Cheats must save at least 100 picoseconds
const THRESHOLD: u64 = 99;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, tags = ["grid", "bfs", "shortcuts"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    distances: Option<HashMap<Coord, u64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        grid.require_start()?;
        grid.require_end()?;
        Ok(SharedData {
            grid,
            distances: None,
        })
    }
}

fn distances(shared: &mut SharedData) -> Result<&HashMap<Coord, u64>, SolveError> {
    let dist = match shared.distances.take() {
        Some(dist) => dist,
        None => {
            let dist = track_distances(&shared.grid)?;
            if !dist.contains_key(&shared.grid.require_end()?) {
                return Err(SolveError::NoSolution("race track is not connected".into()));
            }
            dist
        }
    };
    Ok(&*shared.distances.insert(dist))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_shortcuts(distances(shared)?, 2, THRESHOLD).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_shortcuts(distances(shared)?, 20, THRESHOLD).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    fn example_distances() -> HashMap<Coord, u64> {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        distances(&mut shared).unwrap().clone()
    }

    #[test]
    fn test_track_length() {
        let dist = example_distances();
        assert_eq!(dist.len(), 85);
        assert_eq!(dist[&Coord::new(7, 5)], 84);
    }

    #[test]
    fn test_two_step_cheats() {
        let dist = example_distances();
        assert_eq!(count_shortcuts(&dist, 2, 19), 5);
        assert_eq!(count_shortcuts(&dist, 2, 20), 4);
        assert_eq!(count_shortcuts(&dist, 2, 49), 1);
        assert_eq!(count_shortcuts(&dist, 2, 60), 1);
        assert_eq!(count_shortcuts(&dist, 2, 70), 0);
    }

    #[test]
    fn test_long_cheats() {
        let dist = example_distances();
        assert_eq!(count_shortcuts(&dist, 20, 49), 285);
        assert_eq!(count_shortcuts(&dist, 20, 74), 3);
        assert_eq!(count_shortcuts(&dist, 20, 75), 3);
        assert_eq!(count_shortcuts(&dist, 20, 76), 0);
    }

    #[test]
    fn test_example_has_no_hundred_picosecond_cheats() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "0");
    }

    #[test]
    fn test_broken_track() {
        let mut shared = Solver::parse("#####\n#S#E#\n#####").unwrap();
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut shared),
            Err(SolveError::NoSolution(_))
        ));
    }
}
