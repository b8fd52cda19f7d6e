use std::collections::HashMap;

use aoc24_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc24_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Coord, Grid, Legend};
use crate::utils::search::{distance_map, StateSpace};

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["grid", "bfs"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    heights: HashMap<Coord, u8>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_with(input, &Legend::MARKERS)?;
        let heights = grid
            .markers()
            .iter()
            .map(|(&c, &m)| match m.to_digit(10) {
                Some(h) => Ok((c, h as u8)),
                None => Err(ParseError::InvalidFormat(format!(
                    "height {m:?} at {c} is not a digit"
                ))),
            })
            .collect::<Result<_, _>>()?;
        Ok(SharedData { heights })
    }
}

/// Steps onto an orthogonal neighbour exactly one higher
struct UphillMoves<'a> {
    heights: &'a HashMap<Coord, u8>,
}

impl StateSpace for UphillMoves<'_> {
    type State = Coord;

    fn neighbors(&self, state: Coord, buf: &mut Vec<Coord>) {
        let Some(&h) = self.heights.get(&state) else {
            return;
        };
        buf.extend(
            state
                .neighbors()
                .filter(|n| self.heights.get(n) == Some(&(h + 1))),
        );
    }
}

impl SharedData {
    fn with_height(&self, height: u8) -> impl Iterator<Item = Coord> + '_ {
        self.heights
            .iter()
            .filter(move |&(_, &h)| h == height)
            .map(|(&c, _)| c)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let moves = UphillMoves {
            heights: &shared.heights,
        };
        let score: usize = shared
            .with_height(TRAILHEAD)
            .map(|head| {
                distance_map(&moves, head)
                    .keys()
                    .filter(|&&c| shared.heights.get(&c) == Some(&SUMMIT))
                    .count()
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let moves = UphillMoves {
            heights: &shared.heights,
        };

        // Trails from each tile to any summit, filled from the summits down
        let mut trails: HashMap<Coord, u64> = HashMap::with_capacity(shared.heights.len());
        let mut buf = Vec::new();
        let descending = shared
            .heights
            .iter()
            .sorted_unstable_by_key(|&(_, &h)| std::cmp::Reverse(h));
        for (&c, &h) in descending {
            let count: u64 = if h == SUMMIT {
                1
            } else {
                buf.clear();
                moves.neighbors(c, &mut buf);
                buf.iter().map(|n| trails.get(n).copied().unwrap_or(0)).sum()
            };
            trails.insert(c, count);
        }

        let rating: u64 = shared
            .with_height(TRAILHEAD)
            .map(|head| trails.get(&head).copied().unwrap_or(0))
            .sum();
        Ok(rating.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn test_part1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "36");
    }

    #[test]
    fn test_part2() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "81");
    }

    #[test]
    fn test_impassable_tiles() {
        // `.` tiles are never part of a trail
        let text = "\
...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9
";
        let mut shared = Solver::parse(text).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "2");
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(matches!(
            Solver::parse("01\n2x"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
