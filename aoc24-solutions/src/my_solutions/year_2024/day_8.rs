use std::collections::{BTreeMap, HashSet};

use aoc24_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc24_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Coord, Grid, Legend, Terrain};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["grid", "antennas"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    antennas: BTreeMap<char, Vec<Coord>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_with(input, &Legend::MARKERS)?;
        let antennas = grid.markers_by_value();
        Ok(SharedData { grid, antennas })
    }
}

/// Ordered pairs of distinct antennas sharing a frequency
fn antenna_pairs(shared: &SharedData) -> impl Iterator<Item = (Coord, Coord)> + '_ {
    shared.antennas.values().flat_map(|group| {
        group
            .iter()
            .copied()
            .permutations(2)
            .map(|pair| (pair[0], pair[1]))
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let antinodes: HashSet<Coord> = antenna_pairs(shared)
            .map(|(a, b)| b + (b - a))
            .filter(|&p| shared.grid.in_bounds(p))
            .collect();
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut antinodes = HashSet::new();
        for (a, b) in antenna_pairs(shared) {
            let step = b - a;
            let mut p = b;
            while shared.grid.in_bounds(p) {
                antinodes.insert(p);
                p = p + step;
            }
        }
        Ok(antinodes.len().to_string())
    }
}
