use aoc24_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc24_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Legend};
use crate::utils::query::{marker_regions, Region};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["grid", "bfs", "regions"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    regions: Vec<Region>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_with(input, &Legend::MARKERS)?;
        Ok(SharedData {
            regions: marker_regions(&grid),
        })
    }
}

fn fence_price(regions: &[Region], fence: impl Fn(&Region) -> usize) -> usize {
    regions.iter().map(|r| r.area() * fence(r)).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fence_price(&shared.regions, Region::perimeter).to_string())
    }
}

/// Bulk discount: pay per straight side instead of per fence segment
impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fence_price(&shared.regions, Region::sides).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
AAAA
BBCD
BBCC
EEEC
";

    const LARGE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    fn solve_both(input: &str) -> (String, String) {
        let mut shared = Solver::parse(input).unwrap();
        (
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
        )
    }

    #[test]
    fn test_small_garden() {
        assert_eq!(solve_both(SMALL), ("140".into(), "80".into()));
    }

    #[test]
    fn test_garden_with_enclaves() {
        let input = "OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO\n";
        assert_eq!(solve_both(input), ("772".into(), "436".into()));
    }

    #[test]
    fn test_large_garden() {
        let shared = Solver::parse(LARGE).unwrap();
        assert_eq!(shared.regions.len(), 11);
        assert_eq!(solve_both(LARGE), ("1930".into(), "1206".into()));
    }

    #[test]
    fn test_sides_around_concave_shapes() {
        let e_shape = "EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n";
        assert_eq!(solve_both(e_shape).1, "236");

        // Two B regions touch only at a corner
        let diagonal = "AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA\n";
        assert_eq!(solve_both(diagonal).1, "368");
    }

    #[test]
    fn test_empty_tiles_are_not_plots() {
        assert_eq!(solve_both("A.A\n...\n"), ("8".into(), "8".into()));
    }
}
