use aoc24_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

/// Counts walls, then open tiles, caching the parsed rows between parts
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TileCounter;

#[derive(Debug)]
struct Tiles {
    rows: Vec<String>,
    part1_calls: usize,
}

impl AocParser for TileCounter {
    type SharedData<'a> = Tiles;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no rows".into()));
        }
        Ok(Tiles {
            rows: input.lines().map(str::to_owned).collect(),
            part1_calls: 0,
        })
    }
}

impl PartSolver<1> for TileCounter {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.part1_calls += 1;
        let walls: usize = shared.rows.iter().map(|r| r.matches('#').count()).sum();
        Ok(walls.to_string())
    }
}

impl PartSolver<2> for TileCounter {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let open: usize = shared.rows.iter().map(|r| r.matches('.').count()).sum();
        Ok(open.to_string())
    }
}

/// Single-part solver borrowing the input
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Borrowing;

impl AocParser for Borrowing {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim_end())
    }
}

impl PartSolver<1> for Borrowing {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lines().count().to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(TileCounter::PARTS, 2);
    assert_eq!(Borrowing::PARTS, 1);
}

#[test]
fn test_dispatches_to_part_solvers() {
    let mut shared = TileCounter::parse("#.#\n...\n#S#").unwrap();
    assert_eq!(TileCounter::solve_part(&mut shared, 1).unwrap(), "4");
    assert_eq!(TileCounter::solve_part(&mut shared, 2).unwrap(), "4");
    assert_eq!(shared.part1_calls, 1);
}

#[test]
fn test_generated_dispatch_rejects_unknown_part() {
    let mut shared = TileCounter::parse("#").unwrap();
    assert!(matches!(
        TileCounter::solve_part(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
    assert!(matches!(
        TileCounter::solve_part_checked_range(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

#[test]
fn test_borrowed_shared_data() {
    let input = String::from("S..\n.#.\n..E\n");
    let mut shared = Borrowing::parse(&input).unwrap();
    assert_eq!(Borrowing::solve_part(&mut shared, 1).unwrap(), "3");
}

#[test]
fn test_parse_error_propagates() {
    assert!(matches!(
        TileCounter::parse("   \n"),
        Err(ParseError::MissingData(_))
    ));
}
