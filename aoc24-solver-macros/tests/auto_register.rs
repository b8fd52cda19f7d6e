use aoc24_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder, inventory, SolverPlugin,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2019, day = 3, tags = ["macro-test", "grid"])]
struct TaggedSolver;

impl AocParser for TaggedSolver {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for TaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 4)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("one".into())
    }
}

impl PartSolver<2> for UntaggedSolver {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Err(SolveError::NoSolution("goal unreachable".into()))
    }
}

#[test]
fn test_plugins_are_submitted_with_tags() {
    let tagged = inventory::iter::<SolverPlugin>()
        .find(|p| p.year == 2019 && p.day == 3)
        .expect("tagged plugin submitted");
    assert_eq!(tagged.tags, &["macro-test", "grid"]);
    assert_eq!(tagged.solver.parts(), 1);

    let untagged = inventory::iter::<SolverPlugin>()
        .find(|p| p.year == 2019 && p.day == 4)
        .expect("untagged plugin submitted");
    assert!(untagged.tags.is_empty());
    assert_eq!(untagged.solver.parts(), 2);
}

#[test]
fn test_registry_filters_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2019, 3));
    assert!(!registry.storage().contains(2019, 4));
    let info = registry.storage().get_info(2019, 3).unwrap();
    assert_eq!(info.tags, &["macro-test", "grid"]);

    let mut solver = registry.create_solver(2019, 3, "a\nb\nc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
}

#[test]
fn test_registered_solver_reports_solve_errors() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2019, 4, "").unwrap();
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "one");
    assert!(matches!(solver.solve(2), Err(SolveError::NoSolution(_))));
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}
