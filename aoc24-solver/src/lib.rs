//! Advent of Code 2024 solver framework
//!
//! Each puzzle day is a solver that parses its input once into shared data
//! and then answers one or more parts from it. This crate provides:
//!
//! - [`AocParser`], [`PartSolver`] and [`Solver`], the traits a day implements
//! - [`SolverInstance`] / [`DynSolver`], a parsed, timed, type-erased solver
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`], lookup by year and day
//! - [`SolverPlugin`] plus the `AutoRegisterSolver` derive for registration
//!   through `inventory`
//!
//! # Example
//!
//! ```
//! use aoc24_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! struct OpenTiles;
//!
//! impl AocParser for OpenTiles {
//!     type SharedData<'a> = &'a str;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input)
//!     }
//! }
//!
//! impl PartSolver<1> for OpenTiles {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.matches('.').count().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<OpenTiles>(2024, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2024, 1, "#.#\n..#").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError, Verdict};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code `AutoRegisterSolver` expands to
pub use inventory;

pub use aoc24_solver_macros::{AocSolver, AutoRegisterSolver};
