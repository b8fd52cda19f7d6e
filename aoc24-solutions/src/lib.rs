//! Advent of Code 2024 grid puzzles with automatic registration
//!
//! [`utils`] holds the reusable pieces: a sparse [`Grid`](utils::grid::Grid)
//! model, searches over implicit state spaces, and the route queries the
//! puzzles ask. Solutions live under `my_solutions`, organized by year, and
//! register themselves through the `AutoRegisterSolver` derive.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
