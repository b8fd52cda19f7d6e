//! Graph search over implicit state spaces
//!
//! - [`space`]: the [`StateSpace`] traits and grid move rules
//! - [`shortest_path`] / [`shortest_paths`]: Dijkstra, the latter keeping
//!   every equal-cost predecessor
//! - [`distance_map`] / [`distance_to`]: breadth-first search for unit steps
//! - [`walk`]: deterministic walks with cycle detection
//!
//! # Example
//!
//! ```rust
//! use aoc24_solutions::utils::grid::Grid;
//! use aoc24_solutions::utils::search::{distance_map, CardinalMoves};
//!
//! let grid = Grid::parse("S.#\n...").unwrap();
//! let dist = distance_map(&CardinalMoves::new(&grid), grid.start().unwrap());
//! assert_eq!(dist.len(), 5);
//! ```

mod bfs;
mod dijkstra;
pub mod space;
pub mod walk;


pub use bfs::{distance_map, distance_to};
pub use dijkstra::{shortest_path, shortest_paths, Reached, ShortestPaths};
pub use space::{
    CardinalMoves, Facing, Positioned, SameMarker, StateSpace, TurningMoves, WeightedStateSpace,
};
pub use walk::{loops, walk, Step, WalkOutcome};
