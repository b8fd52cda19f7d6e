//! Building blocks shared by the grid puzzles

pub mod grid;
pub mod query;
pub mod search;
