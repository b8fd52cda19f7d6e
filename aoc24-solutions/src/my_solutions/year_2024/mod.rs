//! 2024 grid and state-space puzzles

pub mod day_10;
pub mod day_12;
pub mod day_16;
pub mod day_18;
pub mod day_20;
pub mod day_6;
pub mod day_8;
