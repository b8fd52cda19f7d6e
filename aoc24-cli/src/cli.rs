//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across years; days and parts run sequentially within each year
    Year,
    /// Parallelize across year/day combinations; parts run sequentially (default)
    #[default]
    Day,
    /// Parallelize across all year/day/part combinations
    Part,
}

/// Advent of Code 2024 grid solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code grid solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs as `{year}/day{day:02}.txt`
    /// [default: $AOC_INPUT_DIR or ~/.config/aoc24/inputs]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Read the input for the selected puzzle from this file
    #[arg(short, long, requires_all = ["year", "day"])]
    pub input: Option<PathBuf>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.year, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.input_dir, None);
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(!args.quiet);
    }

    #[test]
    fn test_tags_and_filters() {
        let args = Args::try_parse_from([
            "aoc", "-y", "2024", "-d", "16", "-p", "2", "--tags", "grid,dijkstra",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2024));
        assert_eq!(args.day, Some(16));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["grid", "dijkstra"]);
    }

    #[test]
    fn test_out_of_range_day_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }

    #[test]
    fn test_input_file_needs_year_and_day() {
        assert!(Args::try_parse_from(["aoc", "--input", "maze.txt"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-d", "6", "--input", "lab.txt"]).is_err());

        let args =
            Args::try_parse_from(["aoc", "-y", "2024", "-d", "6", "--input", "lab.txt"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("lab.txt")));
    }
}
