//! Report lines for puzzle answers, missing inputs and the run summary
//!
//! Lines are rendered to strings and then printed: answers on stdout,
//! everything that is not an answer on stderr.

use crate::executor::SolverResult;
use aoc24_solver::{SolveError, SolverError, Verdict};
use chrono::TimeDelta;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        let line = if self.quiet {
            render_quiet(result)
        } else {
            render_result(result)
        };
        match Verdict::of(&result.answer) {
            Verdict::Solved => println!("{line}"),
            _ => eprintln!("{line}"),
        }
    }

    pub fn print_missing_inputs(&self, missing: &[(u16, u8, PathBuf)]) {
        if self.quiet || missing.is_empty() {
            return;
        }
        println!("Missing {} input file(s):", missing.len());
        for (year, day, path) in missing {
            println!("  - {year}/day{day:02} ({})", path.display());
        }
    }

    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        for line in render_summary(results, self.start_time.elapsed()) {
            println!("{line}");
        }
    }
}

fn puzzle_label(result: &SolverResult) -> String {
    let mut label = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    if !result.tags.is_empty() {
        label.push_str(&format!(" [{}]", result.tags.join(", ")));
    }
    label
}

/// One line per part: the answer with its timings, or what kept it from having one
fn render_result(result: &SolverResult) -> String {
    let label = puzzle_label(result);
    match &result.answer {
        Ok(answer) => {
            let parse = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{label}: {answer} ({parse}solve: {})",
                format_duration(result.solve_duration)
            )
        }
        Err(SolverError::Solve(SolveError::NoSolution(reason))) => {
            format!("{label}: no solution ({reason})")
        }
        Err(e) if e.verdict() == Verdict::BadInput => format!("{label}: bad input - {e}"),
        Err(e) => format!("{label}: error - {e}"),
    }
}

/// Quiet mode: the bare answer; anything else still names its puzzle
fn render_quiet(result: &SolverResult) -> String {
    match &result.answer {
        Ok(answer) => answer.clone(),
        Err(e) => format!("{}/{:02} Part {}: {e}", result.year, result.day, result.part),
    }
}

fn render_summary(results: &[SolverResult], elapsed: Duration) -> Vec<String> {
    let count = |verdict: Verdict| {
        results
            .iter()
            .filter(|r| Verdict::of(&r.answer) == verdict)
            .count()
    };

    // Only solved parts count towards compute time
    let solved = || results.iter().filter(|r| r.answer.is_ok());
    let parse_time: TimeDelta = solved().filter_map(|r| r.parse_duration).sum();
    let solve_time: TimeDelta = solved().map(|r| r.solve_duration).sum();

    let mut lines = vec![
        "--- Summary ---".to_string(),
        format!(
            "Parts: {} solved, {} without solution, {} bad input, {} failed",
            count(Verdict::Solved),
            count(Verdict::NoSolution),
            count(Verdict::BadInput),
            count(Verdict::Failed),
        ),
        format!("Total parse time: {}", format_duration(parse_time)),
        format!("Total solve time: {}", format_duration(solve_time)),
        format!("Elapsed wall-clock time: {}", format_std_duration(elapsed)),
    ];
    if !elapsed.is_zero() {
        let compute_secs =
            (parse_time + solve_time).num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        lines.push(format!(
            "Speedup factor: {:.2}x",
            compute_secs / elapsed.as_secs_f64()
        ));
    }
    lines
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros as u128)
}

fn format_std_duration(d: Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
