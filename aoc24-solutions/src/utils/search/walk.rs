//! Deterministic guard walks: straight ahead until blocked, then turn right
//!
//! The walk either leaves the terrain or revisits a (position, heading) state,
//! which makes it a loop.

use std::collections::HashSet;

use log::trace;

use super::space::Facing;
use crate::utils::grid::{Coord, Terrain};

/// Result of one move of the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward(Facing),
    /// Blocked ahead; rotated right in place
    Turned(Facing),
    /// The next tile lies outside the terrain
    Exited,
}

/// Advance the walker by one move
pub fn step<T: Terrain + ?Sized>(terrain: &T, state: Facing) -> Step {
    let ahead = state.ahead();
    if !terrain.in_bounds(ahead) {
        Step::Exited
    } else if terrain.is_blocked(ahead) {
        Step::Turned(state.turned_right())
    } else {
        Step::Forward(state.forward())
    }
}

/// How a walk ended, with every tile it stood on (start included)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    Exited { visited: HashSet<Coord> },
    Loop { visited: HashSet<Coord> },
}

impl WalkOutcome {
    pub fn visited(&self) -> &HashSet<Coord> {
        match self {
            WalkOutcome::Exited { visited } | WalkOutcome::Loop { visited } => visited,
        }
    }

    pub fn into_visited(self) -> HashSet<Coord> {
        match self {
            WalkOutcome::Exited { visited } | WalkOutcome::Loop { visited } => visited,
        }
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, WalkOutcome::Loop { .. })
    }
}

/// Walk from `start` until the walker leaves the terrain or repeats a state
pub fn walk<T: Terrain + ?Sized>(terrain: &T, start: Facing) -> WalkOutcome {
    let mut visited = HashSet::from([start.pos]);
    let mut seen = HashSet::from([start]);
    let mut state = start;

    loop {
        state = match step(terrain, state) {
            Step::Exited => return WalkOutcome::Exited { visited },
            Step::Forward(next) => {
                visited.insert(next.pos);
                next
            }
            Step::Turned(next) => next,
        };
        if !seen.insert(state) {
            return WalkOutcome::Loop { visited };
        }
    }
}

/// Whether the walk from `start` never leaves the terrain.
///
/// A cycle must contain a turn, so only post-turn states are remembered.
pub fn loops<T: Terrain + ?Sized>(terrain: &T, start: Facing) -> bool {
    let mut turns = HashSet::new();
    let mut state = start;

    loop {
        match step(terrain, state) {
            Step::Exited => return false,
            Step::Forward(next) => state = next,
            Step::Turned(next) => {
                if !turns.insert(next) {
                    trace!("walk from {start:?} loops at {next:?}");
                    return true;
                }
                state = next;
            }
        }
    }
}
