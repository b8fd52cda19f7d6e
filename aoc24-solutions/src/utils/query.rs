//! Puzzle-level questions answered with the grid and search modules

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::utils::grid::{Coord, Direction, Grid, MissingLandmark};
use crate::utils::search::{
    distance_map, loops, shortest_path, shortest_paths, walk, CardinalMoves, Facing, Positioned,
    SameMarker, TurningMoves, WalkOutcome,
};

/// Cost of the cheapest route and how many tiles lie on any route of that cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimalTiles {
    pub cost: u64,
    pub tiles: usize,
}

fn maze_start(grid: &Grid) -> Result<Facing, MissingLandmark> {
    Ok(Facing::new(grid.require_start()?, Direction::Right))
}

/// Cheapest start-to-end cost with unit steps and `turn_cost` per 90° turn.
///
/// The walker starts facing right; `Ok(None)` when the end is unreachable.
pub fn cheapest_route(grid: &Grid, turn_cost: u64) -> Result<Option<u64>, MissingLandmark> {
    let start = maze_start(grid)?;
    let end = grid.require_end()?;
    let moves = TurningMoves::new(grid).turn_cost(turn_cost);
    Ok(shortest_path(&moves, start, |f| f.pos() == end).map(|r| r.cost))
}

/// Cheapest cost plus the number of distinct tiles on at least one cheapest
/// route, whatever heading the route arrives at the end with.
pub fn optimal_tiles(grid: &Grid, turn_cost: u64) -> Result<Option<OptimalTiles>, MissingLandmark> {
    let start = maze_start(grid)?;
    let end = grid.require_end()?;
    let moves = TurningMoves::new(grid).turn_cost(turn_cost);
    let paths = shortest_paths(&moves, start);

    let Some((cost, terminals)) = paths.cheapest(Direction::ALL.map(|dir| Facing::new(end, dir)))
    else {
        return Ok(None);
    };

    let mut tiles: HashSet<Coord> = paths
        .states_on_paths(terminals)
        .into_iter()
        .map(|f| f.pos())
        .collect();
    tiles.insert(start.pos);
    tiles.insert(end);

    debug!("{} tiles on cheapest routes of cost {cost}", tiles.len());
    Ok(Some(OptimalTiles {
        cost,
        tiles: tiles.len(),
    }))
}

/// The guard faces the arrow it is drawn as; any other start faces up
fn patrol_start(grid: &Grid) -> Result<Facing, MissingLandmark> {
    let dir = grid
        .start_glyph()
        .and_then(Direction::from_arrow)
        .unwrap_or(Direction::Up);
    Ok(Facing::new(grid.require_start()?, dir))
}

/// Walk the guard from the start tile
pub fn patrol_route(grid: &Grid) -> Result<WalkOutcome, MissingLandmark> {
    Ok(walk(grid, patrol_start(grid)?))
}

/// Tiles where one extra obstacle would trap the guard in a loop.
///
/// Only tiles on the unobstructed route can change it; the start tile is
/// occupied by the guard and never a candidate.
fn obstruction_candidates(grid: &Grid) -> Result<(Facing, Vec<Coord>), MissingLandmark> {
    let start = patrol_start(grid)?;
    let mut candidates: Vec<Coord> = walk(grid, start)
        .into_visited()
        .into_iter()
        .filter(|&c| c != start.pos)
        .collect();
    candidates.sort_unstable();
    debug!("{} obstruction candidates", candidates.len());
    Ok((start, candidates))
}

/// Number of single-obstacle placements that make the guard loop
pub fn loop_obstructions(grid: &Grid) -> Result<usize, MissingLandmark> {
    let (start, candidates) = obstruction_candidates(grid)?;
    Ok(candidates
        .into_iter()
        .filter(|&c| loops(&grid.with_obstacle(c), start))
        .count())
}

/// [`loop_obstructions`] with the trials spread over the rayon pool
pub fn loop_obstructions_par(grid: &Grid) -> Result<usize, MissingLandmark> {
    let (start, candidates) = obstruction_candidates(grid)?;
    Ok(candidates
        .into_par_iter()
        .filter(|&c| loops(&grid.with_obstacle(c), start))
        .count())
}

/// Step distance from the start to every track tile reachable from it
pub fn track_distances(grid: &Grid) -> Result<HashMap<Coord, u64>, MissingLandmark> {
    let start = grid.require_start()?;
    Ok(distance_map(&CardinalMoves::new(grid), start))
}

/// Ordered pairs of track tiles `(a, b)` no further than `max_radius` apart,
/// and at least 2, where jumping from `a` to `b` saves more than `threshold`.
///
/// The saving is `dist[b] - dist[a] - manhattan(a, b)`.
pub fn count_shortcuts(distances: &HashMap<Coord, u64>, max_radius: u32, threshold: u64) -> usize {
    let track: Vec<(Coord, u64)> = distances.iter().map(|(&c, &d)| (c, d)).collect();

    track
        .iter()
        .cartesian_product(track.iter())
        .filter(|((a, da), (b, db))| {
            let jump = a.manhattan(*b);
            (2..=max_radius).contains(&jump)
                && db
                    .checked_sub(da + u64::from(jump))
                    .is_some_and(|saving| saving > threshold)
        })
        .count()
}

/// A maximal 4-connected set of tiles carrying the same marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub marker: char,
    pub tiles: HashSet<Coord>,
}

impl Region {
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// Unit edges between a tile of the region and a tile outside it
    pub fn perimeter(&self) -> usize {
        self.tiles
            .iter()
            .flat_map(|c| c.neighbors())
            .filter(|n| !self.tiles.contains(n))
            .count()
    }

    /// Straight fence runs around the region, inner holes included.
    ///
    /// A closed outline has as many sides as corners, so each tile counts the
    /// outline corners it sits on: convex where both orthogonal neighbours
    /// are outside, concave where both are inside but the diagonal is not.
    pub fn sides(&self) -> usize {
        const QUADRANTS: [(Direction, Direction); 4] = [
            (Direction::Up, Direction::Left),
            (Direction::Up, Direction::Right),
            (Direction::Down, Direction::Left),
            (Direction::Down, Direction::Right),
        ];

        self.tiles
            .iter()
            .map(|&c| {
                QUADRANTS
                    .iter()
                    .filter(|&&(v, h)| {
                        let vertical = self.tiles.contains(&(c + v));
                        let horizontal = self.tiles.contains(&(c + h));
                        let diagonal = self.tiles.contains(&(c + v + h));
                        (!vertical && !horizontal) || (vertical && horizontal && !diagonal)
                    })
                    .count()
            })
            .sum()
    }
}

/// Split every marker tile into regions of equal, orthogonally connected markers.
///
/// Regions come out in row-major order of their first tile.
pub fn marker_regions(grid: &Grid) -> Vec<Region> {
    let moves = SameMarker::new(grid);
    let mut assigned: HashSet<Coord> = HashSet::with_capacity(grid.markers().len());
    let mut regions = Vec::new();

    for (&c, &marker) in grid.markers() {
        if assigned.contains(&c) {
            continue;
        }
        let tiles: HashSet<Coord> = distance_map(&moves, c).into_keys().collect();
        assigned.extend(tiles.iter().copied());
        regions.push(Region { marker, tiles });
    }

    debug!("{} regions over {} tiles", regions.len(), assigned.len());
    regions
}
