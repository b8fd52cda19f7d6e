//! Sparse rectangular grids parsed from puzzle text
//!
//! A [`Grid`] stores only what is not empty: obstacle coordinates, the start and
//! end landmarks, and single-character markers (antenna frequencies, trail
//! heights, ...). Bounds are fixed when the grid is built.
//!
//! ```rust
//! use aoc24_solutions::utils::grid::{Coord, Grid, Terrain};
//!
//! let grid = Grid::parse("#####\n#S.E#\n#####").unwrap();
//! assert_eq!(grid.start(), Some(Coord::new(1, 1)));
//! assert_eq!(grid.end(), Some(Coord::new(1, 3)));
//! assert!(grid.is_blocked(Coord::new(0, 2)));
//! assert!(!grid.in_bounds(Coord::new(3, 0)));
//! ```

mod coord;
mod error;

pub use coord::{Coord, Direction};
pub use error::{GridError, MissingLandmark};

use std::collections::{BTreeMap, HashSet};

/// Classification of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Obstacle,
    Empty,
    Start,
    End,
    Marker(char),
}

/// The alphabet a grid is parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legend {
    pub obstacle: Option<char>,
    pub empty: char,
    pub start: &'static [char],
    pub end: Option<char>,
    /// Keep unknown characters as [`Cell::Marker`] instead of rejecting them
    pub markers: bool,
}

impl Legend {
    /// Walls, open floor, `S`/`^` start and `E` end
    pub const MAZE: Legend = Legend {
        obstacle: Some('#'),
        empty: '.',
        start: &['S', '^'],
        end: Some('E'),
        markers: false,
    };

    /// Lab map: walls, open floor and a guard drawn as the arrow it faces
    pub const GUARD: Legend = Legend {
        obstacle: Some('#'),
        empty: '.',
        start: &['^', '>', 'v', '<'],
        end: None,
        markers: false,
    };

    /// `.` is empty, every other character is a marker
    pub const MARKERS: Legend = Legend {
        obstacle: None,
        empty: '.',
        start: &[],
        end: None,
        markers: true,
    };

    fn classify(&self, c: char) -> Option<Cell> {
        if c == self.empty {
            Some(Cell::Empty)
        } else if self.obstacle == Some(c) {
            Some(Cell::Obstacle)
        } else if self.start.contains(&c) {
            Some(Cell::Start)
        } else if self.end == Some(c) {
            Some(Cell::End)
        } else if self.markers {
            Some(Cell::Marker(c))
        } else {
            None
        }
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend::MAZE
    }
}

/// Read-only view of which coordinates exist and which are blocked.
///
/// Implemented by [`Grid`] and by [`WithObstacle`], so a search can run on a
/// grid perturbed by one extra obstacle without copying the base grid.
pub trait Terrain {
    fn in_bounds(&self, c: Coord) -> bool;

    fn is_blocked(&self, c: Coord) -> bool;

    /// In bounds and not blocked
    fn is_open(&self, c: Coord) -> bool {
        self.in_bounds(c) && !self.is_blocked(c)
    }
}

/// A terrain with one additional obstacle
#[derive(Debug, Clone, Copy)]
pub struct WithObstacle<'t, T: ?Sized> {
    base: &'t T,
    extra: Coord,
}

impl<'t, T: Terrain + ?Sized> WithObstacle<'t, T> {
    pub fn new(base: &'t T, extra: Coord) -> Self {
        Self { base, extra }
    }
}

impl<T: Terrain + ?Sized> Terrain for WithObstacle<'_, T> {
    fn in_bounds(&self, c: Coord) -> bool {
        self.base.in_bounds(c)
    }

    fn is_blocked(&self, c: Coord) -> bool {
        c == self.extra || self.base.is_blocked(c)
    }
}

/// Sparse rectangular grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    obstacles: HashSet<Coord>,
    start: Option<Coord>,
    /// Character the start tile was drawn with, if parsed from text
    start_glyph: Option<char>,
    end: Option<Coord>,
    markers: BTreeMap<Coord, char>,
}

/// Row or column index as a coordinate component
fn axis(index: usize) -> Result<i32, GridError> {
    i32::try_from(index).map_err(|_| GridError::TooLarge(index))
}

impl Grid {
    /// Parse with [`Legend::MAZE`]
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        Grid::parse_with(text, &Legend::MAZE)
    }

    /// Parse a character matrix.
    ///
    /// Trailing whitespace on every line and trailing blank lines are ignored;
    /// every remaining line must have the same number of characters.
    pub fn parse_with(text: &str, legend: &Legend) -> Result<Grid, GridError> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let len = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |last| last + 1);
        let lines = &lines[..len];

        let expected = match lines.first() {
            Some(first) => first.chars().count(),
            None => return Err(GridError::Empty),
        };

        let mut grid = Grid {
            rows: axis(lines.len())?,
            cols: axis(expected)?,
            obstacles: HashSet::new(),
            start: None,
            start_glyph: None,
            end: None,
            markers: BTreeMap::new(),
        };

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }

            let r = axis(row)?;
            for (col, cell) in line.chars().enumerate() {
                let coord = Coord::new(r, axis(col)?);
                match legend.classify(cell) {
                    Some(Cell::Empty) => {}
                    Some(Cell::Obstacle) => {
                        grid.obstacles.insert(coord);
                    }
                    Some(Cell::Start) => {
                        if let Some(first) = grid.start.replace(coord) {
                            return Err(GridError::DuplicateStart {
                                first,
                                second: coord,
                            });
                        }
                        grid.start_glyph = Some(cell);
                    }
                    Some(Cell::End) => {
                        if let Some(first) = grid.end.replace(coord) {
                            return Err(GridError::DuplicateEnd {
                                first,
                                second: coord,
                            });
                        }
                    }
                    Some(Cell::Marker(c)) => {
                        grid.markers.insert(coord, c);
                    }
                    None => return Err(GridError::UnexpectedCell { row, col, cell }),
                }
            }
        }

        Ok(grid)
    }

    /// Build a grid from explicit obstacle coordinates
    pub fn from_obstacles<I>(rows: i32, cols: i32, obstacles: I) -> Result<Grid, GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::Empty);
        }
        let mut grid = Grid {
            rows,
            cols,
            obstacles: HashSet::new(),
            start: None,
            start_glyph: None,
            end: None,
            markers: BTreeMap::new(),
        };
        for c in obstacles {
            if !grid.in_bounds(c) {
                return Err(GridError::OutOfBounds(c));
            }
            grid.obstacles.insert(c);
        }
        Ok(grid)
    }

    pub fn with_start(mut self, start: Coord) -> Result<Grid, GridError> {
        self.place_landmark(start)?;
        self.start = Some(start);
        self.start_glyph = None;
        Ok(self)
    }

    pub fn with_end(mut self, end: Coord) -> Result<Grid, GridError> {
        self.place_landmark(end)?;
        self.end = Some(end);
        Ok(self)
    }

    fn place_landmark(&mut self, c: Coord) -> Result<(), GridError> {
        if !self.in_bounds(c) {
            return Err(GridError::OutOfBounds(c));
        }
        self.obstacles.remove(&c);
        Ok(())
    }

    /// View of this grid with `extra` blocked as well
    pub fn with_obstacle(&self, extra: Coord) -> WithObstacle<'_, Grid> {
        WithObstacle::new(self, extra)
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Largest valid row index
    pub fn max_row(&self) -> i32 {
        self.rows - 1
    }

    /// Largest valid column index
    pub fn max_col(&self) -> i32 {
        self.cols - 1
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// How the start tile was drawn; `None` for programmatic starts
    pub fn start_glyph(&self) -> Option<char> {
        self.start_glyph
    }

    pub fn require_start(&self) -> Result<Coord, MissingLandmark> {
        self.start.ok_or(MissingLandmark::Start)
    }

    pub fn require_end(&self) -> Result<Coord, MissingLandmark> {
        self.end.ok_or(MissingLandmark::End)
    }

    /// `None` outside the bounds
    pub fn cell(&self, c: Coord) -> Option<Cell> {
        if !self.in_bounds(c) {
            None
        } else if self.obstacles.contains(&c) {
            Some(Cell::Obstacle)
        } else if self.start == Some(c) {
            Some(Cell::Start)
        } else if self.end == Some(c) {
            Some(Cell::End)
        } else if let Some(&m) = self.markers.get(&c) {
            Some(Cell::Marker(m))
        } else {
            Some(Cell::Empty)
        }
    }

    pub fn is_obstacle(&self, c: Coord) -> bool {
        self.obstacles.contains(&c)
    }

    pub fn obstacles(&self) -> &HashSet<Coord> {
        &self.obstacles
    }

    /// Marker characters keyed by position, in row-major order
    pub fn markers(&self) -> &BTreeMap<Coord, char> {
        &self.markers
    }

    /// Positions of every marker, grouped by marker character
    pub fn markers_by_value(&self) -> BTreeMap<char, Vec<Coord>> {
        let mut groups: BTreeMap<char, Vec<Coord>> = BTreeMap::new();
        for (&c, &m) in &self.markers {
            groups.entry(m).or_default().push(c);
        }
        groups
    }

    /// Every in-bounds coordinate, row-major
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// Every in-bounds coordinate that is not an obstacle, row-major
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|c| !self.obstacles.contains(c))
    }
}

impl Terrain for Grid {
    fn in_bounds(&self, c: Coord) -> bool {
        (0..self.rows).contains(&c.row) && (0..self.cols).contains(&c.col)
    }

    fn is_blocked(&self, c: Coord) -> bool {
        self.is_obstacle(c)
    }
}
