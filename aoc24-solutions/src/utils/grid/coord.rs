//! Lattice coordinates and the four cardinal directions

use std::fmt;
use std::ops::{Add, Sub};

/// A (row, column) position on the lattice, also used as an offset between positions.
///
/// Rows grow downwards and columns to the right, matching how puzzle text is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Sum of absolute row and column differences
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The four orthogonal neighbours, in [`Direction::ALL`] order
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().map(move |dir| self + dir)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, rhs: Direction) -> Coord {
        self + rhs.delta()
    }
}

impl Sub<Direction> for Coord {
    type Output = Coord;

    fn sub(self, rhs: Direction) -> Coord {
        self - rhs.delta()
    }
}

/// Cardinal direction; declaration order is clockwise starting at `Up`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const fn delta(self) -> Coord {
        match self {
            Direction::Up => Coord::new(-1, 0),
            Direction::Right => Coord::new(0, 1),
            Direction::Down => Coord::new(1, 0),
            Direction::Left => Coord::new(0, -1),
        }
    }

    /// 90° clockwise
    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// 90° counter-clockwise
    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Heading drawn by a walker glyph (`^`, `>`, `v`, `<`)
    pub fn from_arrow(c: char) -> Option<Direction> {
        match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_are_inverse() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_right().turn_left(), dir);
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(dir.turn_right().turn_right(), dir.turn_left().turn_left());
        }
    }

    #[test]
    fn test_turn_right_cycles_clockwise() {
        let mut dir = Direction::Up;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(dir);
            dir = dir.turn_right();
        }
        assert_eq!(seen, Direction::ALL);
        assert_eq!(dir, Direction::Up);
    }

    #[test]
    fn test_direction_arithmetic() {
        let c = Coord::new(3, 4);
        assert_eq!(c + Direction::Up, Coord::new(2, 4));
        assert_eq!(c + Direction::Right, Coord::new(3, 5));
        assert_eq!(c - Direction::Down, Coord::new(2, 4));
        assert_eq!((c + Direction::Left) - Direction::Left, c);
        assert_eq!(c.neighbors().count(), 4);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(3, -4)), 7);
        assert_eq!(Coord::new(-2, 5).manhattan(Coord::new(-2, 5)), 0);
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(coords, vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]);
    }

    #[test]
    fn test_arrows() {
        assert_eq!(Direction::from_arrow('^'), Some(Direction::Up));
        assert_eq!(Direction::from_arrow('<'), Some(Direction::Left));
        assert_eq!(Direction::from_arrow('#'), None);
    }
}
