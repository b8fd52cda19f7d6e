//! Search states and the move rules that connect them

use std::fmt::Debug;
use std::hash::Hash;

use crate::utils::grid::{Coord, Direction, Grid, Terrain};

/// A graph given implicitly by a successor function.
///
/// `neighbors` appends successors of `state` to `buf`; the caller clears `buf`
/// between calls so one allocation serves a whole search. Successors must
/// already be filtered against bounds and obstacles.
pub trait StateSpace {
    type State: Copy + Eq + Hash + Ord + Debug;

    fn neighbors(&self, state: Self::State, buf: &mut Vec<Self::State>);
}

/// A state space with a non-negative cost on every edge
pub trait WeightedStateSpace: StateSpace {
    fn cost(&self, from: Self::State, to: Self::State) -> u64;
}

/// States that occupy a tile
pub trait Positioned {
    fn pos(&self) -> Coord;
}

impl Positioned for Coord {
    fn pos(&self) -> Coord {
        *self
    }
}

/// A position together with a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Facing {
    pub pos: Coord,
    pub dir: Direction,
}

impl Facing {
    pub const fn new(pos: Coord, dir: Direction) -> Self {
        Self { pos, dir }
    }

    /// The tile directly in front
    pub fn ahead(self) -> Coord {
        self.pos + self.dir
    }

    pub fn forward(self) -> Facing {
        Facing::new(self.ahead(), self.dir)
    }

    pub fn turned_left(self) -> Facing {
        Facing::new(self.pos, self.dir.turn_left())
    }

    pub fn turned_right(self) -> Facing {
        Facing::new(self.pos, self.dir.turn_right())
    }
}

impl Positioned for Facing {
    fn pos(&self) -> Coord {
        self.pos
    }
}

/// Unit-cost moves to the four orthogonal neighbours
#[derive(Debug, Clone, Copy)]
pub struct CardinalMoves<'t, T: ?Sized> {
    terrain: &'t T,
}

impl<'t, T: Terrain + ?Sized> CardinalMoves<'t, T> {
    pub fn new(terrain: &'t T) -> Self {
        Self { terrain }
    }
}

impl<T: Terrain + ?Sized> StateSpace for CardinalMoves<'_, T> {
    type State = Coord;

    fn neighbors(&self, state: Coord, buf: &mut Vec<Coord>) {
        buf.extend(state.neighbors().filter(|&n| self.terrain.is_open(n)));
    }
}

impl<T: Terrain + ?Sized> WeightedStateSpace for CardinalMoves<'_, T> {
    fn cost(&self, _from: Coord, _to: Coord) -> u64 {
        1
    }
}

/// Unit moves between orthogonal neighbours that carry the same marker
#[derive(Debug, Clone, Copy)]
pub struct SameMarker<'g> {
    grid: &'g Grid,
}

impl<'g> SameMarker<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }
}

impl StateSpace for SameMarker<'_> {
    type State = Coord;

    fn neighbors(&self, state: Coord, buf: &mut Vec<Coord>) {
        let markers = self.grid.markers();
        let Some(marker) = markers.get(&state) else {
            return;
        };
        buf.extend(
            state
                .neighbors()
                .filter(|n| markers.get(n) == Some(marker)),
        );
    }
}

/// Reindeer rules: step forward onto an open tile for 1, or rotate 90° in
/// place for the turn cost
#[derive(Debug, Clone, Copy)]
pub struct TurningMoves<'t, T: ?Sized> {
    terrain: &'t T,
    turn_cost: u64,
}

impl<'t, T: Terrain + ?Sized> TurningMoves<'t, T> {
    pub const DEFAULT_TURN_COST: u64 = 1000;

    pub fn new(terrain: &'t T) -> Self {
        Self {
            terrain,
            turn_cost: Self::DEFAULT_TURN_COST,
        }
    }

    pub fn turn_cost(mut self, cost: u64) -> Self {
        self.turn_cost = cost;
        self
    }
}

impl<T: Terrain + ?Sized> StateSpace for TurningMoves<'_, T> {
    type State = Facing;

    fn neighbors(&self, state: Facing, buf: &mut Vec<Facing>) {
        if self.terrain.is_open(state.ahead()) {
            buf.push(state.forward());
        }
        buf.push(state.turned_left());
        buf.push(state.turned_right());
    }
}

impl<T: Terrain + ?Sized> WeightedStateSpace for TurningMoves<'_, T> {
    fn cost(&self, from: Facing, to: Facing) -> u64 {
        if from.dir == to.dir {
            1
        } else {
            self.turn_cost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid::Legend;

    #[test]
    fn test_cardinal_moves_filter_walls_and_edges() {
        let grid = Grid::parse("S.#\n...").unwrap();
        let moves = CardinalMoves::new(&grid);
        let mut buf = Vec::new();

        moves.neighbors(Coord::new(0, 0), &mut buf);
        buf.sort();
        assert_eq!(buf, vec![Coord::new(0, 1), Coord::new(1, 0)]);

        buf.clear();
        moves.neighbors(Coord::new(0, 1), &mut buf);
        buf.sort();
        assert_eq!(buf, vec![Coord::new(0, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn test_same_marker_stays_on_its_plant() {
        let grid = Grid::parse_with("aab\nb.a", &Legend::MARKERS).unwrap();
        let moves = SameMarker::new(&grid);
        let mut buf = Vec::new();

        moves.neighbors(Coord::new(0, 1), &mut buf);
        assert_eq!(buf, vec![Coord::new(0, 0)]);

        buf.clear();
        moves.neighbors(Coord::new(0, 2), &mut buf);
        assert!(buf.is_empty());

        // Empty tiles belong to no plant
        moves.neighbors(Coord::new(1, 1), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_turning_moves_costs() {
        let grid = Grid::parse("S.\n#.").unwrap();
        let moves = TurningMoves::new(&grid).turn_cost(7);
        let east = Facing::new(Coord::new(0, 0), Direction::Right);

        let mut buf = Vec::new();
        moves.neighbors(east, &mut buf);
        assert_eq!(
            buf,
            vec![
                Facing::new(Coord::new(0, 1), Direction::Right),
                Facing::new(Coord::new(0, 0), Direction::Up),
                Facing::new(Coord::new(0, 0), Direction::Down),
            ]
        );
        assert_eq!(moves.cost(east, buf[0]), 1);
        assert_eq!(moves.cost(east, buf[1]), 7);

        // Facing the wall: only the two turns remain
        buf.clear();
        moves.neighbors(Facing::new(Coord::new(0, 0), Direction::Down), &mut buf);
        assert_eq!(buf.len(), 2);
        assert!(buf.iter().all(|f| f.pos == Coord::new(0, 0)));
    }
}
