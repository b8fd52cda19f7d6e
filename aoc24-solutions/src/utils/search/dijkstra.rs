use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::debug;

use super::space::WeightedStateSpace;

/// A goal state together with the cost of reaching it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reached<S> {
    pub cost: u64,
    pub state: S,
}

/// Cheapest cost from `start` to the first state satisfying `is_goal`.
///
/// Stops as soon as a goal state is settled. `None` when no goal is reachable.
pub fn shortest_path<W, F>(space: &W, start: W::State, mut is_goal: F) -> Option<Reached<W::State>>
where
    W: WeightedStateSpace,
    F: FnMut(W::State) -> bool,
{
    let mut best: HashMap<W::State, u64> = HashMap::from([(start, 0)]);
    let mut open = BinaryHeap::from([Reverse((0u64, start))]);
    let mut buf = Vec::new();

    while let Some(Reverse((cost, state))) = open.pop() {
        if best.get(&state).is_some_and(|&b| cost > b) {
            continue;
        }
        if is_goal(state) {
            debug!("dijkstra reached {state:?} at cost {cost} ({} states seen)", best.len());
            return Some(Reached { cost, state });
        }

        buf.clear();
        space.neighbors(state, &mut buf);
        for &next in &buf {
            let tentative = cost + space.cost(state, next);
            match best.entry(next) {
                Entry::Occupied(e) if *e.get() <= tentative => {}
                Entry::Occupied(mut e) => {
                    e.insert(tentative);
                    open.push(Reverse((tentative, next)));
                }
                Entry::Vacant(e) => {
                    e.insert(tentative);
                    open.push(Reverse((tentative, next)));
                }
            }
        }
    }

    debug!("dijkstra exhausted {} states without a goal", best.len());
    None
}

/// Every cheapest path out of one start state.
///
/// Built by [`shortest_paths`], which keeps all predecessors that reach a state
/// at its minimum cost, so the set of optimal paths can be walked backwards.
#[derive(Debug, Clone)]
pub struct ShortestPaths<S> {
    start: S,
    cost: HashMap<S, u64>,
    predecessors: HashMap<S, Vec<S>>,
}

impl<S: Copy + Eq + std::hash::Hash> ShortestPaths<S> {
    pub fn start(&self) -> S {
        self.start
    }

    /// Minimum cost of `state`, `None` when unreachable
    pub fn cost(&self, state: S) -> Option<u64> {
        self.cost.get(&state).copied()
    }

    /// States from which `state` is entered on some cheapest path
    pub fn predecessors(&self, state: S) -> &[S] {
        self.predecessors.get(&state).map_or(&[], Vec::as_slice)
    }

    /// Every reachable state
    pub fn visited(&self) -> impl Iterator<Item = S> + '_ {
        self.cost.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.cost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost.is_empty()
    }

    /// Minimum cost among `candidates` and every candidate achieving it.
    ///
    /// Unreachable candidates are ignored; `None` when none is reachable.
    pub fn cheapest<I>(&self, candidates: I) -> Option<(u64, Vec<S>)>
    where
        I: IntoIterator<Item = S>,
    {
        let mut best: Option<(u64, Vec<S>)> = None;
        for state in candidates {
            let Some(cost) = self.cost(state) else {
                continue;
            };
            match &mut best {
                Some((b, ties)) if cost == *b => {
                    if !ties.contains(&state) {
                        ties.push(state);
                    }
                }
                Some((b, _)) if cost > *b => {}
                slot => *slot = Some((cost, vec![state])),
            }
        }
        best
    }

    /// Union of all states lying on any cheapest path from the start to one of
    /// `terminals`. Unreachable terminals contribute nothing.
    pub fn states_on_paths<I>(&self, terminals: I) -> HashSet<S>
    where
        I: IntoIterator<Item = S>,
    {
        let mut seen = HashSet::new();
        let mut pending: Vec<S> = terminals
            .into_iter()
            .filter(|s| self.cost.contains_key(s))
            .collect();
        seen.extend(pending.iter().copied());

        while let Some(state) = pending.pop() {
            for &prev in self.predecessors(state) {
                if seen.insert(prev) {
                    pending.push(prev);
                }
            }
        }
        seen
    }
}

/// Dijkstra from `start` over the whole reachable space, recording every
/// equal-cost predecessor.
pub fn shortest_paths<W>(space: &W, start: W::State) -> ShortestPaths<W::State>
where
    W: WeightedStateSpace,
{
    let mut cost: HashMap<W::State, u64> = HashMap::from([(start, 0)]);
    let mut predecessors: HashMap<W::State, Vec<W::State>> = HashMap::new();
    let mut open = BinaryHeap::from([Reverse((0u64, start))]);
    let mut buf = Vec::new();

    while let Some(Reverse((c, state))) = open.pop() {
        if cost.get(&state).is_some_and(|&best| c > best) {
            continue;
        }

        buf.clear();
        space.neighbors(state, &mut buf);
        for &next in &buf {
            if next == start {
                continue;
            }
            let tentative = c + space.cost(state, next);
            match cost.entry(next) {
                Entry::Occupied(e) if *e.get() < tentative => {}
                Entry::Occupied(e) if *e.get() == tentative => {
                    let preds = predecessors.entry(next).or_default();
                    if !preds.contains(&state) {
                        preds.push(state);
                    }
                }
                Entry::Occupied(mut e) => {
                    e.insert(tentative);
                    predecessors.insert(next, vec![state]);
                    open.push(Reverse((tentative, next)));
                }
                Entry::Vacant(e) => {
                    e.insert(tentative);
                    predecessors.insert(next, vec![state]);
                    open.push(Reverse((tentative, next)));
                }
            }
        }
    }

    debug!("dijkstra settled {} states", cost.len());
    ShortestPaths {
        start,
        cost,
        predecessors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid::{Coord, Direction, Grid};
    use crate::utils::search::space::{CardinalMoves, Facing, Positioned, TurningMoves};

    #[test]
    fn test_shortest_path_early_exit_and_unreachable() {
        let grid = Grid::parse("S.#.\n..#E").unwrap();
        let moves = CardinalMoves::new(&grid);
        let start = grid.start().unwrap();

        let reached = shortest_path(&moves, start, |c| c == Coord::new(1, 1)).unwrap();
        assert_eq!(reached.cost, 2);

        assert_eq!(shortest_path(&moves, start, |c| c == grid.end().unwrap()), None);
        assert_eq!(
            shortest_path(&moves, start, |c| c == start),
            Some(Reached { cost: 0, state: start })
        );
    }

    #[test]
    fn test_turn_penalty_prefers_straight_route() {
        // Straight along the bottom costs 3; the top detour needs turns
        let grid = Grid::parse("#####\n#...#\n#.#.#\n#S..E\n#####").unwrap();
        let moves = TurningMoves::new(&grid);
        let start = Facing::new(grid.start().unwrap(), Direction::Right);
        let end = grid.end().unwrap();

        let reached = shortest_path(&moves, start, |f| f.pos() == end).unwrap();
        assert_eq!(reached.cost, 3);
        assert_eq!(reached.state.dir, Direction::Right);
    }

    #[test]
    fn test_all_predecessors_kept_on_ties() {
        // Two equally short ways around the pillar
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let moves = CardinalMoves::new(&grid);
        let paths = shortest_paths(&moves, Coord::new(0, 0));
        let target = Coord::new(2, 2);

        assert_eq!(paths.cost(target), Some(4));
        let mut preds = paths.predecessors(target).to_vec();
        preds.sort();
        assert_eq!(preds, vec![Coord::new(1, 2), Coord::new(2, 1)]);

        let on_paths = paths.states_on_paths([target]);
        assert_eq!(on_paths.len(), 8);
        assert!(!on_paths.contains(&Coord::new(1, 1)));
        assert!(paths.predecessors(paths.start()).is_empty());
    }

    #[test]
    fn test_cheapest_returns_every_tie() {
        let grid = Grid::parse("...\n...").unwrap();
        let paths = shortest_paths(&CardinalMoves::new(&grid), Coord::new(0, 1));

        let (cost, ties) = paths
            .cheapest([Coord::new(1, 0), Coord::new(1, 2), Coord::new(1, 1), Coord::new(5, 5)])
            .unwrap();
        assert_eq!(cost, 1);
        assert_eq!(ties, vec![Coord::new(1, 1)]);

        let (cost, ties) = paths.cheapest([Coord::new(1, 0), Coord::new(1, 2)]).unwrap();
        assert_eq!(cost, 2);
        assert_eq!(ties.len(), 2);

        assert_eq!(paths.cheapest([Coord::new(9, 9)]), None);
        assert_eq!(paths.len(), 6);
    }
}
