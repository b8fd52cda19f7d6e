use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use log::debug;

use super::dijkstra::Reached;
use super::space::StateSpace;

/// Unit-step distance from `start` to every reachable state.
///
/// Unreachable states are absent from the map.
pub fn distance_map<S: StateSpace>(space: &S, start: S::State) -> HashMap<S::State, u64> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    let mut buf = Vec::new();

    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        buf.clear();
        space.neighbors(state, &mut buf);
        for &next in &buf {
            if let Entry::Vacant(e) = dist.entry(next) {
                e.insert(d + 1);
                queue.push_back(next);
            }
        }
    }

    debug!("bfs reached {} states", dist.len());
    dist
}

/// Fewest unit steps from `start` to a state satisfying `is_goal`
pub fn distance_to<S, F>(space: &S, start: S::State, mut is_goal: F) -> Option<Reached<S::State>>
where
    S: StateSpace,
    F: FnMut(S::State) -> bool,
{
    let mut dist = HashMap::from([(start, 0u64)]);
    let mut queue = VecDeque::from([start]);
    let mut buf = Vec::new();

    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        if is_goal(state) {
            return Some(Reached { cost: d, state });
        }
        buf.clear();
        space.neighbors(state, &mut buf);
        for &next in &buf {
            if let Entry::Vacant(e) = dist.entry(next) {
                e.insert(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}
