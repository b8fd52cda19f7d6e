//! Reorders solver results that arrive out of order from the worker pool
//!
//! Results are released in `(year, day, part)` order. Anything that arrives
//! ahead of its turn waits in a buffer keyed by its position.

use crate::executor::SolverResult;
use std::collections::{BTreeMap, VecDeque};

/// Position of a result in the output stream, ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Buffers results until every result before them has been released
pub struct ResultAggregator {
    /// Keys still owed to the output, smallest first
    expected: VecDeque<ResultKey>,
    /// Results received ahead of their turn
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(mut expected_keys: Vec<ResultKey>) -> Self {
        expected_keys.sort_unstable();
        expected_keys.dedup();
        Self {
            expected: expected_keys.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Accept a result and hand back every result that is now in sequence
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front()
            && let Some(result) = self.pending.remove(next)
        {
            self.expected.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Release whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let pending = std::mem::take(&mut self.pending);
        self.expected.retain(|key| !pending.contains_key(key));
        pending.into_values().collect()
    }

    /// Every expected result has been released
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(day: u8, part: u8) -> ResultKey {
        ResultKey {
            year: 2024,
            day,
            part,
        }
    }

    fn make_result(day: u8, part: u8) -> SolverResult {
        SolverResult {
            year: 2024,
            day,
            part,
            tags: &[],
            answer: Ok(format!("{}-{}", day, part)),
            solve_duration: TimeDelta::milliseconds(3),
            parse_duration: Some(TimeDelta::milliseconds(1)),
        }
    }

    fn order(results: &[SolverResult]) -> Vec<(u8, u8)> {
        results.iter().map(|r| (r.day, r.part)).collect()
    }

    #[test]
    fn test_in_order_results_pass_straight_through() {
        let mut agg = ResultAggregator::new(vec![key(6, 1), key(6, 2)]);

        assert_eq!(order(&agg.add(make_result(6, 1))), [(6, 1)]);
        assert!(!agg.is_complete());
        assert_eq!(order(&agg.add(make_result(6, 2))), [(6, 2)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results_wait_for_their_turn() {
        // Expected keys may be given unsorted
        let mut agg = ResultAggregator::new(vec![key(16, 1), key(6, 2), key(6, 1)]);

        assert!(agg.add(make_result(16, 1)).is_empty());
        assert!(agg.add(make_result(6, 2)).is_empty());

        let ready = agg.add(make_result(6, 1));
        assert_eq!(order(&ready), [(6, 1), (6, 2), (16, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_releases_stragglers_in_order() {
        let mut agg = ResultAggregator::new(vec![key(8, 1), key(10, 2), key(10, 1)]);

        assert!(agg.add(make_result(10, 2)).is_empty());
        assert!(agg.add(make_result(10, 1)).is_empty());

        let remaining = agg.drain();
        assert_eq!(order(&remaining), [(10, 1), (10, 2)]);
        // Day 8 never arrived
        assert!(!agg.is_complete());
        assert!(agg.drain().is_empty());
    }

    proptest! {
        #[test]
        fn prop_any_arrival_order_is_released_sorted(
            arrival in Just((1u8..=25).flat_map(|d| [(d, 1u8), (d, 2u8)]).collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let keys = arrival.iter().map(|&(d, p)| key(d, p)).collect();
            let mut agg = ResultAggregator::new(keys);

            let mut released = Vec::new();
            for &(day, part) in &arrival {
                released.extend(order(&agg.add(make_result(day, part))));
            }

            let mut sorted = arrival.clone();
            sorted.sort_unstable();
            prop_assert_eq!(released, sorted);
            prop_assert!(agg.is_complete());
        }
    }
}
