//! Reordering of parallel solver results for streaming output
//!
//! Work items finish in whatever order the thread pool schedules them; the
//! aggregator holds results back until everything before them (by year, day,
//! part) has been printed.

use crate::executor::SolverResult;
use std::collections::{HashMap, VecDeque};

/// Output ordering key
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Clone, Copy)]
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

/// Buffers out-of-order results and releases them in expected order.
///
/// The expected keys are known up front (from the work items), sorted, and
/// consumed from the front as matching results arrive.
pub struct ResultAggregator {
    expected: VecDeque<ResultKey>,
    pending: HashMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    /// Create an aggregator over the keys the run will produce
    pub fn new(mut expected_keys: Vec<ResultKey>) -> Self {
        expected_keys.sort_unstable();
        Self {
            expected: expected_keys.into(),
            pending: HashMap::new(),
        }
    }

    /// Accept a result; return every result now ready to print, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front() {
            match self.pending.remove(next) {
                Some(result) => {
                    self.expected.pop_front();
                    ready.push(result);
                }
                None => break,
            }
        }
        ready
    }

    /// Drain whatever is still buffered, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|(_, r)| r).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    /// Whether every expected result has been released
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn make_result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(format!("{}_{}_{}", year, day, part)),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: TimeDelta::milliseconds(10),
            submitted_at: None,
            submission: None,
            submission_wait: None,
        }
    }

    #[test]
    fn test_in_order_results_pass_through() {
        let mut agg = ResultAggregator::new(vec![key(2015, 1, 1), key(2015, 1, 2)]);

        let ready = agg.add(make_result(2015, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(2015, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results_are_buffered() {
        let mut agg =
            ResultAggregator::new(vec![key(2015, 1, 1), key(2015, 1, 2), key(2015, 2, 1)]);

        assert!(agg.add(make_result(2015, 1, 2)).is_empty());
        assert!(agg.add(make_result(2015, 2, 1)).is_empty());

        // The missing head releases everything at once
        let ready = agg.add(make_result(2015, 1, 1));
        assert_eq!(ready.len(), 3);
        assert_eq!((ready[0].day, ready[0].part), (1, 1));
        assert_eq!((ready[1].day, ready[1].part), (1, 2));
        assert_eq!((ready[2].day, ready[2].part), (2, 1));
        assert!(agg.is_complete());
    }

    #[test]
    fn test_unsorted_expected_keys_are_ordered() {
        let mut agg = ResultAggregator::new(vec![key(2015, 2, 1), key(2015, 1, 1)]);
        let ready = agg.add(make_result(2015, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].day, 1);
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new(vec![key(2015, 1, 1), key(2015, 1, 2)]);

        agg.add(make_result(2015, 1, 2));
        assert!(!agg.is_complete());

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
    }

    #[test]
    fn test_drain_sorts_buffered_results() {
        let mut agg =
            ResultAggregator::new(vec![key(2015, 1, 1), key(2015, 1, 2), key(2015, 2, 1)]);

        agg.add(make_result(2015, 2, 1));
        agg.add(make_result(2015, 1, 2));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 2);
        assert_eq!((remaining[0].day, remaining[0].part), (1, 2));
        assert_eq!((remaining[1].day, remaining[1].part), (2, 1));
    }
}
