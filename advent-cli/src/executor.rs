//! Solver execution with optional day-level parallelism

use crate::cache::InputCache;
use crate::cli::ParallelMode;
use crate::config::Config;
use crate::error::ExecutorError;
use advent_http_client::AdventClient;
use advent_solver::{ParseError, SolverRegistry};
use chrono::{DateTime, Local, TimeDelta, Utc};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::time::Duration;
use zeroize::Zeroizing;

/// Submission outcome for one answer
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    Correct,
    Incorrect,
    AlreadyCompleted,
    Throttled { wait_time: Option<Duration> },
    Error(String),
}

/// Result of solving (and optionally submitting) one puzzle part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, advent_solver::SolverError>,
    /// Parse timing, attached to the first part of each day only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
    pub submitted_at: Option<DateTime<Local>>,
    pub submission: Option<SubmissionOutcome>,
    pub submission_wait: Option<Duration>,
}

/// One registered solver and the parts to run for it
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs work items over a sized thread pool and streams results to a channel
pub struct Executor {
    state: ExecutorState,
    thread_pool: rayon::ThreadPool,
}

struct ExecutorState {
    registry: SolverRegistry,
    cache_dir: PathBuf,
    user_id: u64,
    client: Option<AdventClient>,
    session: Zeroizing<String>,
    submit: bool,
    auto_retry: bool,
    parallel: ParallelMode,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl ExecutorState {
    fn cache(&self) -> InputCache {
        InputCache::new(self.cache_dir.clone(), self.user_id)
    }
}

impl Executor {
    /// Create an executor from a registry and resolved config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let client = if config.submit || !config.session.is_empty() {
            Some(new_client()?)
        } else {
            None
        };

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            state: ExecutorState {
                registry,
                cache_dir: config.cache_dir.clone(),
                user_id: config.user_id,
                client,
                session: config.session.clone(),
                submit: config.submit,
                auto_retry: config.auto_retry,
                parallel: config.parallel,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Install a session resolved after construction (input-fetch prompt)
    pub fn update_session(
        &mut self,
        session: Zeroizing<String>,
        user_id: u64,
    ) -> Result<(), ExecutorError> {
        self.state.session = session;
        self.state.user_id = user_id;
        if self.state.client.is_none() {
            self.state.client = Some(new_client()?);
        }
        Ok(())
    }

    /// Derive work items from registry metadata and the configured filters
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let state = &self.state;
        state
            .registry
            .iter_info()
            .filter(|info| state.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| state.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(state.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Whether an input is already cached for this year/day
    pub fn input_cached(&self, year: u16, day: u8) -> bool {
        self.state.cache().contains(year, day)
    }

    /// Execute all work items, streaming results through `tx`
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ExecutorError> {
        let work_items = self.collect_work_items();
        let state = &self.state;

        let errors: Vec<ExecutorError> = match state.parallel {
            ParallelMode::Sequential => work_items
                .into_iter()
                .filter_map(|work| run_work_item(&work, &tx, state).err())
                .collect(),
            ParallelMode::Day => self.thread_pool.install(|| {
                work_items
                    .into_par_iter()
                    .filter_map(|work| run_work_item(&work, &tx, state).err())
                    .collect()
            }),
        };

        ExecutorError::from_collected(errors).map_or(Ok(()), Err)
    }
}

fn new_client() -> Result<AdventClient, ExecutorError> {
    AdventClient::new().map_err(|e| ExecutorError::InputFetch {
        year: 0,
        day: 0,
        source: Box::new(e),
    })
}

/// Intersect the part filter with the solver's declared part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0, // Empty range - intentional
        None => 1..=max_parts,
    }
}

/// Run one work item: load input, parse once, solve each part in order
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    state: &ExecutorState,
) -> Result<(), ExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match load_input(work, state) {
        Ok(input) => input,
        Err(e) => {
            // A missing input fails this day, not the whole run
            return send_error_results(work, tx, &e.to_string());
        }
    };

    let mut solver = match state.registry.create_solver(year, day, &input) {
        Ok(solver) => solver,
        Err(e) => return send_error_results(work, tx, &e.to_string()),
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let solve_start = Utc::now();
        let (answer, solve_duration) = match solver.solve(part) {
            Ok(result) => {
                let duration = result.duration();
                (Ok(result.answer), duration)
            }
            Err(e) => (Err(e.into()), Utc::now() - solve_start),
        };

        let mut result = SolverResult {
            year,
            day,
            part,
            answer,
            parse_duration: parse_duration.take(),
            solve_duration,
            submitted_at: None,
            submission: None,
            submission_wait: None,
        };

        if state.submit {
            submit_result(&mut result, state);
        }
        tx.send(result).map_err(|_| ExecutorError::ChannelSend)?;
    }
    Ok(())
}

/// Emit an error result for every part of a work item
fn send_error_results(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    message: &str,
) -> Result<(), ExecutorError> {
    for part in work.parts.clone() {
        let result = SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(ParseError::Other(message.to_string()).into()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
            submitted_at: None,
            submission: None,
            submission_wait: None,
        };
        tx.send(result).map_err(|_| ExecutorError::ChannelSend)?;
    }
    Ok(())
}

/// Load an input from the cache, fetching and caching it on a miss
fn load_input(work: &WorkItem, state: &ExecutorState) -> Result<String, ExecutorError> {
    let (year, day) = (work.year, work.day);
    let cache = state.cache();

    let fetch_err = |source: Box<dyn std::error::Error + Send + Sync>| ExecutorError::InputFetch {
        year,
        day,
        source,
    };

    if let Some(input) = cache.get(year, day).map_err(|e| fetch_err(Box::new(e)))? {
        return Ok(input);
    }

    let client = state
        .client
        .as_ref()
        .ok_or_else(|| fetch_err(Box::new(std::io::Error::other("no session available"))))?;
    let input = client
        .get_input(year, day, &state.session)
        .map_err(|e| fetch_err(Box::new(e)))?;

    // A failed cache write is a warning; the run still has the input
    if let Err(e) = cache.put(year, day, &input) {
        eprintln!(
            "Warning: {}",
            ExecutorError::CacheWrite {
                year,
                day,
                message: e.to_string(),
            }
        );
    }

    Ok(input)
}

/// Submit a successful answer and record the outcome on the result
fn submit_result(result: &mut SolverResult, state: &ExecutorState) {
    if let Ok(ref answer) = result.answer {
        let (outcome, wait) = submit_with_retry(
            result.year,
            result.day,
            result.part,
            answer,
            state.client.as_ref(),
            &state.session,
            state.auto_retry,
        );
        result.submitted_at = Some(Local::now());
        result.submission = Some(outcome);
        result.submission_wait = wait;
    }
}

/// Submit an answer, optionally sleeping and retrying while throttled
fn submit_with_retry(
    year: u16,
    day: u8,
    part: u8,
    answer: &str,
    client: Option<&AdventClient>,
    session: &str,
    auto_retry: bool,
) -> (SubmissionOutcome, Option<Duration>) {
    let Some(client) = client else {
        return (SubmissionOutcome::Error("no HTTP client".into()), None);
    };

    let mut total_wait = Duration::ZERO;
    loop {
        use advent_http_client::SubmissionResult;
        let outcome = match client.submit_answer(year, day, part, answer, session) {
            Ok(SubmissionResult::Correct) => SubmissionOutcome::Correct,
            Ok(SubmissionResult::Incorrect) => SubmissionOutcome::Incorrect,
            Ok(SubmissionResult::AlreadyCompleted) => SubmissionOutcome::AlreadyCompleted,
            Ok(SubmissionResult::Throttled { wait_time }) => {
                if auto_retry && let Some(wait) = wait_time {
                    std::thread::sleep(wait);
                    total_wait += wait;
                    continue;
                }
                SubmissionOutcome::Throttled { wait_time }
            }
            Err(e) => SubmissionOutcome::Error(e.to_string()),
        };
        return (outcome, Some(total_wait));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::{
        ParseError, PuzzleParser, RegisterableSolver, RegistryBuilder, SolveError, Solver,
    };
    use tempfile::TempDir;

    struct Echo;

    impl PuzzleParser for Echo {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<&str, ParseError> {
            Ok(input.trim())
        }
    }

    impl Solver for Echo {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut &str, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.to_string()),
                2 => Ok(shared.len().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn echo_state(cache_dir: &std::path::Path) -> ExecutorState {
        let registry = Echo
            .register_with(RegistryBuilder::new(), 2015, 1)
            .unwrap()
            .build();
        ExecutorState {
            registry,
            cache_dir: cache_dir.to_path_buf(),
            user_id: 42,
            client: None,
            session: Zeroizing::new(String::new()),
            submit: false,
            auto_retry: false,
            parallel: ParallelMode::Sequential,
            year_filter: None,
            day_filter: None,
            part_filter: None,
        }
    }

    #[test]
    fn test_filter_parts() {
        assert_eq!(filter_parts(None, 2), 1..=2);
        assert_eq!(filter_parts(None, 1), 1..=1);
        assert_eq!(filter_parts(Some(2), 2), 2..=2);
        assert!(filter_parts(Some(2), 1).is_empty());
    }

    #[test]
    fn test_run_work_item_streams_results_with_timing() {
        let temp = TempDir::new().unwrap();
        let state = echo_state(temp.path());
        state.cache().put(2015, 1, "hello").unwrap();

        let work = WorkItem {
            year: 2015,
            day: 1,
            parts: 1..=2,
        };
        let (tx, rx) = std::sync::mpsc::channel();
        run_work_item(&work, &tx, &state).unwrap();
        drop(tx);

        let results: Vec<_> = rx.iter().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].answer.as_deref().unwrap(), "hello");
        assert_eq!(results[1].answer.as_deref().unwrap(), "5");
        assert!(results[0].solve_duration >= TimeDelta::zero());
        // Parse timing belongs to the day, so only the first part carries it
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_yields_per_part_error_results() {
        let temp = TempDir::new().unwrap();
        let state = echo_state(temp.path());

        let work = WorkItem {
            year: 2015,
            day: 1,
            parts: 1..=2,
        };
        let (tx, rx) = std::sync::mpsc::channel();
        run_work_item(&work, &tx, &state).unwrap();
        drop(tx);

        let results: Vec<_> = rx.iter().collect();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.answer.is_err()));
    }
}
