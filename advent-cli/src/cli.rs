//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How solver executions are scheduled
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelMode {
    /// Execute every solver sequentially in (year, day) order
    Sequential,
    /// Parallelize across year/day combinations; parts run in order within a day
    #[default]
    Day,
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Cache directory for puzzle inputs
    #[arg(long, default_value = "~/.cache/advent")]
    pub cache_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Scheduling mode: sequential or day
    #[arg(long, value_enum, default_value = "day")]
    pub parallel: ParallelMode,

    /// Submit answers to Advent of Code
    #[arg(long)]
    pub submit: bool,

    /// User ID for cache organization and session verification
    #[arg(long)]
    pub user_id: Option<u64>,

    /// Sleep and retry when a submission is throttled
    #[arg(long)]
    pub auto_retry: bool,

    /// Quiet mode: only print answers
    #[arg(short, long)]
    pub quiet: bool,
}
