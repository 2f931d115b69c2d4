//! Advent of Code solver framework
//!
//! A trait-based framework for writing puzzle solvers and running them through
//! a `(year, day)` registry.
//!
//! # Overview
//!
//! - [`PuzzleParser`] / [`Solver`]: per-puzzle parsing and part dispatch, with
//!   shared data passed mutably between parts so later parts can reuse earlier
//!   work.
//! - [`SolverInstance`] / [`DynSolver`]: a parsed, ready-to-run solver with
//!   parse and solve timing, behind a type-erased interface.
//! - [`RegistryBuilder`] / [`SolverRegistry`]: duplicate-checked registration
//!   and O(1) lookup over the supported year/day range.
//! - [`SolverPlugin`]: automatic registration through `inventory`, usually via
//!   the [`AutoRegisterSolver`] derive.
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver,
//!     RegisterableSolver};
//!
//! struct Day1;
//!
//! impl PuzzleParser for Day1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = Day1
//!     .register_with(RegistryBuilder::new(), 2015, 1)
//!     .unwrap()
//!     .build();
//! let mut solver = registry.create_solver(2015, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use advent_solver_macros::AutoRegisterSolver;
