//! Advent of Code 2015 puzzle solutions
//!
//! Each day lives in its own module under [`year_2015`] and registers itself
//! with the solver framework through the `AutoRegisterSolver` derive. The
//! [`circuit`] module holds the logic-gate evaluator behind day 7.

pub mod circuit;
pub mod year_2015;
