//! Day 1: Not Quite Lisp
//!
//! Santa follows `(` up and `)` down. Part 1 asks for the final floor, part 2
//! for the position of the first instruction that enters the basement.

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use advent_solver_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 1, tags = ["2015"])]
pub struct Day1;

impl PuzzleParser for Day1 {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let trimmed = input.trim();
        if let Some(bad) = trimmed.chars().find(|c| !matches!(c, '(' | ')')) {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected character {:?}",
                bad
            )));
        }
        Ok(trimmed)
    }
}

impl Solver for Day1 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let steps = shared.chars().map(|c| if c == '(' { 1i32 } else { -1 });
        match part {
            1 => Ok(steps.sum::<i32>().to_string()),
            2 => {
                let mut floor = 0i32;
                for (position, step) in steps.enumerate() {
                    floor += step;
                    if floor < 0 {
                        return Ok((position + 1).to_string());
                    }
                }
                Err(SolveError::SolveFailed(
                    anyhow::anyhow!("Santa never enters the basement").into(),
                ))
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
