//! Day 4: The Ideal Stocking Stuffer
//!
//! Find the lowest number that, appended to the secret key, produces an MD5
//! hash starting with five (part 1) or six (part 2) hex zeroes.

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use advent_solver_macros::AutoRegisterSolver;
use md5::{Digest, Md5};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 4, tags = ["2015", "slow"])]
pub struct Day4;

impl PuzzleParser for Day4 {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ParseError::MissingData("empty secret key".into()));
        }
        Ok(key)
    }
}

impl Solver for Day4 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let zero_digits = match part {
            1 => 5,
            2 => 6,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(mine(shared, zero_digits).to_string())
    }
}

/// Smallest suffix whose MD5 hash starts with `zero_digits` hex zeroes
fn mine(key: &str, zero_digits: usize) -> u64 {
    (0u64..)
        .find(|i| {
            let mut hasher = Md5::new();
            hasher.update(key.as_bytes());
            hasher.update(i.to_string().as_bytes());
            has_leading_zero_digits(&hasher.finalize(), zero_digits)
        })
        .unwrap_or(u64::MAX)
}

/// Check the first `count` hex digits of a digest for zeroes
fn has_leading_zero_digits(digest: &[u8], count: usize) -> bool {
    let full_bytes = count / 2;
    if digest[..full_bytes].iter().any(|&b| b != 0) {
        return false;
    }
    count % 2 == 0 || digest[full_bytes] >> 4 == 0
}
