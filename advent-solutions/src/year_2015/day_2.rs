//! Day 2: I Was Told There Would Be No Math
//!
//! Wrapping paper (surface area plus smallest-side slack) and ribbon
//! (smallest perimeter plus bow volume) over `LxWxH` present dimensions.

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use advent_solver_macros::AutoRegisterSolver;
use anyhow::anyhow;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 2, tags = ["2015"])]
pub struct Day2;

impl PuzzleParser for Day2 {
    type SharedData<'a> = Vec<[u32; 3]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|line| -> Result<[u32; 3], anyhow::Error> {
                let mut dims = line.splitn(3, 'x');
                let mut next = || -> Result<u32, anyhow::Error> {
                    dims.next()
                        .ok_or_else(|| anyhow!("expected LxWxH, got {:?}", line))?
                        .parse()
                        .map_err(anyhow::Error::from)
                };
                Ok([next()?, next()?, next()?])
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day2 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let total: u32 = match part {
            1 => shared.iter().map(|d| paper(*d)).sum(),
            2 => shared.iter().map(|d| ribbon(*d)).sum(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(total.to_string())
    }
}

fn paper([l, w, h]: [u32; 3]) -> u32 {
    let mut sides = [l * w, l * h, w * h];
    sides.sort_unstable();
    2 * sides.iter().sum::<u32>() + sides[0]
}

fn ribbon(mut dims: [u32; 3]) -> u32 {
    dims.sort_unstable();
    2 * (dims[0] + dims[1]) + dims[0] * dims[1] * dims[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day2::parse(input).unwrap();
        Day2::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_part_1_examples() {
        assert_eq!(solve("2x3x4", 1), "58");
        assert_eq!(solve("1x1x10", 1), "43");
        assert_eq!(solve("2x3x4\n1x1x10", 1), "101");
    }

    #[test]
    fn test_part_2_examples() {
        assert_eq!(solve("2x3x4", 2), "34");
        assert_eq!(solve("1x1x10", 2), "14");
    }

    #[test]
    fn test_rejects_malformed_dimensions() {
        assert!(Day2::parse("2x3").is_err());
        assert!(Day2::parse("2x3xfour").is_err());
    }
}
