//! Day 3: Perfectly Spherical Houses in a Vacuum
//!
//! Count houses visited while following `^v<>` moves. Part 2 alternates
//! instructions between Santa and Robo-Santa, both starting at the origin.

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use advent_solver_macros::AutoRegisterSolver;
use std::collections::HashSet;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 3, tags = ["2015"])]
pub struct Day3;

impl PuzzleParser for Day3 {
    type SharedData<'a> = Vec<(i32, i32)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| match c {
                '^' => Ok((0, 1)),
                'v' => Ok((0, -1)),
                '<' => Ok((-1, 0)),
                '>' => Ok((1, 0)),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected direction {:?}",
                    other
                ))),
            })
            .collect()
    }
}

impl Solver for Day3 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let walkers = match part {
            1 => 1,
            2 => 2,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };

        let mut positions = vec![(0, 0); walkers];
        let mut visited: HashSet<(i32, i32)> = HashSet::from([(0, 0)]);
        for (i, (dx, dy)) in shared.iter().enumerate() {
            let pos = &mut positions[i % walkers];
            *pos = (pos.0 + dx, pos.1 + dy);
            visited.insert(*pos);
        }
        Ok(visited.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day3::parse(input).unwrap();
        Day3::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_part_1_examples() {
        assert_eq!(solve(">", 1), "2");
        assert_eq!(solve("^>v<", 1), "4");
        assert_eq!(solve("^v^v^v^v^v", 1), "2");
    }

    #[test]
    fn test_part_2_examples() {
        assert_eq!(solve("^v", 2), "3");
        assert_eq!(solve("^>v<", 2), "3");
        assert_eq!(solve("^v^v^v^v^v", 2), "11");
    }
}
