//! Day 5: Doesn't He Have Intern-Elves For This?
//!
//! Classify strings as naughty or nice under two rule sets.

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use advent_solver_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 5, tags = ["2015"])]
pub struct Day5;

impl PuzzleParser for Day5 {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // The rules slice pairs by byte, so reject anything non-ASCII up front
        if let Some(bad) = input.split_whitespace().find(|line| !line.is_ascii()) {
            return Err(ParseError::InvalidFormat(format!(
                "non-ASCII string {:?}",
                bad
            )));
        }
        Ok(input.split_whitespace().collect())
    }
}

impl Solver for Day5 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let rule: fn(&str) -> bool = match part {
            1 => is_nice,
            2 => is_nice_revised,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(shared.iter().filter(|line| rule(line)).count().to_string())
    }
}

/// Three vowels, a doubled letter, and none of the forbidden pairs
fn is_nice(line: &str) -> bool {
    let bytes = line.as_bytes();
    let vowels = bytes
        .iter()
        .filter(|b| matches!(b, b'a' | b'e' | b'i' | b'o' | b'u'))
        .count();
    let doubled = bytes.windows(2).any(|w| w[0] == w[1]);
    let forbidden = ["ab", "cd", "pq", "xy"]
        .iter()
        .any(|pair| line.contains(pair));
    vowels >= 3 && doubled && !forbidden
}

/// A pair appearing twice without overlap, and a letter repeating with one
/// letter between
fn is_nice_revised(line: &str) -> bool {
    let bytes = line.as_bytes();
    let pair_twice = (0..bytes.len().saturating_sub(2))
        .any(|i| line[i + 2..].contains(&line[i..i + 2]));
    let aba = bytes.windows(3).any(|w| w[0] == w[2]);
    pair_twice && aba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_1_examples() {
        assert!(is_nice("ugknbfddgicrmopn"));
        assert!(is_nice("aaa"));
        assert!(!is_nice("jchzalrnumimnmhp"));
        assert!(!is_nice("haegwjzuvuyypxyu"));
        assert!(!is_nice("dvszwmarrgswjxmb"));
    }

    #[test]
    fn test_part_2_examples() {
        assert!(is_nice_revised("qjhvhtzxzqqjkmpb"));
        assert!(is_nice_revised("xxyxx"));
        assert!(!is_nice_revised("uurcxstgmygtbstg"));
        assert!(!is_nice_revised("ieodomkazucvgmuy"));
        // Overlapping pair must not count
        assert!(!is_nice_revised("aaa"));
    }

    #[test]
    fn test_rejects_non_ascii_input() {
        assert!(Day5::parse("ugknbfddgicrmopn\nnaïve").is_err());
    }

    #[test]
    fn test_counts_over_lines() {
        let mut shared = Day5::parse("ugknbfddgicrmopn\naaa\njchzalrnumimnmhp").unwrap();
        assert_eq!(Day5::solve_part(&mut shared, 1).unwrap(), "2");
    }
}
