//! Day 16: Aunt Sue
//!
//! Match the MFCSAM ticker tape against 500 partially-remembered aunts. An
//! aunt matches when every compound she is remembered for agrees with the
//! tape; compounds she is not remembered for are unconstrained.

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use advent_solver_macros::AutoRegisterSolver;
use anyhow::{Context, anyhow};

/// The MFCSAM readout for the real Aunt Sue
const TICKER_TAPE: [(&str, u32); 10] = [
    ("children", 3),
    ("cats", 7),
    ("samoyeds", 2),
    ("pomeranians", 3),
    ("akitas", 0),
    ("vizslas", 0),
    ("goldfish", 5),
    ("trees", 3),
    ("cars", 2),
    ("perfumes", 1),
];

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 16, tags = ["2015"])]
pub struct Day16;

#[derive(Debug)]
pub struct Aunt<'a> {
    number: u32,
    compounds: Vec<(&'a str, u32)>,
}

impl PuzzleParser for Day16 {
    type SharedData<'a> = Vec<Aunt<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| parse_aunt(line).map_err(|e| ParseError::InvalidFormat(e.to_string())))
            .collect()
    }
}

impl Solver for Day16 {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => shared
                .iter()
                .find(|aunt| matches_tape(aunt))
                .map(|aunt| aunt.number.to_string())
                .ok_or_else(|| SolveError::SolveFailed("no aunt matches the readout".into())),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Parse `Sue N: compound: amount, compound: amount, ...`
fn parse_aunt(line: &str) -> Result<Aunt<'_>, anyhow::Error> {
    let rest = line
        .strip_prefix("Sue ")
        .ok_or_else(|| anyhow!("expected 'Sue N: ...', got {:?}", line))?;
    let (number, compounds) = rest
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after aunt number in {:?}", line))?;
    let number = number
        .trim()
        .parse()
        .with_context(|| format!("bad aunt number in {:?}", line))?;
    let compounds = compounds
        .split(',')
        .map(|entry| {
            let (name, amount) = entry
                .split_once(':')
                .ok_or_else(|| anyhow!("expected 'compound: amount', got {:?}", entry))?;
            let amount = amount
                .trim()
                .parse()
                .with_context(|| format!("bad amount in {:?}", entry))?;
            Ok((name.trim(), amount))
        })
        .collect::<Result<_, anyhow::Error>>()?;
    Ok(Aunt { number, compounds })
}

fn matches_tape(aunt: &Aunt<'_>) -> bool {
    aunt.compounds.iter().all(|&(name, amount)| {
        TICKER_TAPE
            .iter()
            .find(|(tape_name, _)| *tape_name == name)
            .is_none_or(|&(_, tape_amount)| amount == tape_amount)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_matching_aunt() {
        let input = "\
Sue 1: children: 1, cars: 8, vizslas: 7
Sue 2: akitas: 0, trees: 3, cars: 2
Sue 3: goldfish: 4, pomeranians: 3, perfumes: 1
";
        let mut shared = Day16::parse(input).unwrap();
        assert_eq!(Day16::solve_part(&mut shared, 1).unwrap(), "2");
    }

    #[test]
    fn test_unremembered_compounds_are_unconstrained() {
        let mut shared = Day16::parse("Sue 7: perfumes: 1").unwrap();
        assert_eq!(Day16::solve_part(&mut shared, 1).unwrap(), "7");
    }

    #[test]
    fn test_no_match_fails() {
        let mut shared = Day16::parse("Sue 1: cats: 6").unwrap();
        assert!(matches!(
            Day16::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_lines() {
        assert!(Day16::parse("Aunt 1: cats: 7").is_err());
        assert!(Day16::parse("Sue one: cats: 7").is_err());
        assert!(Day16::parse("Sue 1: cats seven").is_err());
    }
}
