//! Day 6: Probably a Fire Hazard
//!
//! Apply `turn on` / `turn off` / `toggle` instructions over inclusive
//! rectangles of a 1000x1000 light grid. Part 1 counts lit lights; part 2
//! treats the instructions as brightness adjustments and sums brightness.

use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use advent_solver_macros::AutoRegisterSolver;
use anyhow::{Context, anyhow};

const GRID: usize = 1000;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 6, tags = ["2015", "grid"])]
pub struct Day6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    action: Action,
    from: (usize, usize),
    to: (usize, usize),
}

impl PuzzleParser for Day6 {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                parse_instruction(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", i + 1, e))
                })
            })
            .collect()
    }
}

impl Solver for Day6 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(count_lit(shared).to_string()),
            2 => Ok(total_brightness(shared).to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn parse_instruction(line: &str) -> Result<Instruction, anyhow::Error> {
    let (action, rest) = if let Some(rest) = line.strip_prefix("turn on ") {
        (Action::TurnOn, rest)
    } else if let Some(rest) = line.strip_prefix("turn off ") {
        (Action::TurnOff, rest)
    } else if let Some(rest) = line.strip_prefix("toggle ") {
        (Action::Toggle, rest)
    } else {
        return Err(anyhow!("unknown action in {:?}", line));
    };

    let (from, to) = rest
        .split_once(" through ")
        .ok_or_else(|| anyhow!("missing 'through' in {:?}", line))?;
    let from = parse_point(from)?;
    let to = parse_point(to)?;
    if from.0 > to.0 || from.1 > to.1 || to.0 >= GRID || to.1 >= GRID {
        return Err(anyhow!("rectangle out of bounds in {:?}", line));
    }

    Ok(Instruction { action, from, to })
}

fn parse_point(s: &str) -> Result<(usize, usize), anyhow::Error> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected x,y, got {:?}", s))?;
    Ok((
        x.trim().parse().with_context(|| format!("bad x in {:?}", s))?,
        y.trim().parse().with_context(|| format!("bad y in {:?}", s))?,
    ))
}

fn count_lit(instructions: &[Instruction]) -> usize {
    let mut lights = vec![false; GRID * GRID];
    for instr in instructions {
        for cell in cells(instr, &mut lights) {
            match instr.action {
                Action::TurnOn => *cell = true,
                Action::TurnOff => *cell = false,
                Action::Toggle => *cell = !*cell,
            }
        }
    }
    lights.iter().filter(|&&lit| lit).count()
}

fn total_brightness(instructions: &[Instruction]) -> u64 {
    let mut lights = vec![0u32; GRID * GRID];
    for instr in instructions {
        for cell in cells(instr, &mut lights) {
            match instr.action {
                Action::TurnOn => *cell += 1,
                Action::TurnOff => *cell = cell.saturating_sub(1),
                Action::Toggle => *cell += 2,
            }
        }
    }
    lights.iter().map(|&b| b as u64).sum()
}

/// Mutable iterator over the cells of an instruction's rectangle
fn cells<'a, T>(
    instr: &Instruction,
    grid: &'a mut [T],
) -> impl Iterator<Item = &'a mut T> + use<'a, T> {
    let (x0, y0) = instr.from;
    let (x1, y1) = instr.to;
    grid.iter_mut()
        .enumerate()
        .filter(move |(i, _)| {
            let (x, y) = (i / GRID, i % GRID);
            (x0..=x1).contains(&x) && (y0..=y1).contains(&y)
        })
        .map(|(_, cell)| cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day6::parse(input).unwrap();
        Day6::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_part_1_examples() {
        assert_eq!(solve("turn on 0,0 through 999,999", 1), "1000000");
        assert_eq!(solve("turn on 0,0 through 999,0", 1), "1000");
        assert_eq!(
            solve(
                "turn on 0,0 through 999,999\nturn off 499,499 through 500,500",
                1
            ),
            "999996"
        );
        assert_eq!(
            solve("turn on 0,0 through 9,9\ntoggle 0,0 through 19,19", 1),
            "300"
        );
    }

    #[test]
    fn test_part_2_examples() {
        assert_eq!(solve("turn on 0,0 through 0,0", 2), "1");
        assert_eq!(solve("toggle 0,0 through 999,999", 2), "2000000");
        assert_eq!(
            solve("turn on 0,0 through 0,0\nturn off 0,0 through 9,9\nturn off 0,0 through 9,9", 2),
            "0"
        );
    }

    #[test]
    fn test_rejects_malformed_lines() {
        assert!(Day6::parse("switch 0,0 through 1,1").is_err());
        assert!(Day6::parse("turn on 0,0 thru 1,1").is_err());
        assert!(Day6::parse("turn on 0,0 through 1000,1").is_err());
    }
}
