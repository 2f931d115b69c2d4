//! Day 7: Some Assembly Required
//!
//! Wire up the bobby-table circuit and read wire `a`. Part 2 feeds part 1's
//! answer back into wire `b` and reads `a` again, which needs the part 1
//! signal first; the shared circuit keeps it around so solving both parts in
//! order computes it only once.

use crate::circuit::Circuit;
use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
use advent_solver_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2015, day = 7, tags = ["2015", "circuit"])]
pub struct Day7;

pub struct Shared {
    circuit: Circuit,
    part_one: Option<u16>,
}

impl Shared {
    fn signal_a(&mut self) -> Result<u16, SolveError> {
        if let Some(value) = self.part_one {
            return Ok(value);
        }
        let value = self
            .circuit
            .evaluate("a")
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        self.part_one = Some(value);
        Ok(value)
    }
}

impl PuzzleParser for Day7 {
    type SharedData<'a> = Shared;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let circuit =
            Circuit::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(Shared {
            circuit,
            part_one: None,
        })
    }
}

impl Solver for Day7 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.signal_a()?.to_string()),
            2 => {
                let a = shared.signal_a()?;
                shared.circuit.reset();
                shared.circuit.force("b", a);
                let a = shared
                    .circuit
                    .evaluate("a")
                    .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
                Ok(a.to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
