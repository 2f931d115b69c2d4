//! Logic-gate circuit evaluator (day 7)
//!
//! Parses wiring instructions of the form `<lhs> -> <name>` into a graph of
//! named 16-bit signal wires and resolves wire values on demand with
//! memoization. A [`Circuit`] is an ordinary value owned by the caller, so
//! independent circuits can coexist.
//!
//! Evaluation is iterative with an explicit work stack and an in-progress
//! marker set: cyclic wirings are reported as [`CircuitError::CycleDetected`]
//! instead of exhausting the call stack, and arbitrarily deep dependency
//! chains are fine.
//!
//! # Example
//!
//! ```
//! use advent_solutions::circuit::Circuit;
//!
//! let mut circuit = Circuit::parse("123 -> x\nNOT x -> h\n").unwrap();
//! assert_eq!(circuit.evaluate("h").unwrap(), 65412);
//! ```

use std::collections::{HashMap, HashSet};
use thiserror::Error;


/// Errors from parsing or evaluating a circuit
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CircuitError {
    /// An instruction line does not match the grammar
    #[error("malformed instruction: {0:?}")]
    MalformedInstruction(String),
    /// Evaluation referenced a wire that was never registered
    #[error("undefined wire: {0}")]
    UndefinedWire(String),
    /// The wiring contains a dependency cycle through this wire
    #[error("cycle detected through wire: {0}")]
    CycleDetected(String),
}

/// A gate input: either a literal signal or a reference to another wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A literal unsigned 16-bit value
    Literal(u16),
    /// The name of another wire
    Wire(String),
}

/// The rule by which a wire derives its signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// A fixed literal signal
    Constant(u16),
    /// Passthrough of a single operand
    Forward(Operand),
    /// 16-bit complement of the operand
    Not(Operand),
    /// Bitwise AND of two operands
    And(Operand, Operand),
    /// Bitwise OR of two operands
    Or(Operand, Operand),
    /// First operand shifted left by the second
    Lshift(Operand, Operand),
    /// First operand shifted right by the second
    Rshift(Operand, Operand),
}

impl Gate {
    /// Whether this wire's signal is computed rather than fixed.
    ///
    /// Derived wires have their cached value cleared by [`Circuit::reset`];
    /// constants keep theirs.
    pub fn is_derived(&self) -> bool {
        !matches!(self, Gate::Constant(_))
    }

    /// The gate's operands, in order
    fn operands(&self) -> impl Iterator<Item = &Operand> {
        let (first, second) = match self {
            Gate::Constant(_) => (None, None),
            Gate::Forward(a) | Gate::Not(a) => (Some(a), None),
            Gate::And(a, b) | Gate::Or(a, b) | Gate::Lshift(a, b) | Gate::Rshift(a, b) => {
                (Some(a), Some(b))
            }
        };
        first.into_iter().chain(second)
    }
}

/// One named wire: its gate and, once evaluated, its cached signal
#[derive(Debug, Clone)]
struct Node {
    gate: Gate,
    cached: Option<u16>,
}

/// A named graph of signal wires with memoized on-demand evaluation.
///
/// Wire names are unique; registering a second definition for a name replaces
/// the first (last write wins).
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    nodes: HashMap<String, Node>,
    gate_applications: u64,
}

impl Circuit {
    /// Create an empty circuit
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a full instruction listing, skipping blank lines
    pub fn parse(text: &str) -> Result<Self, CircuitError> {
        let mut circuit = Self::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            circuit.register(line)?;
        }
        Ok(circuit)
    }

    /// Number of registered wires
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the circuit has no wires
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total gate applications performed so far.
    ///
    /// Diagnostic counter; memoized lookups don't increment it.
    pub fn gate_applications(&self) -> u64 {
        self.gate_applications
    }

    /// Register one instruction of the form `<lhs> -> <name>`.
    ///
    /// `<lhs>` is a literal, a wire name, `NOT <operand>`, or
    /// `<operand> <OP> <operand>` with `OP` one of `AND`, `OR`, `LSHIFT`,
    /// `RSHIFT`. Replaces any existing wire of the same name.
    pub fn register(&mut self, line: &str) -> Result<(), CircuitError> {
        let malformed = || CircuitError::MalformedInstruction(line.to_string());

        let (lhs, name) = line.split_once("->").ok_or_else(malformed)?;
        let name = name.trim();
        if !is_wire_name(name) {
            return Err(malformed());
        }

        let tokens: Vec<&str> = lhs.split_whitespace().collect();
        let gate = match tokens[..] {
            [op] => match parse_operand(op).ok_or_else(malformed)? {
                Operand::Literal(value) => Gate::Constant(value),
                wire => Gate::Forward(wire),
            },
            ["NOT", op] => Gate::Not(parse_operand(op).ok_or_else(malformed)?),
            [a, op, b] => {
                let a = parse_operand(a).ok_or_else(malformed)?;
                let b = parse_operand(b).ok_or_else(malformed)?;
                match op {
                    "AND" => Gate::And(a, b),
                    "OR" => Gate::Or(a, b),
                    "LSHIFT" => Gate::Lshift(a, b),
                    "RSHIFT" => Gate::Rshift(a, b),
                    _ => return Err(malformed()),
                }
            }
            _ => return Err(malformed()),
        };

        self.nodes.insert(
            name.to_string(),
            Node {
                gate,
                cached: None,
            },
        );
        Ok(())
    }

    /// Resolve the 16-bit signal on a wire.
    ///
    /// Cached values are returned without recomputation; otherwise the wire's
    /// dependencies are resolved depth-first on an explicit stack and each
    /// gate result is cached as it is computed.
    ///
    /// # Errors
    ///
    /// * [`CircuitError::UndefinedWire`] if `name` or any wire it depends on
    ///   was never registered
    /// * [`CircuitError::CycleDetected`] if `name` depends on itself
    pub fn evaluate(&mut self, name: &str) -> Result<u16, CircuitError> {
        let mut stack = vec![name.to_string()];
        let mut in_progress: HashSet<String> = HashSet::new();

        while let Some(wire) = stack.last().cloned() {
            let node = self
                .nodes
                .get(&wire)
                .ok_or_else(|| CircuitError::UndefinedWire(wire.clone()))?;
            if node.cached.is_some() {
                in_progress.remove(&wire);
                stack.pop();
                continue;
            }

            // Descend into the first unresolved dependency, if any
            let mut unresolved = None;
            for operand in node.gate.operands() {
                if let Operand::Wire(dep) = operand {
                    let dep_node = self
                        .nodes
                        .get(dep)
                        .ok_or_else(|| CircuitError::UndefinedWire(dep.clone()))?;
                    if dep_node.cached.is_none() {
                        if in_progress.contains(dep) {
                            return Err(CircuitError::CycleDetected(dep.clone()));
                        }
                        unresolved = Some(dep.clone());
                        break;
                    }
                }
            }

            if let Some(dep) = unresolved {
                in_progress.insert(wire);
                stack.push(dep);
                continue;
            }

            let value = self.apply_gate(&wire)?;
            if let Some(node) = self.nodes.get_mut(&wire) {
                node.cached = Some(value);
            }
            self.gate_applications += 1;
            in_progress.remove(&wire);
            stack.pop();
        }

        self.nodes
            .get(name)
            .and_then(|n| n.cached)
            .ok_or_else(|| CircuitError::UndefinedWire(name.to_string()))
    }

    /// Clear the cached signal on every derived wire so the circuit can be
    /// re-evaluated from scratch. Constants keep their values.
    pub fn reset(&mut self) {
        for node in self.nodes.values_mut() {
            if node.gate.is_derived() {
                node.cached = None;
            }
        }
    }

    /// Force a wire's signal, bypassing its gate.
    ///
    /// A subsequent [`Circuit::evaluate`] of this wire (or anything depending
    /// on it) sees the forced value without recomputing the wire's
    /// definition. Forcing an unregistered name creates a constant wire.
    pub fn force(&mut self, name: &str, value: u16) {
        match self.nodes.get_mut(name) {
            Some(node) => node.cached = Some(value),
            None => {
                self.nodes.insert(
                    name.to_string(),
                    Node {
                        gate: Gate::Constant(value),
                        cached: Some(value),
                    },
                );
            }
        }
    }

    /// Compute a wire's gate over its (already resolved) operands
    fn apply_gate(&self, wire: &str) -> Result<u16, CircuitError> {
        let node = self
            .nodes
            .get(wire)
            .ok_or_else(|| CircuitError::UndefinedWire(wire.to_string()))?;
        Ok(match &node.gate {
            Gate::Constant(value) => *value,
            Gate::Forward(a) => self.operand_value(a)?,
            Gate::Not(a) => !self.operand_value(a)?,
            Gate::And(a, b) => self.operand_value(a)? & self.operand_value(b)?,
            Gate::Or(a, b) => self.operand_value(a)? | self.operand_value(b)?,
            Gate::Lshift(a, b) => shl16(self.operand_value(a)?, self.operand_value(b)?),
            Gate::Rshift(a, b) => shr16(self.operand_value(a)?, self.operand_value(b)?),
        })
    }

    /// Resolve an operand: literals are themselves, wires read their cache
    fn operand_value(&self, operand: &Operand) -> Result<u16, CircuitError> {
        match operand {
            Operand::Literal(value) => Ok(*value),
            Operand::Wire(name) => self
                .nodes
                .get(name)
                .and_then(|n| n.cached)
                .ok_or_else(|| CircuitError::UndefinedWire(name.clone())),
        }
    }
}

/// Shift left within 16 bits; shifting by 16 or more bits leaves nothing
fn shl16(value: u16, shift: u16) -> u16 {
    if shift >= 16 { 0 } else { value << shift }
}

/// Shift right within 16 bits
fn shr16(value: u16, shift: u16) -> u16 {
    if shift >= 16 { 0 } else { value >> shift }
}

/// Wire names are non-empty lowercase alphabetic identifiers
fn is_wire_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// Parse a token as a literal or a wire reference
fn parse_operand(token: &str) -> Option<Operand> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok().map(Operand::Literal)
    } else if is_wire_name(token) {
        Some(Operand::Wire(token.to_string()))
    } else {
        None
    }
}
