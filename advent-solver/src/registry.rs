//! Registry mapping (year, day) pairs to solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First year of Advent of Code
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`].
///
/// Detects duplicate registrations and out-of-range coordinates up front;
/// `build()` produces an immutable registry.
///
/// # Example
///
/// ```no_run
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<RegistryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory for a specific year and day.
    ///
    /// Returns an error if the slot is already taken or the coordinates are
    /// out of range.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(RegistryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register every solver plugin submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the solver plugins matching a filter predicate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// // Register only 2015 solvers
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.year == 2015)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers.
///
/// Uses a flat Vec with index math for O(1) lookup. Supports years 2015-2034
/// and days 1-25.
pub struct SolverRegistry {
    entries: Vec<Option<RegistryEntry>>,
}

impl SolverRegistry {
    /// Iterate over metadata for all registered solvers, in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                SolverInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Get metadata for a specific solver
    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| SolverInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    /// Check if a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Create a solver instance by invoking the factory for a specific year/day
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

/// Trait for solvers that can register themselves with a registry builder.
///
/// Type-erased counterpart of [`Solver`]: no associated types, so plugin
/// instances of different solver types can live in one collection. Every
/// `Solver` gets this via a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin record for automatic solver registration.
///
/// Submitted through `inventory`, usually by the `AutoRegisterSolver` derive:
///
/// ```ignore
/// #[derive(AutoRegisterSolver)]
/// #[aoc(year = 2015, day = 1, tags = ["easy"])]
/// struct Day1;
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g. "easy", "circuit", "2015")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, SolveError};
    use crate::solver::{PuzzleParser, Solver};
    use proptest::prelude::*;

    struct Doubler;

    impl PuzzleParser for Doubler {
        type SharedData<'a> = u32;

        fn parse(input: &str) -> Result<u32, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat("expected integer".into()))
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut u32, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok((*shared * 2).to_string()),
                2 => Ok((*shared * 4).to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn registry_with_doubler() -> SolverRegistry {
        Doubler
            .register_with(RegistryBuilder::new(), 2015, 1)
            .unwrap()
            .build()
    }

    #[test]
    fn test_register_and_solve() {
        let registry = registry_with_doubler();
        assert!(registry.contains(2015, 1));
        assert_eq!(registry.len(), 1);

        let mut solver = registry.create_solver(2015, 1, "21").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "42");
        assert_eq!(solver.solve(2).unwrap().answer, "84");
        assert!(matches!(
            solver.solve(3),
            Err(SolveError::PartOutOfRange(3))
        ));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let builder = Doubler
            .register_with(RegistryBuilder::new(), 2015, 1)
            .unwrap();
        let err = Doubler.register_with(builder, 2015, 1).err().unwrap();
        assert!(matches!(err, RegistrationError::DuplicateSolver(2015, 1)));
    }

    #[test]
    fn test_out_of_range_registration_rejected() {
        let err = Doubler
            .register_with(RegistryBuilder::new(), 2014, 1)
            .err()
            .unwrap();
        assert!(matches!(err, RegistrationError::InvalidYearDay(2014, 1)));

        let err = Doubler
            .register_with(RegistryBuilder::new(), 2015, 26)
            .err()
            .unwrap();
        assert!(matches!(err, RegistrationError::InvalidYearDay(2015, 26)));
    }

    #[test]
    fn test_missing_solver_lookup() {
        let registry = registry_with_doubler();
        assert!(matches!(
            registry.create_solver(2015, 2, ""),
            Err(SolverError::NotFound(2015, 2))
        ));
        assert!(matches!(
            registry.create_solver(2050, 1, ""),
            Err(SolverError::InvalidYearDay(2050, 1))
        ));
    }

    #[test]
    fn test_info_metadata() {
        let registry = registry_with_doubler();
        let info = registry.get_info(2015, 1).unwrap();
        assert_eq!(info.parts, 2);
        assert_eq!(registry.iter_info().count(), 1);
    }

    proptest! {
        #[test]
        fn prop_index_roundtrip(
            year in BASE_YEAR..BASE_YEAR + MAX_YEARS as u16,
            day in 1u8..=DAYS_PER_YEAR as u8,
        ) {
            let index = calc_index(year, day).unwrap();
            prop_assert!(index < CAPACITY);
            prop_assert_eq!(from_index(index), (year, day));
        }

        #[test]
        fn prop_out_of_bounds_rejected(year in 0u16..5000u16, day in 0u8..=255u8) {
            let in_bounds = (BASE_YEAR..BASE_YEAR + MAX_YEARS as u16).contains(&year)
                && (1..=DAYS_PER_YEAR as u8).contains(&day);
            prop_assert_eq!(calc_index(year, day).is_some(), in_bounds);
        }
    }
}
