//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during a session. Unlike
//! example-based tests that check specific scenarios, invariants verify
//! behavioral properties across all possible key sequences.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from a
//! [`searchform_app::FormController`] into a [`FormSnapshot`], then runs
//! registered [`Invariant`] checks against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = FormSnapshot::from_controller(&controller);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{
    BufferWithinLimit, ConfirmFollowsCommit, FocusInRange, RecordsAppendOnly, SingleFocus,
};
pub use snapshot::{FieldSetSnapshot, FieldSnapshot, FormSnapshot};

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Identifies which invariant was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// Exactly one position per field set holds focus.
    SingleFocus,
    /// Focus index and per-field flags agree and stay in range.
    FocusInRange,
    /// No buffer exceeds its length limit.
    BufferWithinLimit,
    /// Records only ever grow, one at a time, at the end.
    RecordsAppendOnly,
    /// Confirm mode only follows a commit.
    ConfirmFollowsCommit,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SingleFocus => "SingleFocus",
            Self::FocusInRange => "FocusInRange",
            Self::BufferWithinLimit => "BufferWithinLimit",
            Self::RecordsAppendOnly => "RecordsAppendOnly",
            Self::ConfirmFollowsCommit => "ConfirmFollowsCommit",
        };
        f.write_str(name)
    }
}

/// Invariant violation with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Which invariant was violated.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against form state.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Which invariant this is, for error reporting.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against the current state.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, state: &FormSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against form state.
/// Use [`InvariantRegistry::standard()`] for the common form invariants.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InvariantRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.invariants.iter().map(|inv| inv.kind())).finish()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard form invariants.
    ///
    /// Includes:
    /// - [`SingleFocus`]: one focused position per field set
    /// - [`FocusInRange`]: focus index and flags agree
    /// - [`BufferWithinLimit`]: buffers respect their length limit
    /// - [`RecordsAppendOnly`]: records grow by at most one, at the end
    /// - [`ConfirmFollowsCommit`]: confirm mode implies a fresh commit
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(SingleFocus);
        registry.add(FocusInRange);
        registry.add(BufferWithinLimit);
        registry.add(RecordsAppendOnly);
        registry.add(ConfirmFollowsCommit);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &FormSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Registry has no invariants.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
