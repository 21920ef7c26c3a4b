//! Deterministic simulation harness for Searchform testing.
//!
//! Scripted [`searchform_app::Driver`] implementation and invariant checks
//! for reproducible testing of the form state machines.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the common
//! form invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_driver;

pub use invariants::{
    BufferWithinLimit, ConfirmFollowsCommit, FieldSetSnapshot, FieldSnapshot, FocusInRange,
    FormSnapshot, Invariant, InvariantKind, InvariantRegistry, InvariantResult,
    RecordsAppendOnly, SingleFocus, Violation,
};
pub use sim_driver::{SimDriver, SimDriverError};
