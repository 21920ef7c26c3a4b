//! Terminal UI for Searchform
//!
//! A thin shell over [`searchform_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`searchform_app::Runtime`].
//!
//! This crate only handles terminal rendering and the final record hand-off.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod output;
pub mod terminal;
pub mod ui;

pub use output::{OutputFormat, write_records};
pub use searchform_app::{AppEvent, Driver, FormConfig, FormController, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError, convert_event};
