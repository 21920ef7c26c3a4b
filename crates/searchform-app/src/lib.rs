//! Application layer for Searchform
//!
//! Pure state machines and a generic runtime for collecting search criteria
//! (keyword and location pairs) from an interactive form. Nothing here touches
//! a terminal, so the same code runs in production and in deterministic tests.
//!
//! # Components
//!
//! - [`FieldSet`]: focus ring over text fields plus a submit slot
//! - [`FormController`]: `Editing` / `ConfirmAdd` session state machine
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic event loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod config;
mod controller;
mod driver;
mod event;
mod field;
mod field_set;
mod input;
mod record;
mod runtime;
mod view;

pub use action::AppAction;
pub use config::{FieldConfig, FormConfig};
pub use controller::{FormController, Mode, Transition};
pub use driver::Driver;
pub use event::AppEvent;
pub use field::Field;
pub use field_set::{FieldSet, FocusTarget};
pub use input::{KeyInput, KeyTokenError};
pub use record::SearchRecord;
pub use runtime::Runtime;
pub use view::{CursorHint, Line, Span, StyleTag, View};
