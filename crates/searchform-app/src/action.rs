//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::FormController`] for the runtime to execute.

use crate::SearchRecord;

/// Actions produced by the form controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// End the session.
    Quit,

    /// A record was appended to the accumulated list.
    Committed {
        /// The committed keyword/location pair.
        record: SearchRecord,
    },
}
