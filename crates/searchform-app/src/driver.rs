//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the form runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific input and rendering, while the generic
//! [`crate::Runtime`] handles the event loop.

use std::future::Future;

use crate::{AppEvent, FormController};

/// Abstracts I/O operations for the form runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same loop runs in the production TUI and in simulation.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, ratatui for rendering
/// - **Simulation**: scripted events with invariant checks on every frame
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` once the input source is exhausted, which ends the
    /// session like a quit key.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Render the current form state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, controller: &FormController) -> Result<(), Self::Error>;

    /// Release input and display resources.
    fn stop(&mut self);
}
