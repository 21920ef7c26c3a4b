//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal driver but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`searchform_app::Runtime`] loop runs in both production and simulation.
//!
//! Every render captures the frame as a [`View`] and, if enabled, checks the
//! invariant registry against a snapshot of the controller.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use searchform_app::{AppEvent, Driver, FormController, KeyInput, View};

use crate::invariants::{FormSnapshot, InvariantRegistry, Violation};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

impl From<Vec<Violation>> for SimDriverError {
    fn from(violations: Vec<Violation>) -> Self {
        let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
        Self(messages.join("; "))
    }
}

/// Shared state for event injection.
///
/// This allows injection and inspection from outside the runtime, which
/// takes the driver by value.
#[derive(Default)]
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    frames: Vec<View>,
    previous: Option<FormSnapshot>,
    /// Returned by the next `poll_event` instead of an event.
    pending_error: Option<String>,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Clones share the same event queue and frame log, so a test keeps one
/// handle while the runtime owns the other.
#[derive(Clone, Default)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<Arc<InvariantRegistry>>,
}

impl std::fmt::Debug for SimDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimDriver").field("invariants", &self.invariants).finish_non_exhaustive()
    }
}

impl SimDriver {
    /// Create a new simulation driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(Arc::new(registry));
        self
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.lock().pending_events.push_back(event);
    }

    /// Inject a single key press.
    pub fn inject_key(&self, key: KeyInput) {
        self.inject_event(AppEvent::Key(key));
    }

    /// Inject a key token such as `"tab"` or `"a"`.
    ///
    /// Unrecognized tokens arrive as pasted text.
    pub fn inject_token(&self, token: &str) {
        self.inject_event(AppEvent::from_token(token));
    }

    /// Inject text as individual character presses.
    pub fn inject_text(&self, text: &str) {
        let mut state = self.lock();
        state.pending_events.extend(text.chars().map(|c| AppEvent::Key(KeyInput::Char(c))));
    }

    /// Make the next poll fail, as a broken input source would.
    pub fn inject_error(&self, message: impl Into<String>) {
        self.lock().pending_error = Some(message.into());
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.lock().pending_events.is_empty()
    }

    /// All frames rendered so far.
    pub fn frames(&self) -> Vec<View> {
        self.lock().frames.clone()
    }

    /// Most recent frame.
    pub fn last_frame(&self) -> Option<View> {
        self.lock().frames.last().cloned()
    }

    /// Runtime released the driver.
    pub fn stopped(&self) -> bool {
        self.lock().stopped
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        let mut state = self.lock();
        if let Some(message) = state.pending_error.take() {
            return Err(SimDriverError(message));
        }
        Ok(state.pending_events.pop_front())
    }

    fn render(&mut self, controller: &FormController) -> Result<(), Self::Error> {
        let mut state = self.lock();
        state.frames.push(controller.render());

        let Some(registry) = &self.invariants else {
            return Ok(());
        };

        let mut snapshot = FormSnapshot::from_controller(controller);
        if let Some(previous) = &state.previous {
            snapshot = snapshot.with_previous(previous);
        }
        let result = registry.check_all(&snapshot);
        state.previous = Some(snapshot);

        result.map_err(|violations| {
            tracing::error!(frame = state.frames.len(), "invariant violated");
            SimDriverError::from(violations)
        })
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}
