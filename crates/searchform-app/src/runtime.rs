//! Generic runtime for the form event loop.
//!
//! The Runtime drives the session, coordinating between:
//! - [`FormController`]: form state machine
//! - [`Driver`]: Platform-specific I/O
//!
//! One event is fully processed (transition and re-render) before the next
//! one is polled.

use crate::{AppAction, Driver, FormConfig, FormController, SearchRecord};

/// Generic runtime that orchestrates the controller and a driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    controller: FormController,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and form configuration.
    pub fn new(driver: D, config: &FormConfig) -> Self {
        Self { driver, controller: FormController::new(config) }
    }

    /// Run the session until a quit key or the end of input.
    ///
    /// Returns the committed records for the downstream consumer.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<Vec<SearchRecord>, D::Error> {
        tracing::info!("search form session started");
        self.driver.render(&self.controller)?;

        loop {
            let Some(event) = self.driver.poll_event().await? else {
                tracing::debug!("input closed");
                break;
            };

            let actions = self.controller.handle(event);
            if self.process_actions(actions)? {
                break;
            }
        }

        self.driver.stop();
        let records = self.controller.into_records();
        tracing::info!(count = records.len(), "search form session ended");
        Ok(records)
    }

    /// Process actions returned by the controller.
    ///
    /// Returns `true` if the session should end.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.controller)?,
                AppAction::Quit => return Ok(true),
                AppAction::Committed { record } => {
                    tracing::info!(
                        keyword = %record.keyword,
                        location = %record.location,
                        "search criteria committed"
                    );
                },
            }
        }
        Ok(false)
    }

    /// Get a reference to the controller.
    pub fn controller(&self) -> &FormController {
        &self.controller
    }
}
