//! Generic runtime for application orchestration.
//!
//! The Runtime drives the event loop, coordinating between:
//! - [`EnigmaApp`]: cipher state machine
//! - [`Driver`]: front-end specific I/O

use crate::{Driver, EnigmaApp, EnigmaEvent};

/// Generic runtime that feeds driver events into an [`EnigmaApp`].
///
/// # Type Parameters
///
/// - `D`: front-end I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: EnigmaApp,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and app.
    pub fn new(driver: D, app: EnigmaApp) -> Self {
        Self { driver, app }
    }

    /// Run the event loop until the driver runs out of events.
    ///
    /// Every event is followed by a render. A pending "settings changed"
    /// notification is acknowledged once it has been rendered.
    ///
    /// Returns the final app so the session can be inspected or resumed.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to read or render.
    pub fn run(mut self) -> Result<EnigmaApp, D::Error> {
        self.driver.render(&self.app.ui_state())?;

        while let Some(event) = self.driver.poll_event()? {
            let ui = self.app.handle(event);
            self.driver.render(&ui)?;

            if ui.show_settings_changed_toast {
                let ui = self.app.handle(EnigmaEvent::ToastMessageDisplayed);
                self.driver.render(&ui)?;
            }
        }

        self.driver.stop();
        Ok(self.app)
    }

    /// App being driven.
    pub fn app(&self) -> &EnigmaApp {
        &self.app
    }
}
