//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the event loop from a specific front end.
//! Each front end (terminal, GUI, scripted test) implements the trait, while
//! the generic [`crate::Runtime`] handles orchestration.

use crate::{EnigmaEvent, UiState};

/// Abstracts input and rendering for the application runtime.
///
/// Mapping physical keys and widgets to [`EnigmaEvent`]s happens here, never
/// in the state machine.
pub trait Driver {
    /// Front-end specific error type.
    type Error: std::error::Error + 'static;

    /// Next input event.
    ///
    /// Returns `None` once input is exhausted, which ends the session.
    fn poll_event(&mut self) -> Result<Option<EnigmaEvent>, Self::Error>;

    /// Render a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if output fails.
    fn render(&mut self, ui: &UiState) -> Result<(), Self::Error>;

    /// Release resources at the end of the session.
    fn stop(&mut self) {}
}

impl<D: Driver + ?Sized> Driver for &mut D {
    type Error = D::Error;

    fn poll_event(&mut self) -> Result<Option<EnigmaEvent>, Self::Error> {
        (**self).poll_event()
    }

    fn render(&mut self, ui: &UiState) -> Result<(), Self::Error> {
        (**self).render(ui)
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}
