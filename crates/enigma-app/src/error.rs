//! Errors surfaced by the app state machine.

use enigma_core::{ConfigurationError, ValidationError};
use thiserror::Error;

/// Reason an event was rejected.
///
/// A rejected event leaves all state unchanged. The error is reported in
/// [`crate::UiState::last_error`] until the next accepted event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Settings could not be applied.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Event carried an out-of-range value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}
