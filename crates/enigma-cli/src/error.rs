//! Front-end errors.

use std::io;

use enigma_app::AppError;
use enigma_core::{ConfigurationError, ValidationError};
use thiserror::Error;

/// Errors from argument handling and terminal I/O.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error on stdin or stdout.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// `--rotors` did not name exactly three wheels.
    #[error("expected three rotors, got {0}")]
    RotorCount(usize),

    /// Machine could not be configured.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Ring or window letters were malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Initial settings were rejected.
    #[error(transparent)]
    App(#[from] AppError),
}
