//! Terminal front end for the Enigma simulator
//!
//! A thin shell over [`enigma_app::Driver`] that reads plaintext from stdin
//! and writes ciphertext to stdout. All state handling lives in
//! [`enigma_app::EnigmaApp`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod args;
mod error;
pub mod line;

pub use args::MachineArgs;
pub use enigma_app::{Driver, EnigmaApp, EnigmaEvent, Runtime, Settings, UiState};
pub use error::CliError;
pub use line::LineDriver;
