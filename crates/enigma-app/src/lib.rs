//! Application layer for the Enigma simulator
//!
//! A pure event-driven state machine around [`enigma_core::EnigmaMachine`]
//! and a generic runtime, so every front end shares the same keyboard,
//! lampboard and settings behavior.
//!
//! # Components
//!
//! - [`EnigmaApp`]: state machine (key presses, delete, dials, settings)
//! - [`EnigmaEvent`]: closed set of inputs
//! - [`UiState`]: snapshot returned after every event
//! - [`Driver`]: trait for front-end I/O
//! - [`Runtime`]: generic loop using a Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod app;
mod driver;
mod error;
mod event;
mod runtime;
mod settings;
mod state;

pub use app::{EnigmaApp, transition};
pub use driver::Driver;
pub use error::AppError;
pub use event::EnigmaEvent;
pub use runtime::Runtime;
pub use settings::Settings;
pub use state::{MessageBuffers, RotorHistory, SPACE, UiState};
