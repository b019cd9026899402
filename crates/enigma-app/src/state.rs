//! Observable application state types.
//!
//! This module defines the data structures that represent the message being
//! typed and what the front end should show: [`MessageBuffers`],
//! [`RotorHistory`] and the [`UiState`] snapshot.
//!
//! [`UiState`] is the "View Model" of the machine. It is an owned, immutable
//! copy produced after every transition, so a renderer can hold it without
//! borrowing the state machine.

use enigma_core::{Letter, ReflectorModel, RotorModel, RotorPositions};

use crate::AppError;

/// Symbol appended to both buffers for the space bar.
pub const SPACE: char = ' ';

/// Plaintext and ciphertext typed so far.
///
/// # Invariants
///
/// `raw` and `encoded` always have the same number of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBuffers {
    raw: String,
    encoded: String,
}

impl MessageBuffers {
    /// Create empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one symbol to each buffer.
    pub fn push(&mut self, raw: char, encoded: char) {
        self.raw.push(raw);
        self.encoded.push(encoded);
    }

    /// Remove the last symbol from each buffer.
    pub fn pop(&mut self) -> Option<(char, char)> {
        let raw = self.raw.pop()?;
        let encoded = self.encoded.pop()?;
        Some((raw, encoded))
    }

    /// Empty both buffers.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.encoded.clear();
    }

    /// Typed text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lamp output.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Number of symbols typed.
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// True if nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Rotor windows recorded before each typed symbol.
///
/// Lets delete put the rotors back exactly where they were, so the next key
/// press reproduces the deleted symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotorHistory(Vec<RotorPositions>);

impl RotorHistory {
    /// Create empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record windows before a symbol is typed.
    pub fn push(&mut self, positions: RotorPositions) {
        self.0.push(positions);
    }

    /// Windows before the most recent symbol. `None` if empty.
    pub fn pop(&mut self) -> Option<RotorPositions> {
        self.0.pop()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of recorded symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no symbols are recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Snapshot for rendering, produced after every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Rotor window letters.
    pub rotor_positions: RotorPositions,
    /// Wheel in each slot (fast, middle, slow).
    pub rotor_labels: [RotorModel; 3],
    /// Installed reflector.
    pub reflector: ReflectorModel,
    /// Typed text, letters `A`-`Z` and spaces.
    pub raw_message: String,
    /// Lamp output, same length as `raw_message`.
    pub encoded_message: String,
    /// Lamp currently lit. `None` if no lamp.
    pub active_lamp: Option<Letter>,
    /// One-shot flag: show the "settings changed" notification.
    pub show_settings_changed_toast: bool,
    /// Why the last event was rejected. `None` if it was accepted.
    pub last_error: Option<AppError>,
}

impl UiState {
    /// Lamp index `0..26`, or -1 when no lamp is lit.
    pub fn active_lamp_index(&self) -> i8 {
        self.active_lamp.map_or(-1, |lamp| lamp.index() as i8)
    }
}
