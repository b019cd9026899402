//! Application input events.
//!
//! This module defines [`EnigmaEvent`], the closed set of inputs that drive
//! the [`crate::EnigmaApp`] state machine.
//!
//! Mapping physical input (which button fired, which key was pressed) to an
//! event is the front end's job. The state machine never inspects widgets.

use enigma_core::{Letter, RotorSlot};

use crate::Settings;

/// Events processed by the app state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaEvent {
    /// A letter key went down.
    InputKeyPressed {
        /// Key that was pressed.
        letter: Letter,
    },

    /// A letter key was released.
    InputKeyLifted {
        /// Key that was released.
        letter: Letter,
    },

    /// Delete key pressed.
    InputDeletePressed,

    /// Space bar pressed.
    InputSpacePressed,

    /// A rotor dial was turned by hand.
    RotorStartPositionChanged {
        /// Rotor that was turned.
        slot: RotorSlot,
        /// New window letter index. Must be in `0..26`.
        value: u8,
    },

    /// New machine settings confirmed in the settings dialog.
    SettingsChanged(Settings),

    /// The "settings changed" notification has been shown.
    ToastMessageDisplayed,
}

impl EnigmaEvent {
    /// Key press for a character. `None` if it is not a letter.
    pub fn key_pressed(c: char) -> Option<Self> {
        Letter::from_char(c).ok().map(|letter| Self::InputKeyPressed { letter })
    }

    /// Key release for a character. `None` if it is not a letter.
    pub fn key_lifted(c: char) -> Option<Self> {
        Letter::from_char(c).ok().map(|letter| Self::InputKeyLifted { letter })
    }
}
