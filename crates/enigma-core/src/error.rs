//! Error types for the cipher engine.
//!
//! Two layers of failure exist: [`ValidationError`] for a single out-of-range
//! input (a letter index or character), and [`ConfigurationError`] for a
//! machine setup that cannot be built (plugboard conflicts, bad wiring,
//! duplicate rotors). Both are rejected before any machine state changes.

use thiserror::Error;

use crate::{Letter, RotorModel, RotorSlot};

/// A single input value is outside the machine alphabet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Numeric letter index is not in `0..26`
    #[error("letter index out of range: {0} (expected 0..26)")]
    LetterOutOfRange(u8),

    /// Character is not an ASCII letter
    #[error("invalid character {0:?}: expected A-Z")]
    InvalidCharacter(char),

    /// Rotor window is not exactly three letters
    #[error("invalid rotor window {0:?}: expected three letters")]
    InvalidWindow(String),
}

/// A machine configuration was rejected.
///
/// Returned by every constructor and `configure`/`reconfigure` operation. The
/// previous configuration is always left intact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Plugboard pair contains a character outside the alphabet
    #[error("invalid plugboard letter {0:?}")]
    InvalidPlugboardLetter(char),

    /// Plugboard pair is not exactly two letters
    #[error("malformed plugboard pair {0:?}: expected two letters")]
    MalformedPlugboardPair(String),

    /// Letter appears in more than one plugboard pair
    #[error("plugboard letter {0} is used more than once")]
    DuplicatePlugboardLetter(Letter),

    /// Letter is paired with itself
    #[error("plugboard letter {0} cannot be paired with itself")]
    SelfPairedPlugboardLetter(Letter),

    /// More plugboard pairs than cables available
    #[error("too many plugboard pairs: {count} (max {max})")]
    TooManyPlugboardPairs {
        /// Number of pairs requested
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// Ring setting outside `0..26`
    #[error("invalid ring setting {value} for {slot} rotor")]
    InvalidRingSetting {
        /// Slot the ring setting was meant for
        slot: RotorSlot,
        /// Rejected value
        value: u8,
    },

    /// Same rotor model selected for more than one slot
    #[error("rotor {0} is selected more than once")]
    DuplicateRotor(RotorModel),

    /// Rotor name not in the catalog
    #[error("unknown rotor {0:?}")]
    UnknownRotor(String),

    /// Reflector name not in the catalog
    #[error("unknown reflector {0:?}")]
    UnknownReflector(String),

    /// Custom rotor wiring is not a permutation of the alphabet
    #[error("invalid rotor wiring: {reason}")]
    InvalidWiring {
        /// What is wrong with the wiring
        reason: String,
    },

    /// Rotor must have one or two notches
    #[error("invalid notch count {count}: expected 1 or 2")]
    InvalidNotches {
        /// Number of notches supplied
        count: usize,
    },

    /// Custom reflector wiring is not a fixed-point-free involution
    #[error("invalid reflector wiring: {reason}")]
    InvalidReflector {
        /// What is wrong with the wiring
        reason: String,
    },
}

impl ConfigurationError {
    /// Returns true if the error concerns the plugboard cabling.
    pub fn is_plugboard(&self) -> bool {
        matches!(
            self,
            Self::InvalidPlugboardLetter(_)
                | Self::MalformedPlugboardPair(_)
                | Self::DuplicatePlugboardLetter(_)
                | Self::SelfPairedPlugboardLetter(_)
                | Self::TooManyPlugboardPairs { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugboard_errors_are_classified() {
        assert!(ConfigurationError::DuplicatePlugboardLetter(Letter::A).is_plugboard());
        assert!(ConfigurationError::TooManyPlugboardPairs { count: 14, max: 13 }.is_plugboard());
        assert!(!ConfigurationError::DuplicateRotor(RotorModel::I).is_plugboard());
        assert!(!ConfigurationError::InvalidNotches { count: 3 }.is_plugboard());
    }

    #[test]
    fn error_display() {
        let err = ConfigurationError::DuplicatePlugboardLetter(Letter::A);
        assert_eq!(err.to_string(), "plugboard letter A is used more than once");

        let err = ConfigurationError::InvalidRingSetting { slot: RotorSlot::Middle, value: 30 };
        assert_eq!(err.to_string(), "invalid ring setting 30 for middle rotor");

        let err = ValidationError::LetterOutOfRange(26);
        assert_eq!(err.to_string(), "letter index out of range: 26 (expected 0..26)");
    }
}
