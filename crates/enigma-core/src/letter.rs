//! Alphabet type shared by every machine component.

use std::fmt;

use crate::ValidationError;

/// Number of contacts on every rotor, reflector and plugboard.
pub const ALPHABET_LEN: u8 = 26;

/// A letter of the machine alphabet, stored as its index `0..26` (`A` = 0).
///
/// # Invariants
///
/// The inner index is always `< ALPHABET_LEN`. Every constructor checks or
/// reduces modulo 26, so substitution tables can be indexed without bounds
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A` (index 0).
    pub const A: Self = Self(0);

    /// Create a letter from its index.
    pub fn new(index: u8) -> Result<Self, ValidationError> {
        if index < ALPHABET_LEN {
            Ok(Self(index))
        } else {
            Err(ValidationError::LetterOutOfRange(index))
        }
    }

    /// Create a letter from an ASCII character. Lower case is accepted.
    pub fn from_char(c: char) -> Result<Self, ValidationError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(ValidationError::InvalidCharacter(c))
        }
    }

    /// Index of this letter (`A` = 0).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Upper-case character for this letter.
    pub fn to_char(self) -> char {
        char::from(b'A' + self.0)
    }

    /// Next letter, wrapping `Z` to `A`.
    pub fn next(self) -> Self {
        Self::wrapping(self.0 + 1)
    }

    /// All 26 letters in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN).map(Self)
    }

    /// Reduce an arbitrary index modulo 26.
    pub(crate) const fn wrapping(index: u8) -> Self {
        Self(index % ALPHABET_LEN)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = ValidationError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

impl TryFrom<u8> for Letter {
    type Error = ValidationError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}
