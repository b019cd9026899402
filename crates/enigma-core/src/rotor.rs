//! Cipher wheels.
//!
//! A [`Rotor`] is a fixed wiring permutation mounted on a wheel that turns one
//! position at a time. Its substitution depends on two settings:
//!
//! - `offset`: the letter showing in the window, changed by stepping or by
//!   turning the dial by hand.
//! - `ring_setting`: rotation of the wiring core relative to the alphabet ring,
//!   fixed for a message.
//!
//! The notch ring is attached to the alphabet ring, so notch positions are
//! expressed in window letters and are unaffected by the ring setting.

use std::{fmt, str::FromStr};

use crate::{
    ALPHABET_LEN, ConfigurationError, Letter,
    wiring::{self, Table},
};

/// Catalog of the five Enigma I wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorModel {
    /// Wheel I, turnover at Q.
    I,
    /// Wheel II, turnover at E.
    II,
    /// Wheel III, turnover at V.
    III,
    /// Wheel IV, turnover at J.
    IV,
    /// Wheel V, turnover at Z.
    V,
}

const ROTOR_I: Table = wiring::table(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ");
const ROTOR_II: Table = wiring::table(b"AJDKSIRUXBLHWTMCQGZNPYFVOE");
const ROTOR_III: Table = wiring::table(b"BDFHJLCPRTXVZNYEIWGAKMUSQO");
const ROTOR_IV: Table = wiring::table(b"ESOVPZJAYQUIRHXLNFTGKDCMWB");
const ROTOR_V: Table = wiring::table(b"VZBRGITYUPSDNHLXAWMJQOFECK");

impl RotorModel {
    /// Every model in catalog order.
    pub const ALL: [Self; 5] = [Self::I, Self::II, Self::III, Self::IV, Self::V];

    /// Roman numeral name.
    pub fn name(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
        }
    }

    /// Window letter at which this wheel carries its neighbour.
    pub fn notch(self) -> Letter {
        let c = match self {
            Self::I => b'Q',
            Self::II => b'E',
            Self::III => b'V',
            Self::IV => b'J',
            Self::V => b'Z',
        };
        Letter::wrapping(c - b'A')
    }

    fn table(self) -> &'static Table {
        match self {
            Self::I => &ROTOR_I,
            Self::II => &ROTOR_II,
            Self::III => &ROTOR_III,
            Self::IV => &ROTOR_IV,
            Self::V => &ROTOR_V,
        }
    }
}

impl fmt::Display for RotorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorModel {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigurationError::UnknownRotor(s.to_string()))
    }
}

/// Turnover positions of a rotor. Historical wheels carry one or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notches {
    /// One turnover position.
    Single(Letter),
    /// Two turnover positions.
    Double(Letter, Letter),
}

impl Notches {
    /// Build from a list of one or two letters.
    pub fn from_letters(letters: &[Letter]) -> Result<Self, ConfigurationError> {
        match *letters {
            [a] => Ok(Self::Single(a)),
            [a, b] if a != b => Ok(Self::Double(a, b)),
            [a, _] => Ok(Self::Single(a)),
            _ => Err(ConfigurationError::InvalidNotches { count: letters.len() }),
        }
    }

    /// True if `position` is a turnover position.
    pub fn contains(self, position: Letter) -> bool {
        match self {
            Self::Single(a) => a == position,
            Self::Double(a, b) => a == position || b == position,
        }
    }
}

/// A wheel installed in the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    /// Catalog model. `None` for custom wiring.
    model: Option<RotorModel>,
    /// Entry contact to exit contact, right-to-left pass.
    forward: Table,
    /// Inverse of `forward`, left-to-right pass.
    backward: Table,
    notches: Notches,
    ring_setting: Letter,
    /// Letter showing in the window.
    offset: Letter,
}

impl Rotor {
    /// Install a catalog wheel at window position `A`.
    pub fn new(model: RotorModel, ring_setting: Letter) -> Self {
        let forward = *model.table();
        Self {
            model: Some(model),
            forward,
            backward: wiring::invert(&forward),
            notches: Notches::Single(model.notch()),
            ring_setting,
            offset: Letter::A,
        }
    }

    /// Build a wheel from an arbitrary wiring string.
    pub fn custom(
        wiring: &str,
        notches: &[Letter],
        ring_setting: Letter,
    ) -> Result<Self, ConfigurationError> {
        let forward = wiring::parse_permutation(wiring)
            .map_err(|reason| ConfigurationError::InvalidWiring { reason })?;
        let notches = Notches::from_letters(notches)?;
        Ok(Self {
            model: None,
            forward,
            backward: wiring::invert(&forward),
            notches,
            ring_setting,
            offset: Letter::A,
        })
    }

    /// Catalog model, if any.
    pub fn model(&self) -> Option<RotorModel> {
        self.model
    }

    /// Turnover positions.
    pub fn notches(&self) -> Notches {
        self.notches
    }

    /// Ring setting (Ringstellung).
    pub fn ring_setting(&self) -> Letter {
        self.ring_setting
    }

    /// Letter showing in the window.
    pub fn offset(&self) -> Letter {
        self.offset
    }

    /// Turn the wheel by hand. Does not carry to any neighbour.
    pub fn set_offset(&mut self, offset: Letter) {
        self.offset = offset;
    }

    /// True if the window shows a turnover position.
    pub fn is_at_notch(&self) -> bool {
        self.notches.contains(self.offset)
    }

    /// Step one position.
    ///
    /// Returns whether the wheel was at a turnover position before moving.
    pub fn advance(&mut self) -> bool {
        let was_at_notch = self.is_at_notch();
        self.offset = self.offset.next();
        was_at_notch
    }

    /// Substitute on the way in (towards the reflector).
    pub fn forward(&self, input: Letter) -> Letter {
        self.substitute(&self.forward, input)
    }

    /// Substitute on the way back (from the reflector).
    pub fn backward(&self, input: Letter) -> Letter {
        self.substitute(&self.backward, input)
    }

    fn substitute(&self, table: &Table, input: Letter) -> Letter {
        // Net rotation of the wiring core relative to the fixed entry contacts.
        let shift = (self.offset.index() + ALPHABET_LEN - self.ring_setting.index()) % ALPHABET_LEN;
        let contact = Letter::wrapping(input.index() + shift);
        let exit = table[usize::from(contact.index())];
        Letter::wrapping(exit + ALPHABET_LEN - shift)
    }
}
