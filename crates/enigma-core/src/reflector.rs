//! Reflector (Umkehrwalze).
//!
//! Fixed wiring that sends the signal back through the rotors. The table is an
//! involution with no fixed point, which is what makes the whole machine
//! self-reciprocal and prevents any letter from encoding to itself.

use std::{fmt, str::FromStr};

use crate::{
    ConfigurationError, Letter,
    wiring::{self, Table},
};

/// Catalog of historical reflectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReflectorModel {
    /// Pre-war UKW-A.
    A,
    /// UKW-B, the standard wartime reflector.
    #[default]
    B,
    /// UKW-C.
    C,
}

const REFLECTOR_A: Table = wiring::table(b"EJMZALYXVBWFCRQUONTSPIKHGD");
const REFLECTOR_B: Table = wiring::table(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");
const REFLECTOR_C: Table = wiring::table(b"FVPJIAOYEDRZXWGCTKUQSBNMHL");

impl ReflectorModel {
    /// Every model in catalog order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    fn table(self) -> &'static Table {
        match self {
            Self::A => &REFLECTOR_A,
            Self::B => &REFLECTOR_B,
            Self::C => &REFLECTOR_C,
        }
    }
}

impl fmt::Display for ReflectorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectorModel {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix("UKW-").unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigurationError::UnknownReflector(s.to_string()))
    }
}

/// Installed reflector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    /// Catalog model. `None` for custom wiring.
    model: Option<ReflectorModel>,
    wiring: Table,
}

impl Reflector {
    /// Install a catalog reflector.
    pub fn new(model: ReflectorModel) -> Self {
        Self { model: Some(model), wiring: *model.table() }
    }

    /// Build a reflector from an arbitrary wiring string.
    ///
    /// The wiring must pair every letter with a different letter.
    pub fn custom(wiring: &str) -> Result<Self, ConfigurationError> {
        let table = wiring::parse_permutation(wiring)
            .map_err(|reason| ConfigurationError::InvalidReflector { reason })?;

        for (contact, &target) in table.iter().enumerate() {
            let letter = Letter::wrapping(contact as u8);
            if usize::from(target) == contact {
                return Err(ConfigurationError::InvalidReflector {
                    reason: format!("letter {letter} is wired to itself"),
                });
            }
            if usize::from(table[usize::from(target)]) != contact {
                return Err(ConfigurationError::InvalidReflector {
                    reason: format!("letter {letter} is not wired symmetrically"),
                });
            }
        }

        Ok(Self { model: None, wiring: table })
    }

    /// Catalog model, if any.
    pub fn model(&self) -> Option<ReflectorModel> {
        self.model
    }

    /// Send a letter back through the machine.
    pub fn reflect(&self, input: Letter) -> Letter {
        Letter::wrapping(self.wiring[usize::from(input.index())])
    }
}

impl Default for Reflector {
    fn default() -> Self {
        Self::new(ReflectorModel::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_reflectors_are_fixed_point_free_involutions() {
        for model in ReflectorModel::ALL {
            let reflector = Reflector::new(model);
            for letter in Letter::all() {
                let reflected = reflector.reflect(letter);
                assert_ne!(reflected, letter, "{model} maps {letter} to itself");
                assert_eq!(reflector.reflect(reflected), letter, "{model} is not an involution");
            }
        }
    }

    #[test]
    fn reflector_b_wiring() {
        let reflector = Reflector::default();
        assert_eq!(reflector.model(), Some(ReflectorModel::B));
        assert_eq!(reflector.reflect(Letter::A).to_char(), 'Y');
    }

    #[test]
    fn custom_reflector_validation() {
        let identity = Reflector::custom("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(matches!(identity, Err(ConfigurationError::InvalidReflector { .. })));

        // A permutation, but not an involution (rotor I wiring).
        let rotor_wiring = Reflector::custom("EKMFLGDQVZNTOWYHXUSPAIBRCJ");
        assert!(matches!(rotor_wiring, Err(ConfigurationError::InvalidReflector { .. })));

        let b = Reflector::custom("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
        assert_eq!(b.model(), None);
        assert_eq!(b.reflect(Letter::A), Reflector::default().reflect(Letter::A));
    }

    #[test]
    fn model_names_parse() {
        assert_eq!("b".parse::<ReflectorModel>(), Ok(ReflectorModel::B));
        assert_eq!("UKW-C".parse::<ReflectorModel>(), Ok(ReflectorModel::C));
        assert!(matches!("D".parse::<ReflectorModel>(), Err(ConfigurationError::UnknownReflector(_))));
    }
}
