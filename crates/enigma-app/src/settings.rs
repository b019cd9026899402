//! Machine settings as delivered by a settings dialog.
//!
//! [`Settings`] carries raw, unvalidated values: ring settings as numbers and
//! plugboard pairs as characters, the way a form collects them. Conversion to
//! an [`enigma_core::MachineConfig`] performs every check.

use enigma_core::{
    ConfigurationError, Letter, MachineConfig, ReflectorModel, RotorModel, RotorPositions,
    RotorSlot,
};

/// Rotor selection, ring settings, plugboard and reflector.
///
/// Arrays are in slot order: fast, middle, slow. Rotor window positions are
/// not part of the settings; they are set with the rotor dials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Wheel in each slot.
    pub rotors: [RotorModel; 3],
    /// Ring setting per slot, `0..26`.
    pub ring_settings: [u8; 3],
    /// Plugboard cables.
    pub plugboard_pairs: Vec<(char, char)>,
    /// Installed reflector.
    pub reflector: ReflectorModel,
}

impl Settings {
    /// Validate and combine with the current rotor windows.
    pub fn to_machine_config(
        &self,
        positions: RotorPositions,
        max_plugboard_pairs: usize,
    ) -> Result<MachineConfig, ConfigurationError> {
        let mut ring_settings = [Letter::A; 3];
        for slot in RotorSlot::ALL {
            let value = self.ring_settings[slot.index()];
            ring_settings[slot.index()] = Letter::new(value)
                .map_err(|_| ConfigurationError::InvalidRingSetting { slot, value })?;
        }

        let plugboard = self
            .plugboard_pairs
            .iter()
            .map(|&(a, b)| Ok((plug_letter(a)?, plug_letter(b)?)))
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        Ok(MachineConfig {
            rotors: self.rotors,
            ring_settings,
            positions,
            plugboard,
            max_plugboard_pairs,
            reflector: self.reflector,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&MachineConfig::default())
    }
}

impl From<&MachineConfig> for Settings {
    fn from(config: &MachineConfig) -> Self {
        Self {
            rotors: config.rotors,
            ring_settings: config.ring_settings.map(Letter::index),
            plugboard_pairs: config.plugboard.iter().map(|(a, b)| (a.to_char(), b.to_char())).collect(),
            reflector: config.reflector,
        }
    }
}

fn plug_letter(c: char) -> Result<Letter, ConfigurationError> {
    Letter::from_char(c).map_err(|_| ConfigurationError::InvalidPlugboardLetter(c))
}
