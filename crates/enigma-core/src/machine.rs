//! The complete cipher machine.
//!
//! [`EnigmaMachine`] composes the plugboard, rotor stack and reflector into a
//! single key-press operation. It owns all cryptographic state; the only state
//! that changes during operation is the rotor window letters.
//!
//! # Signal path
//!
//! ```text
//! key ─► step rotors
//!     ─► plugboard ─► fast ─► middle ─► slow ─► reflector
//!                                                   │
//! lamp ◄─ plugboard ◄─ fast ◄─ middle ◄─ slow ◄─────┘
//! ```
//!
//! Stepping happens before the signal flows, so the first key press of a
//! message is already enciphered at the advanced position.

use crate::{
    ConfigurationError, Letter, MAX_PLUGBOARD_PAIRS, Plugboard, Reflector, ReflectorModel, Rotor,
    RotorBank, RotorModel, RotorPositions, RotorSlot,
};

/// Everything needed to set up a machine for a message.
///
/// All arrays are in slot order: fast, middle, slow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Wheel selection (Walzenlage).
    pub rotors: [RotorModel; 3],
    /// Ring settings (Ringstellung).
    pub ring_settings: [Letter; 3],
    /// Window letters at the start of the message (Grundstellung).
    pub positions: RotorPositions,
    /// Plugboard cables (Steckerverbindungen).
    pub plugboard: Vec<(Letter, Letter)>,
    /// Cable limit for the plugboard.
    pub max_plugboard_pairs: usize,
    /// Reflector (Umkehrwalze).
    pub reflector: ReflectorModel,
}

impl MachineConfig {
    /// Check wheel selection. Plugboard cabling is checked when it is applied.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let [fast, middle, slow] = self.rotors;
        if fast == middle || fast == slow {
            return Err(ConfigurationError::DuplicateRotor(fast));
        }
        if middle == slow {
            return Err(ConfigurationError::DuplicateRotor(middle));
        }
        Ok(())
    }
}

impl Default for MachineConfig {
    /// Wheels I-II-III (left to right), rings and windows at `A`, reflector B,
    /// no cables.
    fn default() -> Self {
        Self {
            rotors: [RotorModel::III, RotorModel::II, RotorModel::I],
            ring_settings: [Letter::A; 3],
            positions: RotorPositions::default(),
            plugboard: Vec::new(),
            max_plugboard_pairs: MAX_PLUGBOARD_PAIRS,
            reflector: ReflectorModel::B,
        }
    }
}

/// Three-rotor cipher machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaMachine {
    bank: RotorBank,
    plugboard: Plugboard,
    reflector: Reflector,
}

impl EnigmaMachine {
    /// Build a machine from a configuration.
    pub fn new(config: &MachineConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let mut plugboard = Plugboard::with_max_pairs(config.max_plugboard_pairs);
        plugboard.configure(&config.plugboard)?;

        Ok(Self::from_parts(rotor_bank(config), plugboard, Reflector::new(config.reflector)))
    }

    /// Assemble a machine from already-built components, e.g. custom wheels.
    pub fn from_parts(bank: RotorBank, plugboard: Plugboard, reflector: Reflector) -> Self {
        Self { bank, plugboard, reflector }
    }

    /// Replace the whole configuration.
    ///
    /// The new configuration is built completely before anything is replaced,
    /// so on error the machine is unchanged.
    pub fn reconfigure(&mut self, config: &MachineConfig) -> Result<(), ConfigurationError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Press a key: step the rotors, then encipher.
    pub fn encode(&mut self, input: Letter) -> Letter {
        self.bank.step();
        let output = self.encode_without_stepping(input);
        tracing::trace!(%input, %output, positions = %self.positions(), "key pressed");
        output
    }

    /// Encipher at the current rotor positions without stepping.
    ///
    /// At fixed positions this is a fixed-point-free involution of the
    /// alphabet.
    pub fn encode_without_stepping(&self, input: Letter) -> Letter {
        let entry = self.plugboard.swap(input);
        let inbound = self.bank.encode_forward(entry);
        let reflected = self.reflector.reflect(inbound);
        let outbound = self.bank.encode_backward(reflected);
        self.plugboard.swap(outbound)
    }

    /// Encipher a whole text.
    ///
    /// Letters are enciphered (upper-cased); any other character is copied
    /// through without stepping the rotors.
    pub fn encode_str(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| match Letter::from_char(c) {
                Ok(letter) => self.encode(letter).to_char(),
                Err(_) => c,
            })
            .collect()
    }

    /// Turn one rotor dial by hand. No stepping logic is applied.
    pub fn set_rotor_position(&mut self, slot: RotorSlot, letter: Letter) {
        self.bank.set_position(slot, letter);
    }

    /// Set all rotor windows by hand.
    pub fn set_positions(&mut self, positions: RotorPositions) {
        self.bank.set_positions(positions);
    }

    /// Current window letters.
    pub fn positions(&self) -> RotorPositions {
        self.bank.positions()
    }

    /// Rotor in the given slot.
    pub fn rotor(&self, slot: RotorSlot) -> &Rotor {
        self.bank.rotor(slot)
    }

    /// Installed plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Installed reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }
}

impl Default for EnigmaMachine {
    fn default() -> Self {
        let config = MachineConfig::default();
        Self::from_parts(
            rotor_bank(&config),
            Plugboard::with_max_pairs(config.max_plugboard_pairs),
            Reflector::new(config.reflector),
        )
    }
}

fn rotor_bank(config: &MachineConfig) -> RotorBank {
    let [fast, middle, slow] = config.rotors;
    let [fast_ring, middle_ring, slow_ring] = config.ring_settings;
    let mut bank = RotorBank::new(
        Rotor::new(fast, fast_ring),
        Rotor::new(middle, middle_ring),
        Rotor::new(slow, slow_ring),
    );
    bank.set_positions(config.positions);
    bank
}
