//! Enigma cipher engine
//!
//! Bit-exact model of the three-rotor Enigma I: rotor wiring with ring
//! settings, mechanical stepping including the middle-rotor double step,
//! plugboard and reflector substitution. Pure, synchronous and free of I/O so
//! it can be driven by any front end.
//!
//! # Components
//!
//! - [`Rotor`]: one wheel, its wiring, ring setting, notches and window letter
//! - [`RotorBank`]: fast/middle/slow stack and the stepping rule
//! - [`Plugboard`]: symmetric letter swaps
//! - [`Reflector`]: fixed involutive return wiring
//! - [`EnigmaMachine`]: one key press through the whole signal path
//!
//! # Security
//!
//! This is a historical simulator. It is not constant-time and provides no
//! modern cryptographic guarantees.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod letter;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod rotor_bank;
mod wiring;

pub use error::{ConfigurationError, ValidationError};
pub use letter::{ALPHABET_LEN, Letter};
pub use machine::{EnigmaMachine, MachineConfig};
pub use plugboard::{MAX_PLUGBOARD_PAIRS, Plugboard};
pub use reflector::{Reflector, ReflectorModel};
pub use rotor::{Notches, Rotor, RotorModel};
pub use rotor_bank::{RotorBank, RotorPositions, RotorSlot};
