//! Three-rotor stack and its stepping mechanism.
//!
//! Slots are named by how often the wheel turns. The fast rotor sits next to
//! the entry wheel (rightmost in the machine), the slow rotor next to the
//! reflector (leftmost).
//!
//! # Stepping
//!
//! Evaluated once per key press, before the signal flows:
//!
//! 1. Sample whether the middle and fast rotors are at a notch.
//! 2. The fast rotor always advances.
//! 3. The middle rotor advances if the fast rotor was at its notch, or if the
//!    middle rotor itself was at its notch (the double step).
//! 4. The slow rotor advances if the middle rotor was at its notch.
//!
//! The double step means the middle rotor moves on two consecutive key
//! presses whenever it reaches its notch, carrying the slow rotor on the
//! second one.

use std::{fmt, str::FromStr};

use crate::{Letter, Rotor, ValidationError};

/// Physical position of a rotor in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorSlot {
    /// Rightmost rotor, steps on every key press.
    Fast,
    /// Centre rotor.
    Middle,
    /// Leftmost rotor, next to the reflector.
    Slow,
}

impl RotorSlot {
    /// Slots in signal order on the way in.
    pub const ALL: [Self; 3] = [Self::Fast, Self::Middle, Self::Slow];

    /// Array index used by slot-ordered arrays (`Fast` = 0).
    pub fn index(self) -> usize {
        match self {
            Self::Fast => 0,
            Self::Middle => 1,
            Self::Slow => 2,
        }
    }
}

impl fmt::Display for RotorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fast => "fast",
            Self::Middle => "middle",
            Self::Slow => "slow",
        })
    }
}

/// Window letters of all three rotors, in slot order.
///
/// [`fmt::Display`] and [`FromStr`] use the window order an operator reads,
/// slow to fast (left to right), e.g. `"ADU"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotorPositions([Letter; 3]);

impl RotorPositions {
    /// Create from individual slot letters.
    pub fn new(fast: Letter, middle: Letter, slow: Letter) -> Self {
        Self([fast, middle, slow])
    }

    /// Window letter for a slot.
    pub fn get(self, slot: RotorSlot) -> Letter {
        self.0[slot.index()]
    }

    /// Replace the window letter for a slot.
    pub fn set(&mut self, slot: RotorSlot, letter: Letter) {
        self.0[slot.index()] = letter;
    }

    /// Letters in slot order (fast, middle, slow).
    pub fn to_array(self) -> [Letter; 3] {
        self.0
    }
}

impl Default for RotorPositions {
    fn default() -> Self {
        Self([Letter::A; 3])
    }
}

impl fmt::Display for RotorPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [fast, middle, slow] = self.0;
        write!(f, "{slow}{middle}{fast}")
    }
}

impl FromStr for RotorPositions {
    type Err = ValidationError;

    fn from_str(window: &str) -> Result<Self, Self::Err> {
        let letters = window.chars().map(Letter::from_char).collect::<Result<Vec<_>, _>>()?;
        match letters.as_slice() {
            &[slow, middle, fast] => Ok(Self::new(fast, middle, slow)),
            _ => Err(ValidationError::InvalidWindow(window.to_string())),
        }
    }
}

/// Ordered stack of three rotors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorBank {
    /// Slot order: fast, middle, slow.
    rotors: [Rotor; 3],
}

impl RotorBank {
    /// Assemble the stack.
    pub fn new(fast: Rotor, middle: Rotor, slow: Rotor) -> Self {
        Self { rotors: [fast, middle, slow] }
    }

    /// Rotor in the given slot.
    pub fn rotor(&self, slot: RotorSlot) -> &Rotor {
        &self.rotors[slot.index()]
    }

    fn rotor_mut(&mut self, slot: RotorSlot) -> &mut Rotor {
        &mut self.rotors[slot.index()]
    }

    /// Advance the stack for one key press.
    pub fn step(&mut self) {
        let middle_at_notch = self.rotor(RotorSlot::Middle).is_at_notch();

        let fast_carried = self.rotor_mut(RotorSlot::Fast).advance();
        if fast_carried || middle_at_notch {
            self.rotor_mut(RotorSlot::Middle).advance();
        }
        if middle_at_notch {
            self.rotor_mut(RotorSlot::Slow).advance();
        }
    }

    /// Pass a letter through fast, middle, slow towards the reflector.
    pub fn encode_forward(&self, input: Letter) -> Letter {
        self.rotors.iter().fold(input, |signal, rotor| rotor.forward(signal))
    }

    /// Pass a letter through slow, middle, fast back from the reflector.
    pub fn encode_backward(&self, input: Letter) -> Letter {
        self.rotors.iter().rev().fold(input, |signal, rotor| rotor.backward(signal))
    }

    /// Current window letters.
    pub fn positions(&self) -> RotorPositions {
        let [fast, middle, slow] = &self.rotors;
        RotorPositions::new(fast.offset(), middle.offset(), slow.offset())
    }

    /// Set all window letters by hand.
    pub fn set_positions(&mut self, positions: RotorPositions) {
        for slot in RotorSlot::ALL {
            self.set_position(slot, positions.get(slot));
        }
    }

    /// Turn one rotor by hand. No carry, no double step.
    pub fn set_position(&mut self, slot: RotorSlot, letter: Letter) {
        self.rotor_mut(slot).set_offset(letter);
    }
}
