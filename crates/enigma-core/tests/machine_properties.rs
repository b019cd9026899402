//! Property-based tests for the cipher machine.
//!
//! These tests verify invariants that must hold for every configuration:
//! - At fixed rotor positions the substitution is a bijection
//! - At fixed rotor positions the substitution is self-reciprocal
//! - No letter ever encodes to itself
//! - A message deciphers with the same start settings
//! - Stepping follows the double-step rule

use enigma_core::{
    EnigmaMachine, Letter, MAX_PLUGBOARD_PAIRS, MachineConfig, ReflectorModel, RotorModel,
    RotorPositions, RotorSlot,
};
use proptest::prelude::*;

fn letter() -> impl Strategy<Value = Letter> {
    (0u8..26).prop_map(|i| Letter::new(i).unwrap())
}

/// Three distinct wheels out of five.
fn rotors() -> impl Strategy<Value = [RotorModel; 3]> {
    Just(RotorModel::ALL.to_vec()).prop_shuffle().prop_map(|models| [models[0], models[1], models[2]])
}

/// Up to 13 disjoint cables.
fn plugboard() -> impl Strategy<Value = Vec<(Letter, Letter)>> {
    let letters: Vec<Letter> = Letter::all().collect();
    (Just(letters).prop_shuffle(), 0..=MAX_PLUGBOARD_PAIRS).prop_map(|(letters, count)| {
        letters.chunks(2).take(count).map(|pair| (pair[0], pair[1])).collect()
    })
}

fn config() -> impl Strategy<Value = MachineConfig> {
    (
        rotors(),
        prop::array::uniform3(letter()),
        prop::array::uniform3(letter()),
        plugboard(),
        prop::sample::select(ReflectorModel::ALL.to_vec()),
    )
        .prop_map(|(rotors, ring_settings, [fast, middle, slow], plugboard, reflector)| {
            MachineConfig {
                rotors,
                ring_settings,
                positions: RotorPositions::new(fast, middle, slow),
                plugboard,
                reflector,
                ..MachineConfig::default()
            }
        })
}

fn plaintext() -> impl Strategy<Value = String> {
    "[A-Z]{0,200}"
}

proptest! {
    #[test]
    fn prop_substitution_is_bijection(config in config(), presses in 0usize..100) {
        let mut machine = EnigmaMachine::new(&config).unwrap();
        for _ in 0..presses {
            machine.encode(Letter::A);
        }

        let mut seen = [false; 26];
        for input in Letter::all() {
            let output = machine.encode_without_stepping(input);
            prop_assert!(!seen[usize::from(output.index())], "two inputs map to {}", output);
            seen[usize::from(output.index())] = true;
        }
    }

    #[test]
    fn prop_substitution_is_self_reciprocal(config in config(), presses in 0usize..100) {
        let mut machine = EnigmaMachine::new(&config).unwrap();
        for _ in 0..presses {
            machine.encode(Letter::A);
        }

        for input in Letter::all() {
            let output = machine.encode_without_stepping(input);
            prop_assert_ne!(output, input);
            prop_assert_eq!(machine.encode_without_stepping(output), input);
        }
    }

    #[test]
    fn prop_message_deciphers_with_same_settings(config in config(), text in plaintext()) {
        let mut sender = EnigmaMachine::new(&config).unwrap();
        let mut receiver = EnigmaMachine::new(&config).unwrap();

        let ciphertext = sender.encode_str(&text);
        prop_assert_eq!(ciphertext.len(), text.len());
        prop_assert_eq!(receiver.encode_str(&ciphertext), text);
        prop_assert_eq!(sender.positions(), receiver.positions());
    }

    #[test]
    fn prop_fast_rotor_steps_every_press(config in config(), presses in 0u8..100) {
        let mut machine = EnigmaMachine::new(&config).unwrap();
        let start = machine.positions().get(RotorSlot::Fast).index();
        for _ in 0..presses {
            machine.encode(Letter::A);
        }
        let expected = Letter::new((start + presses % 26) % 26).unwrap();
        prop_assert_eq!(machine.positions().get(RotorSlot::Fast), expected);
    }

    #[test]
    fn prop_dial_turn_never_steps(config in config(), slot in prop::sample::select(RotorSlot::ALL.to_vec()), target in letter()) {
        let mut machine = EnigmaMachine::new(&config).unwrap();
        let before = machine.positions();
        machine.set_rotor_position(slot, target);

        let mut expected = before;
        expected.set(slot, target);
        prop_assert_eq!(machine.positions(), expected);
    }
}

/// Middle wheel II one before its notch, fast wheel III one before its notch.
#[test]
fn double_step_advances_middle_twice_and_slow_once() {
    let mut machine = EnigmaMachine::new(&MachineConfig {
        positions: "ADU".parse().unwrap(),
        ..MachineConfig::default()
    })
    .unwrap();
    let before = machine.positions();

    for _ in 0..3 {
        machine.encode(Letter::A);
    }
    let after = machine.positions();

    let moved = |slot: RotorSlot| (after.get(slot).index() + 26 - before.get(slot).index()) % 26;
    assert_eq!(moved(RotorSlot::Fast), 3);
    assert_eq!(moved(RotorSlot::Middle), 2);
    assert_eq!(moved(RotorSlot::Slow), 1);
    assert_eq!(after.to_string(), "BFX");
}

#[test]
fn double_step_from_fast_at_t() {
    let mut machine = EnigmaMachine::new(&MachineConfig {
        positions: "ADT".parse().unwrap(),
        ..MachineConfig::default()
    })
    .unwrap();

    let windows: Vec<String> = (0..4)
        .map(|_| {
            machine.encode(Letter::A);
            machine.positions().to_string()
        })
        .collect();
    assert_eq!(windows, ["ADU", "ADV", "AEW", "BFX"]);
}

#[test]
fn double_step_with_single_carry_only_would_differ() {
    // Same start, but with the middle wheel away from its notch the slow
    // wheel never moves.
    let mut machine = EnigmaMachine::new(&MachineConfig {
        positions: "ACU".parse().unwrap(),
        ..MachineConfig::default()
    })
    .unwrap();
    for _ in 0..3 {
        machine.encode(Letter::A);
    }
    assert_eq!(machine.positions().to_string(), "ADX");
}
