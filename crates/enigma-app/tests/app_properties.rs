//! Property-based tests for the EnigmaApp state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences:
//! - Plaintext, ciphertext and rotor history always have the same length
//! - Delete rewinds the rotors to where they were before the deleted symbol
//! - Rejected events change nothing

use enigma_app::{EnigmaApp, EnigmaEvent, Settings, transition};
use enigma_core::{Letter, ReflectorModel, RotorModel, RotorSlot};
use proptest::prelude::*;

fn letter() -> impl Strategy<Value = Letter> {
    (0u8..26).prop_map(|i| Letter::new(i).unwrap())
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (
        prop::array::uniform3(prop::sample::select(RotorModel::ALL.to_vec())),
        prop::array::uniform3(0u8..28),
        prop::collection::vec((prop::char::range('@', 'Z'), prop::char::range('A', 'Z')), 0..15),
        prop::sample::select(ReflectorModel::ALL.to_vec()),
    )
        .prop_map(|(rotors, ring_settings, plugboard_pairs, reflector)| Settings {
            rotors,
            ring_settings,
            plugboard_pairs,
            reflector,
        })
}

/// Generate random app events, including invalid ones.
fn event_strategy() -> impl Strategy<Value = EnigmaEvent> {
    prop_oneof![
        6 => letter().prop_map(|letter| EnigmaEvent::InputKeyPressed { letter }),
        3 => letter().prop_map(|letter| EnigmaEvent::InputKeyLifted { letter }),
        2 => Just(EnigmaEvent::InputDeletePressed),
        2 => Just(EnigmaEvent::InputSpacePressed),
        1 => (prop::sample::select(RotorSlot::ALL.to_vec()), 0u8..30)
            .prop_map(|(slot, value)| EnigmaEvent::RotorStartPositionChanged { slot, value }),
        1 => settings_strategy().prop_map(EnigmaEvent::SettingsChanged),
        1 => Just(EnigmaEvent::ToastMessageDisplayed),
    ]
}

proptest! {
    #[test]
    fn prop_buffers_and_history_stay_aligned(events in prop::collection::vec(event_strategy(), 0..100)) {
        let mut app = EnigmaApp::new();
        for event in events {
            let ui = app.handle(event);
            let raw = ui.raw_message.chars().count();
            prop_assert_eq!(raw, ui.encoded_message.chars().count());
            prop_assert_eq!(raw, app.history().len());
            prop_assert_eq!(raw, app.buffers().len());
        }
    }

    #[test]
    fn prop_delete_restores_positions(
        events in prop::collection::vec(event_strategy(), 0..60),
        input in letter(),
    ) {
        let mut app = EnigmaApp::new();
        for event in events {
            app.handle(event);
        }

        let before = app.ui_state();
        let pressed = app.handle(EnigmaEvent::InputKeyPressed { letter: input });
        let deleted = app.handle(EnigmaEvent::InputDeletePressed);

        prop_assert_eq!(deleted.rotor_positions, before.rotor_positions);
        prop_assert_eq!(&deleted.raw_message, &before.raw_message);
        prop_assert_eq!(&deleted.encoded_message, &before.encoded_message);

        let retyped = app.handle(EnigmaEvent::InputKeyPressed { letter: input });
        prop_assert_eq!(retyped.active_lamp, pressed.active_lamp);
    }

    #[test]
    fn prop_rejected_events_change_nothing(
        events in prop::collection::vec(event_strategy(), 0..60),
        event in event_strategy(),
    ) {
        let mut app = EnigmaApp::new();
        for event in events {
            app.handle(event);
        }

        let before = app.ui_state();
        let (app, ui) = transition(app, event);
        if ui.last_error.is_some() {
            prop_assert_eq!(ui.rotor_positions, before.rotor_positions);
            prop_assert_eq!(ui.rotor_labels, before.rotor_labels);
            prop_assert_eq!(ui.reflector, before.reflector);
            prop_assert_eq!(&ui.raw_message, &before.raw_message);
            prop_assert_eq!(&ui.encoded_message, &before.encoded_message);
            prop_assert_eq!(ui.active_lamp, before.active_lamp);
            prop_assert_eq!(ui.show_settings_changed_toast, before.show_settings_changed_toast);
            prop_assert_eq!(app.history().len(), before.raw_message.chars().count());
        }
    }

    #[test]
    fn prop_space_never_moves_rotors(
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut app = EnigmaApp::new();
        for event in events {
            app.handle(event);
        }

        let before = app.ui_state();
        let ui = app.handle(EnigmaEvent::InputSpacePressed);
        prop_assert_eq!(ui.rotor_positions, before.rotor_positions);
        prop_assert!(ui.raw_message.ends_with(' '));
        prop_assert!(ui.encoded_message.ends_with(' '));
    }
}
