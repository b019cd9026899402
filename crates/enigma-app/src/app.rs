//! Application state machine.
//!
//! This module defines the [`EnigmaApp`] state machine, which owns one cipher
//! machine together with the message typed on it, completely decoupled from
//! widgets and I/O.
//!
//! This is a pure state machine: it consumes [`crate::EnigmaEvent`] inputs and
//! returns a [`crate::UiState`] snapshot for the front end to render.
//!
//! # Responsibilities
//!
//! - Steps and enciphers on key presses and lights the matching lamp.
//! - Keeps plaintext, ciphertext and the rotor history in lock step so delete
//!   can rewind the rotors.
//! - Applies settings atomically: a rejected configuration changes nothing.

use enigma_core::{EnigmaMachine, Letter, MAX_PLUGBOARD_PAIRS, RotorPositions, RotorSlot};

use crate::{AppError, EnigmaEvent, MessageBuffers, RotorHistory, Settings, UiState, state::SPACE};

/// Application state machine.
///
/// Events are processed one at a time, each to completion, before the
/// snapshot is returned. Cloning forks an independent session.
#[derive(Debug, Clone)]
pub struct EnigmaApp {
    /// Cipher machine.
    machine: EnigmaMachine,
    /// Settings the machine was last built from.
    settings: Settings,
    /// Plugboard cable limit applied to settings changes.
    max_plugboard_pairs: usize,
    /// Plaintext and ciphertext.
    buffers: MessageBuffers,
    /// Rotor windows before each typed symbol.
    history: RotorHistory,
    /// Lit lamp. `None` if no lamp.
    active_lamp: Option<Letter>,
    /// Pending "settings changed" notification.
    show_settings_changed_toast: bool,
    /// Why the last event was rejected. `None` if it was accepted.
    last_error: Option<AppError>,
}

impl EnigmaApp {
    /// Create an app with the default machine: wheels I-II-III, reflector B,
    /// rings and windows at `A`, no plugboard cables.
    pub fn new() -> Self {
        Self {
            machine: EnigmaMachine::default(),
            settings: Settings::default(),
            max_plugboard_pairs: MAX_PLUGBOARD_PAIRS,
            buffers: MessageBuffers::new(),
            history: RotorHistory::new(),
            active_lamp: None,
            show_settings_changed_toast: false,
            last_error: None,
        }
    }

    /// Create an app from settings and starting rotor windows.
    pub fn with_settings(settings: Settings, positions: RotorPositions) -> Result<Self, AppError> {
        let config = settings.to_machine_config(positions, MAX_PLUGBOARD_PAIRS)?;
        let machine = EnigmaMachine::new(&config)?;
        Ok(Self { machine, settings, ..Self::new() })
    }

    /// Process an event and return the resulting snapshot.
    ///
    /// A rejected event leaves the machine, buffers, history, lamp and toast
    /// untouched and is reported in [`UiState::last_error`].
    pub fn handle(&mut self, event: EnigmaEvent) -> UiState {
        match self.apply(event) {
            Ok(()) => self.last_error = None,
            Err(err) => {
                tracing::warn!(%err, "event rejected");
                self.last_error = Some(err);
            },
        }
        self.ui_state()
    }

    fn apply(&mut self, event: EnigmaEvent) -> Result<(), AppError> {
        match event {
            EnigmaEvent::InputKeyPressed { letter } => self.press(letter),
            EnigmaEvent::InputKeyLifted { .. } => self.active_lamp = None,
            EnigmaEvent::InputDeletePressed => self.delete(),
            EnigmaEvent::InputSpacePressed => {
                self.history.push(self.machine.positions());
                self.buffers.push(SPACE, SPACE);
                self.active_lamp = None;
            },
            EnigmaEvent::RotorStartPositionChanged { slot, value } => {
                let letter = Letter::new(value)?;
                self.turn_dial(slot, letter);
            },
            EnigmaEvent::SettingsChanged(settings) => self.apply_settings(settings)?,
            EnigmaEvent::ToastMessageDisplayed => self.show_settings_changed_toast = false,
        }
        Ok(())
    }

    fn press(&mut self, input: Letter) {
        let before = self.machine.positions();
        let output = self.machine.encode(input);
        self.history.push(before);
        self.buffers.push(input.to_char(), output.to_char());
        self.active_lamp = Some(output);

        tracing::debug!(%input, %output, positions = %self.machine.positions(), "lamp lit");
    }

    fn delete(&mut self) {
        if let Some(positions) = self.history.pop() {
            self.buffers.pop();
            self.machine.set_positions(positions);
            tracing::debug!(%positions, "deleted last symbol");
        }
        self.active_lamp = None;
    }

    fn turn_dial(&mut self, slot: RotorSlot, letter: Letter) {
        self.machine.set_rotor_position(slot, letter);
        tracing::debug!(%slot, %letter, "rotor dial turned");
    }

    fn apply_settings(&mut self, settings: Settings) -> Result<(), AppError> {
        let config = settings.to_machine_config(self.machine.positions(), self.max_plugboard_pairs)?;
        self.machine.reconfigure(&config)?;

        tracing::info!(
            rotors = ?settings.rotors,
            rings = ?settings.ring_settings,
            plugs = settings.plugboard_pairs.len(),
            reflector = %settings.reflector,
            "settings applied"
        );

        self.settings = settings;
        self.buffers.clear();
        self.history.clear();
        self.active_lamp = None;
        self.show_settings_changed_toast = true;
        Ok(())
    }

    /// Snapshot of everything a front end shows.
    pub fn ui_state(&self) -> UiState {
        UiState {
            rotor_positions: self.machine.positions(),
            rotor_labels: self.settings.rotors,
            reflector: self.settings.reflector,
            raw_message: self.buffers.raw().to_owned(),
            encoded_message: self.buffers.encoded().to_owned(),
            active_lamp: self.active_lamp,
            show_settings_changed_toast: self.show_settings_changed_toast,
            last_error: self.last_error.clone(),
        }
    }

    /// Cipher machine.
    pub fn machine(&self) -> &EnigmaMachine {
        &self.machine
    }

    /// Settings currently applied.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Plaintext and ciphertext.
    pub fn buffers(&self) -> &MessageBuffers {
        &self.buffers
    }

    /// Rotor windows before each typed symbol.
    pub fn history(&self) -> &RotorHistory {
        &self.history
    }

    /// Lit lamp. `None` if no lamp.
    pub fn active_lamp(&self) -> Option<Letter> {
        self.active_lamp
    }

    /// Whether the "settings changed" notification is pending.
    pub fn show_settings_changed_toast(&self) -> bool {
        self.show_settings_changed_toast
    }

    /// Why the last event was rejected. `None` if it was accepted.
    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }
}

impl Default for EnigmaApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one event to an owned app.
///
/// Value-in, value-out form of [`EnigmaApp::handle`], convenient for folding
/// over an event log.
pub fn transition(mut app: EnigmaApp, event: EnigmaEvent) -> (EnigmaApp, UiState) {
    let ui = app.handle(event);
    (app, ui)
}
