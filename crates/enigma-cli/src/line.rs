//! Line-oriented driver for stdin/stdout.
//!
//! Implements the [`Driver`] trait by turning each input line into keyboard
//! events and writing the ciphertext produced by that line once it has been
//! processed.
//!
//! | Input | Events |
//! |---|---|
//! | letter | `InputKeyPressed` then `InputKeyLifted` |
//! | space | `InputSpacePressed` |
//! | `-` | `InputDeletePressed` |
//! | anything else | ignored |

use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use enigma_app::{Driver, EnigmaEvent, UiState};

use crate::CliError;

/// Delete key on a line terminal.
pub const DELETE: char = '-';

/// Driver reading lines from `R` and writing ciphertext to `W`.
pub struct LineDriver<R, W> {
    input: R,
    output: W,
    pending: VecDeque<EnigmaEvent>,
    /// Ciphertext as of the last render.
    encoded: String,
    /// Ciphertext length when the current line started. `None` between lines.
    line_start: Option<usize>,
}

impl LineDriver<io::StdinLock<'static>, io::Stdout> {
    /// Driver over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineDriver<R, W> {
    /// Create a driver over any line source and sink.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, pending: VecDeque::new(), encoded: String::new(), line_start: None }
    }

    /// Consume the driver and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn start_line(&mut self, line: &str) {
        self.line_start = Some(self.encoded.chars().count());
        for c in line.trim_end_matches(['\r', '\n']).chars() {
            match c {
                ' ' => self.pending.push_back(EnigmaEvent::InputSpacePressed),
                DELETE => self.pending.push_back(EnigmaEvent::InputDeletePressed),
                c => match (EnigmaEvent::key_pressed(c), EnigmaEvent::key_lifted(c)) {
                    (Some(pressed), Some(lifted)) => self.pending.extend([pressed, lifted]),
                    _ => tracing::trace!(?c, "ignoring character"),
                },
            }
        }
    }

    fn finish_line(&mut self) -> Result<(), CliError> {
        if let Some(start) = self.line_start.take() {
            let text: String = self.encoded.chars().skip(start).collect();
            writeln!(self.output, "{text}")?;
            self.output.flush()?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Driver for LineDriver<R, W> {
    type Error = CliError;

    fn poll_event(&mut self) -> Result<Option<EnigmaEvent>, Self::Error> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            self.finish_line()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.start_line(&line);
        }
    }

    fn render(&mut self, ui: &UiState) -> Result<(), Self::Error> {
        tracing::debug!(
            positions = %ui.rotor_positions,
            lamp = ui.active_lamp_index(),
            raw = %ui.raw_message,
            encoded = %ui.encoded_message,
            "render"
        );
        if let Some(err) = &ui.last_error {
            tracing::warn!(%err, "input rejected");
        }
        ui.encoded_message.clone_into(&mut self.encoded);
        Ok(())
    }

    fn stop(&mut self) {
        if let Err(err) = self.output.flush() {
            tracing::warn!(%err, "failed to flush output");
        }
    }
}
