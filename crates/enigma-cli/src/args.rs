//! Machine configuration from command-line arguments.
//!
//! Wheels, rings and windows are given left to right, the way an operator
//! reads them off the machine: `--rotors I,II,III --rings AAA --positions ADU`.

use enigma_app::Settings;
use enigma_core::{Letter, Plugboard, ReflectorModel, RotorModel, RotorPositions};

use crate::CliError;

/// Machine settings flags.
#[derive(clap::Args, Debug, Clone)]
pub struct MachineArgs {
    /// Wheel order, left to right
    #[arg(long, value_delimiter = ',', default_value = "I,II,III")]
    pub rotors: Vec<RotorModel>,

    /// Ring settings as letters, left to right
    #[arg(long, default_value = "AAA")]
    pub rings: RotorPositions,

    /// Starting window letters, left to right
    #[arg(long, default_value = "AAA")]
    pub positions: RotorPositions,

    /// Plugboard cables, e.g. "AV BS CG"
    #[arg(long, default_value = "")]
    pub plugboard: String,

    /// Reflector (A, B or C)
    #[arg(long, default_value = "B")]
    pub reflector: ReflectorModel,
}

impl MachineArgs {
    /// Settings and starting windows for the app.
    pub fn to_settings(&self) -> Result<(Settings, RotorPositions), CliError> {
        let &[left, middle, right] = self.rotors.as_slice() else {
            return Err(CliError::RotorCount(self.rotors.len()));
        };

        let plugboard_pairs = Plugboard::parse_pairs(&self.plugboard)?
            .into_iter()
            .map(|(a, b)| (a.to_char(), b.to_char()))
            .collect();

        let settings = Settings {
            rotors: [right, middle, left],
            ring_settings: self.rings.to_array().map(Letter::index),
            plugboard_pairs,
            reflector: self.reflector,
        };
        Ok((settings, self.positions))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use enigma_core::RotorSlot;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        machine: MachineArgs,
    }

    fn parse(args: &[&str]) -> MachineArgs {
        TestArgs::try_parse_from(std::iter::once("enigma").chain(args.iter().copied()))
            .unwrap()
            .machine
    }

    #[test]
    fn defaults_match_default_settings() {
        let (settings, positions) = parse(&[]).to_settings().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(positions, RotorPositions::default());
    }

    #[test]
    fn operator_order_is_reversed_into_slots() {
        let args = parse(&[
            "--rotors",
            "II,IV,V",
            "--rings",
            "BUL",
            "--positions",
            "BLA",
            "--plugboard",
            "AV BS",
            "--reflector",
            "UKW-C",
        ]);
        let (settings, positions) = args.to_settings().unwrap();

        assert_eq!(settings.rotors, [RotorModel::V, RotorModel::IV, RotorModel::II]);
        assert_eq!(settings.ring_settings, [11, 20, 1]);
        assert_eq!(settings.plugboard_pairs, vec![('A', 'V'), ('B', 'S')]);
        assert_eq!(settings.reflector, ReflectorModel::C);
        assert_eq!(positions.get(RotorSlot::Fast), Letter::from_char('A').unwrap());
        assert_eq!(positions.get(RotorSlot::Slow), Letter::from_char('B').unwrap());
    }

    #[test]
    fn wrong_rotor_count_rejected() {
        let err = parse(&["--rotors", "I,II"]).to_settings().unwrap_err();
        assert!(matches!(err, CliError::RotorCount(2)));
    }

    #[test]
    fn malformed_values_rejected_by_parser() {
        let run = |args: &[&str]| TestArgs::try_parse_from(std::iter::once("enigma").chain(args.iter().copied()));
        assert!(run(&["--rotors", "I,II,VI"]).is_err());
        assert!(run(&["--positions", "AB"]).is_err());
        assert!(run(&["--reflector", "D"]).is_err());
    }

    #[test]
    fn malformed_plugboard_rejected() {
        let err = parse(&["--plugboard", "ABC"]).to_settings().unwrap_err();
        assert!(matches!(err, CliError::Configuration(_)));
    }
}
