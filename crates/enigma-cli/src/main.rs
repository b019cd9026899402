//! Enigma simulator binary.
//!
//! # Usage
//!
//! ```bash
//! # Default machine: wheels I-II-III, reflector B, rings and windows at A
//! echo AAAAA | enigma
//!
//! # Operation Barbarossa key
//! enigma --rotors II,IV,V --rings BUL --positions BLA \
//!     --plugboard "AV BS CG DL FU HZ IN KM OW RX" --reflector B
//! ```

use clap::Parser;
use enigma_cli::{CliError, EnigmaApp, LineDriver, MachineArgs, Runtime};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Enigma I cipher machine
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Encipher stdin line by line on a simulated Enigma I")]
#[command(version)]
struct Args {
    #[command(flatten)]
    machine: MachineArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    let (settings, positions) = args.machine.to_settings()?;
    let app = EnigmaApp::with_settings(settings, positions)?;
    tracing::info!(positions = %positions, "enigma starting");

    let app = Runtime::new(LineDriver::stdio(), app).run()?;

    tracing::info!(positions = %app.machine().positions(), "enigma finished");
    Ok(())
}
