//! keypad-calc: drive a keypad calculator from the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc run "12+3="          # Prints 15
//! keypad-calc run --steps "8%"     # Shows the display after every key
//! keypad-calc repl                 # One key sequence per line
//! keypad-calc keys                 # Keyboard bindings
//! ```

use clap::Parser;
use keypad_calc_cli::{handlers, Cli, CliConfig, CliResult, Commands, Verbosity};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli)?;
    init_logging(config.verbosity);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Run(args) => handlers::run_keys(&config, &args.keys, args.steps, &mut out)?,
        Commands::Repl => handlers::run_repl(&config, io::stdin().lock(), &mut out)?,
        Commands::Keys => handlers::print_keys(&config, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// `RUST_LOG` wins over the verbosity flags
fn init_logging(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
