//! tcalc - keypad calculator
//!
//! Usage:
//!   tcalc              Start interactive REPL
//!   tcalc -c "keys"    Press the keys and print the display

mod cli;
mod repl;
mod terminal;

use clap::Parser;
use cli::CliArgs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("tcalc=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.trace);

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tcalc: {}", e);
            return ExitCode::from(2);
        }
    };
    tracing::debug!(?config, "config loaded");

    if let Some(keys) = &args.command {
        let mut keypad = config.keypad();
        return match terminal::execute_line(&mut keypad, keys) {
            Ok(label) => {
                println!("{}", label);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("tcalc: {}", e);
                ExitCode::from(1)
            }
        };
    }

    match repl::run_repl(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tcalc: {}", e);
            ExitCode::from(1)
        }
    }
}
