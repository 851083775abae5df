use clap::Parser;
use std::path::PathBuf;
use tcalc::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tcalc", version = VERSION)]
#[command(about = "Keypad calculator: numbers and operators reduced strictly left to right")]
pub(crate) struct CliArgs {
    /// Press the given keys, print the display and exit (e.g. -c "2+3x4=")
    #[arg(short = 'c', long = "command", value_name = "KEYS")]
    pub(crate) command: Option<String>,

    /// Config file (defaults to ~/.tcalc.toml when present)
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Log every key press and evaluation to stderr
    #[arg(long)]
    pub(crate) trace: bool,
}

impl CliArgs {
    pub(crate) fn load_config(&self) -> Result<Config, tcalc::ConfigError> {
        Config::load_or_default(self.config.as_deref())
    }
}

pub(crate) fn print_help() {
    println!(
        r#"tcalc-{} keypad calculator

KEYS:
    0-9                     Digit
    ,                       Decimal comma
    + - x /                 Operators (* × ÷ also accepted)
    =                       Calculate
    C                       Clear

    Expressions are reduced left to right: 2+3x4= shows 20.

COMMANDS:
    history                 List calculations of this session
    last                    Show the last result
    help                    Show this help
    quit, exit              Leave"#,
        VERSION
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_flag() {
        let args = CliArgs::try_parse_from(["tcalc", "-c", "2+2="]).unwrap();
        assert_eq!(args.command.as_deref(), Some("2+2="));
        assert!(!args.trace);
    }

    #[test]
    fn parse_config_and_trace() {
        let args =
            CliArgs::try_parse_from(["tcalc", "--config", "/tmp/c.toml", "--trace"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(args.trace);
        assert!(args.command.is_none());
    }
}
