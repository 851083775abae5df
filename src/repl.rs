use crate::cli::print_help;
use crate::terminal::{execute_line, history_screen};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tcalc::{display, Config};

/// A REPL line that is a command rather than keys
enum Command {
    History,
    Last,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line {
        "history" => Some(Command::History),
        "last" => Some(Command::Last),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

pub(crate) fn run_repl(config: &Config) -> RlResult<()> {
    let mut rl = DefaultEditor::new()?;
    let mut keypad = config.keypad();

    if config.repl.banner {
        println!("tcalc - type keys like 2+3x4= ('help' for more)");
    }

    loop {
        match rl.readline(&config.repl.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match parse_command(trimmed) {
                    Some(Command::Quit) => break,
                    Some(Command::Help) => print_help(),
                    Some(Command::History) => println!("{}", history_screen(&keypad)),
                    Some(Command::Last) => {
                        println!("{}", display::format_last_result(keypad.session().last_result()))
                    }
                    None => match execute_line(&mut keypad, trimmed) {
                        Ok(label) => println!("{}", label),
                        Err(e) => eprintln!("\x1b[31mError:\x1b[0m {}", e),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C behaves like the C key
                keypad.on_clear();
                println!("{}", keypad.label());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                tracing::error!(%err, "readline failed");
                return Err(err);
            }
        }
    }

    Ok(())
}
