use chrono::Local;
use tcalc::{display, lex, Keypad};

/// Press the keys of a single input line and return the display text
pub(crate) fn execute_line(keypad: &mut Keypad, input: &str) -> Result<String, String> {
    let keys = lex(input).map_err(|e| e.to_string())?;
    keypad.press_all(keys);
    Ok(keypad.label().to_string())
}

/// Render the history screen for the current session
pub(crate) fn history_screen(keypad: &Keypad) -> String {
    let session = keypad.session();
    display::format_history(
        session.calculations(),
        Local::now().date_naive(),
        session.format(),
        terminal_width(),
    )
}

/// Get terminal width, defaulting to 80
pub(crate) fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}
