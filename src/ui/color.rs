//! ANSI color helpers for terminal output

use crate::core::ProbeOutcome;
use crate::core::constants::http_status;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";

    pub const BRIGHT_BLACK: &'static str = "\x1b[90m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// ANSI color matching the status class of an outcome
pub fn color_for(outcome: &ProbeOutcome) -> &'static str {
    if outcome.error.is_some() {
        return Colors::BRIGHT_BLACK;
    }
    match outcome.status_code {
        c if c < http_status::REDIRECT_START => Colors::GREEN,
        c if c < http_status::ERROR_THRESHOLD => Colors::BLUE,
        c if c < http_status::SERVER_ERROR_START => Colors::YELLOW,
        _ => Colors::RED,
    }
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) {
        return false;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) => !(term == "dumb" || term.is_empty()),
        Err(_) => false,
    }
}
