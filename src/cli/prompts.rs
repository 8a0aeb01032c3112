//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Ask whether to print the password when the clipboard failed. Returns true
/// to fall back to the terminal. Non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}

pub fn password_written(path: &Path) {
    if !quiet::enabled() {
        println!("password \u{2192} {}", path.display());
    }
}

pub fn file_write_failed(path: &Path) {
    error(&format!("Could not write password to {}", path.display()));
}

/// Every destination failed; the password is dropped without being shown.
pub fn password_discarded() {
    error("Password discarded: it was not delivered anywhere.");
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        println!("settings saved \u{2192} {}", path.display());
    }
}
