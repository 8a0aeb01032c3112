//! Terminal output utilities.
//!
//! Box drawing, result rendering, ANSI helpers.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;
use zeroize::Zeroizing;

use passgen::{Generated, Strength};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// ┌─ Title ──────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content              │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Result Rendering
// ============================================================================

fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::VeryWeak | Strength::Weak => RED,
        Strength::Medium => YELLOW,
        Strength::Strong | Strength::VeryStrong => GREEN,
    }
}

/// Lines shown inside the result box. Passwords wider than the box are split
/// across several lines so the border stays aligned. Every line is wiped on
/// drop since the first ones hold the password.
pub fn result_lines(generated: &Generated, source: &str) -> Vec<Zeroizing<String>> {
    let inner_width = BOX_WIDTH - 4;
    let mut lines: Vec<Zeroizing<String>> = generated
        .password()
        .as_bytes()
        .chunks(inner_width)
        .map(|chunk| Zeroizing::new(chunk.iter().copied().map(char::from).collect::<String>()))
        .collect();

    let strength = generated.strength();
    lines.push(Zeroizing::new(String::new()));
    lines.push(Zeroizing::new(format!(
        "Entropy: {:.2} bits ({}{}{})",
        generated.entropy_bits(),
        strength_color(strength),
        strength,
        RESET
    )));
    lines.push(Zeroizing::new(format!(
        "Charset: {} chars • Source: {}",
        generated.alphabet_size(),
        source
    )));
    lines
}

pub fn print_result(generated: &Generated, source: &str) {
    box_top("Password");
    for line in result_lines(generated, source) {
        box_line(&line);
    }
    box_bottom();
}

#[cfg(test)]
mod tests {
    use passgen::{CryptoSource, GenerationRequest, Selection, generate};

    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width(&format!("{GREEN}Strong{RESET}")), 6);
        assert_eq!(console_width("plain"), 5);
    }

    #[test]
    fn long_passwords_wrap_inside_the_box() {
        let request = GenerationRequest::new(150, Selection::all());
        let generated = generate(&request, &mut CryptoSource::system()).unwrap();
        let lines = result_lines(&generated, "test");

        assert_eq!(lines[0].len(), BOX_WIDTH - 4);
        assert_eq!(lines[1].len(), BOX_WIDTH - 4);
        assert_eq!(lines[2].len(), 150 - 2 * (BOX_WIDTH - 4));
        let joined: String = lines[..3].iter().map(|line| line.as_str()).collect();
        assert_eq!(joined, generated.password());
        assert!(lines[4].contains("Strong") || lines[4].contains("Very strong"));
        assert!(lines[5].contains("92 chars"));
    }
}
