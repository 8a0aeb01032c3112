use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use tracing::warn;

use crate::terminal::{BOLD, RESET, RawModeGuard, flush, reset_terminal};

/// Outcome of one key press on a line being edited.
#[derive(Debug, PartialEq, Eq)]
enum Edit {
    Accept,
    Cancel,
    Quit,
    Changed,
    Ignored,
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Apply `key` to `line`, inserting only characters `accept` allows.
fn apply_key(line: &mut String, key: &KeyEvent, accept: impl Fn(char) -> bool) -> Edit {
    if is_ctrl(key, 'c') {
        return Edit::Quit;
    }
    if is_ctrl(key, 'q') {
        return Edit::Cancel;
    }
    if is_ctrl(key, 'u') {
        line.clear();
        return Edit::Changed;
    }
    match key.code {
        KeyCode::Esc => Edit::Cancel,
        KeyCode::Enter => Edit::Accept,
        KeyCode::Backspace => {
            if line.pop().is_some() {
                Edit::Changed
            } else {
                Edit::Ignored
            }
        }
        KeyCode::Char(c) if accept(c) => {
            line.push(c);
            Edit::Changed
        }
        _ => Edit::Ignored,
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Cancel,
    Quit,
}

/// Map a key to a yes/no answer. Enter takes the default.
fn yes_no(key: &KeyEvent, default: bool) -> Option<Answer> {
    if is_ctrl(key, 'c') {
        return Some(Answer::Quit);
    }
    if is_ctrl(key, 'q') {
        return Some(Answer::Cancel);
    }
    match key.code {
        KeyCode::Char('y' | 'Y' | 's' | 'S') => Some(Answer::Yes),
        KeyCode::Char('n' | 'N') => Some(Answer::No),
        KeyCode::Enter if default => Some(Answer::Yes),
        KeyCode::Enter => Some(Answer::No),
        KeyCode::Esc => Some(Answer::Cancel),
        _ => None,
    }
}

/// Next key press, skipping releases and non-key events.
fn next_key() -> Option<KeyEvent> {
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => return Some(key),
            Ok(_) => continue,
            Err(_) => return None,
        }
    }
}

/// Prompts need raw mode; without it they cancel instead of guessing.
fn prompt_guard(guard: io::Result<RawModeGuard>) -> Option<RawModeGuard> {
    match guard {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!(error = %e, "raw mode unavailable, cancelling prompt");
            None
        }
    }
}

fn quit() -> ! {
    reset_terminal();
    println!();
    std::process::exit(0);
}

fn read_line(prompt: &str, initial: &str, accept: impl Fn(char) -> bool) -> Option<String> {
    let mut line = initial.to_string();
    let mut drawn = line.chars().count();

    let mut guard = prompt_guard(RawModeGuard::new())?;

    print!("{BOLD}{prompt}{RESET}: {line}");
    flush();

    let accepted = loop {
        let Some(key) = next_key() else {
            break false;
        };
        match apply_key(&mut line, &key, &accept) {
            Edit::Accept => break true,
            Edit::Cancel => break false,
            Edit::Quit => quit(),
            Edit::Changed => {
                print!("\r{BOLD}{prompt}{RESET}: {}", " ".repeat(drawn + 1));
                print!("\r{BOLD}{prompt}{RESET}: {line}");
                flush();
                drawn = line.chars().count();
            }
            Edit::Ignored => {}
        }
    };

    guard.release();
    println!();
    accepted.then_some(line)
}

/// Read a whole number. `None` when the prompt is cancelled.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    let line = read_line(prompt, &initial.to_string(), |c| c.is_ascii_digit())?;
    // Empty or overflowing input reads as 0 so the caller re-asks.
    Some(line.parse().unwrap_or(0))
}

pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    read_line(prompt, initial, |c| !c.is_control())
}

/// Single-key yes/no question. `None` when cancelled.
pub fn get_yes_no(prompt: &str, default: bool) -> Option<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };

    let mut guard = prompt_guard(RawModeGuard::new())?;

    print!("{BOLD}{prompt}{RESET} {hint} ");
    flush();

    let answer = loop {
        let Some(key) = next_key() else {
            break None;
        };
        match yes_no(&key, default) {
            Some(Answer::Yes) => break Some(true),
            Some(Answer::No) => break Some(false),
            Some(Answer::Cancel) => break None,
            Some(Answer::Quit) => quit(),
            None => {}
        }
    };

    guard.release();
    match answer {
        Some(true) => println!("yes"),
        Some(false) => println!("no"),
        None => println!(),
    }
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn numeric_editing_filters_keys() {
        let mut line = String::from("1");
        let digits = |c: char| c.is_ascii_digit();
        assert_eq!(apply_key(&mut line, &key(KeyCode::Char('2')), digits), Edit::Changed);
        assert_eq!(apply_key(&mut line, &key(KeyCode::Char('x')), digits), Edit::Ignored);
        assert_eq!(line, "12");
        assert_eq!(apply_key(&mut line, &key(KeyCode::Backspace), digits), Edit::Changed);
        assert_eq!(line, "1");
        assert_eq!(apply_key(&mut line, &key(KeyCode::Enter), digits), Edit::Accept);
    }

    #[test]
    fn control_keys() {
        let mut line = String::from("abc");
        let any = |_: char| true;
        assert_eq!(apply_key(&mut line, &ctrl('u'), any), Edit::Changed);
        assert!(line.is_empty());
        assert_eq!(apply_key(&mut line, &key(KeyCode::Backspace), any), Edit::Ignored);
        assert_eq!(apply_key(&mut line, &ctrl('q'), any), Edit::Cancel);
        assert_eq!(apply_key(&mut line, &key(KeyCode::Esc), any), Edit::Cancel);
        assert_eq!(apply_key(&mut line, &ctrl('c'), any), Edit::Quit);
    }

    #[test]
    fn yes_no_keys() {
        assert_eq!(yes_no(&key(KeyCode::Char('y')), false), Some(Answer::Yes));
        assert_eq!(yes_no(&key(KeyCode::Char('s')), false), Some(Answer::Yes));
        assert_eq!(yes_no(&key(KeyCode::Char('N')), true), Some(Answer::No));
        assert_eq!(yes_no(&key(KeyCode::Enter), true), Some(Answer::Yes));
        assert_eq!(yes_no(&key(KeyCode::Enter), false), Some(Answer::No));
        assert_eq!(yes_no(&key(KeyCode::Esc), true), Some(Answer::Cancel));
        assert_eq!(yes_no(&ctrl('c'), true), Some(Answer::Quit));
        assert_eq!(yes_no(&ctrl('s'), false), Some(Answer::Yes));
        assert_eq!(yes_no(&key(KeyCode::Char('x')), true), None);
    }

    #[test]
    fn prompts_cancel_without_raw_mode() {
        let unavailable = io::Error::other("not a terminal");
        assert!(prompt_guard(Err(unavailable)).is_none());
    }
}
