use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;

use passgen::rng::SYSTEM_SOURCE;
use passgen::{Category, ClipboardSink, CryptoSource, FileSink, Generated, OutputSink, generate};

use super::{get_editable_input, get_numeric_input, get_yes_no};
use crate::settings::Settings;
use crate::terminal::{
    RawModeGuard, box_bottom, box_line, box_top, clear, print_error, print_result,
    reset_terminal,
};

const DEFAULT_OUTPUT_FILE: &str = "passwords.txt";

fn print_banner() {
    box_top("passgen");
    box_line("Secure password generator");
    box_line("Esc cancels a prompt • Ctrl+C quits");
    box_bottom();
    println!();
}

/// Collect length and composition, starting from `defaults`.
/// `None` when the user cancels.
fn ask_options(defaults: &Settings) -> Option<Settings> {
    let mut settings = defaults.clone();

    settings.pass_length = loop {
        match get_numeric_input("Length", settings.pass_length)? {
            0 => print_error("Enter a whole number greater than 0."),
            n => break n,
        }
    };

    for category in Category::ALL {
        let prompt = format!("Include {}?", category.label().to_lowercase());
        let enabled = get_yes_no(&prompt, settings.category_enabled(category))?;
        settings.set_category(category, enabled);
    }

    settings.avoid_ambiguous =
        get_yes_no("Avoid ambiguous characters (I l 1 O 0 o)?", settings.avoid_ambiguous)?;

    Some(settings)
}

/// Offer clipboard and file delivery for a generated password.
fn offer_outputs(generated: &Generated, settings: &Settings) {
    let mut clipboard = ClipboardSink::new();
    if clipboard.is_available() {
        if get_yes_no("Copy to clipboard?", settings.to_clipboard) == Some(true) {
            if clipboard.deliver(generated.password()) {
                println!("Copied to clipboard.");
            } else {
                print_error("Could not copy to clipboard.");
            }
        }
    } else {
        println!("(clipboard not available)");
    }

    let wants_file = settings.output_file_path.is_some();
    if get_yes_no("Save to a file?", wants_file) != Some(true) {
        return;
    }

    let default_name = settings
        .output_file_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
    let Some(name) = get_editable_input("File name", &default_name.to_string_lossy()) else {
        return;
    };
    let name = name.trim();
    if name.is_empty() {
        print_error("No file name given.");
        return;
    }

    let mut file = FileSink::new(name);
    if file.deliver(generated.password()) {
        println!("Saved to {}.", file.name());
    } else {
        print_error(&format!("Could not write {}.", file.name()));
    }
}

/// Interactive prompt loop: ask, generate, show, deliver, repeat.
pub fn run() -> Result<ExitCode> {
    if let Err(e) = RawModeGuard::new() {
        print_error(&format!("Interactive mode needs a terminal: {e}"));
        return Ok(ExitCode::FAILURE);
    }
    reset_terminal();
    clear();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        print_error(&format!("Error loading settings: {e:#}"));
        Settings::default()
    });

    print_banner();

    loop {
        let Some(chosen) = ask_options(&settings) else {
            break;
        };
        settings = chosen;

        match generate(&settings.request(), &mut CryptoSource::system()) {
            Ok(generated) => {
                info!(
                    length = settings.pass_length,
                    bits = generated.entropy_bits(),
                    "password generated"
                );
                println!();
                print_result(&generated, SYSTEM_SOURCE);
                offer_outputs(&generated, &settings);
            }
            Err(e) => {
                print_error(&format!("Error: {e}"));
                if get_yes_no("Try again with other options?", true) != Some(true) {
                    break;
                }
                println!();
                continue;
            }
        }

        println!();
        if get_yes_no("Generate another password?", true) != Some(true) {
            break;
        }
        println!();
    }

    reset_terminal();
    println!("Goodbye.");
    Ok(ExitCode::SUCCESS)
}
