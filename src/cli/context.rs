//! CLI context - bundles settings and flags for one run.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use tracing::info;

use passgen::{ClipboardSink, CryptoSource, FileSink, Generated, OutputSink, generate};
use passgen::rng::SYSTEM_SOURCE;

use super::{CliFlags, prompts, quiet};
use crate::settings::Settings;
use crate::terminal::print_result;

/// Exit status for a request the generator rejected.
pub const EXIT_INVALID_REQUEST: u8 = 2;

/// Exit status when the password reached no destination.
pub const EXIT_NOT_DELIVERED: u8 = 3;

const DEFAULT_OUTPUT_FILE: &str = "passwords.txt";

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e:#}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };
        Self { settings, flags }
    }

    pub fn run(&mut self) -> Result<ExitCode> {
        quiet::set(self.flags.quiet);
        self.apply_flags();

        if self.flags.save {
            let path = self.settings.save_to_file().context("saving settings")?;
            prompts::settings_saved(&path);
        }

        let request = self.settings.request();
        let generated = match generate(&request, &mut CryptoSource::system()) {
            Ok(generated) => generated,
            Err(e) => {
                prompts::error(&format!("Error: {e}"));
                return Ok(ExitCode::from(EXIT_INVALID_REQUEST));
            }
        };
        info!(
            length = request.length,
            bits = generated.entropy_bits(),
            strength = %generated.strength(),
            "password generated"
        );

        if self.deliver(&generated) {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::from(EXIT_NOT_DELIVERED))
        }
    }

    /// Apply CLI flags on top of the starting settings.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(length) = flags.length {
            settings.pass_length = length;
        }
        if flags.no_upper {
            settings.uppercase = false;
        }
        if flags.no_lower {
            settings.lowercase = false;
        }
        if flags.no_digits {
            settings.digits = false;
        }
        if flags.no_special {
            settings.special = false;
        }
        if flags.avoid_ambiguous {
            settings.avoid_ambiguous = true;
        }
        if flags.clipboard {
            settings.to_clipboard = true;
        }
        if let Some(ref path) = flags.output {
            settings.output_file_path = Some(resolve_output_path(path));
        }
    }

    /// Send the password to every chosen destination. Returns whether at
    /// least one of them received it.
    fn deliver(&self, generated: &Generated) -> bool {
        let mut delivered = false;
        let mut print = !self.settings.to_clipboard && self.settings.output_file_path.is_none();

        if self.settings.to_clipboard {
            let mut clipboard = ClipboardSink::new();
            if clipboard.deliver(generated.password()) {
                prompts::clipboard_copied();
                delivered = true;
            } else if prompts::clipboard_fallback_prompt() {
                print = true;
            }
        }

        if let Some(ref path) = self.settings.output_file_path {
            let mut file = FileSink::new(path);
            if file.deliver(generated.password()) {
                prompts::password_written(file.path());
                delivered = true;
            } else {
                prompts::file_write_failed(file.path());
            }
        }

        if print {
            if quiet::enabled() {
                println!("{}", generated.password());
            } else {
                print_result(generated, SYSTEM_SOURCE);
            }
            delivered = true;
        }

        if !delivered {
            prompts::password_discarded();
        }
        delivered
    }
}

/// `.` or a trailing slash means a directory: write `passwords.txt` inside it.
fn resolve_output_path(path: &Path) -> PathBuf {
    let raw = path.as_os_str().to_string_lossy();
    if raw == "." || raw.ends_with('/') || path.is_dir() {
        path.join(DEFAULT_OUTPUT_FILE)
    } else {
        path.to_path_buf()
    }
}
