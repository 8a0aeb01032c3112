use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod exits;
mod logging;
mod settings;
mod terminal;
mod tui;

use cli::{CliFlags, quiet};

fn main() -> Result<ExitCode> {
    exits::install_handlers();

    let interactive_default = std::env::args_os().len() == 1 && quiet::is_interactive();
    let flags = CliFlags::parse();
    logging::init(flags.verbose)?;

    if flags.interactive || interactive_default {
        tui::run()
    } else {
        cli::run(flags)
    }
}
