mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use anyhow::Result;

pub use context::Context;
pub use flags::CliFlags;

pub fn run(flags: CliFlags) -> Result<ExitCode> {
    Context::new(flags).run()
}
