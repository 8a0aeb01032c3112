use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Send logs to stderr so stdout carries only the password output.
/// `RUST_LOG` takes precedence over the `-v` count.
pub fn init(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("passgen={level}")))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}
