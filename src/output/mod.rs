//! Delivery of a finished password to the clipboard or a file.
//!
//! Sinks never fail loudly: a delivery that does not go through returns
//! `false` and logs a warning, so callers can fall back without unwinding.

mod clipboard;
mod file;

pub use clipboard::ClipboardSink;
pub use file::FileSink;

pub trait OutputSink {
    /// Short human-readable destination, for status messages.
    fn name(&self) -> &str;

    /// Hand over `password`. Returns whether it arrived.
    fn deliver(&mut self, password: &str) -> bool;
}
