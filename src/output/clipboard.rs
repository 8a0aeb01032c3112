use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, warn};
use zeroize::Zeroize;

use super::OutputSink;

/// System clipboard. Created even when no clipboard is reachable, in which
/// case every delivery reports `false`.
pub struct ClipboardSink {
    ctx: Option<ClipboardContext>,
}

impl ClipboardSink {
    pub fn new() -> Self {
        let ctx = match ClipboardContext::new() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                warn!(error = %e, "clipboard unavailable");
                None
            }
        };
        Self { ctx }
    }

    pub fn is_available(&self) -> bool {
        self.ctx.is_some()
    }
}

impl Default for ClipboardSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ClipboardSink {
    fn name(&self) -> &str {
        "clipboard"
    }

    fn deliver(&mut self, password: &str) -> bool {
        let Some(ctx) = self.ctx.as_mut() else {
            return false;
        };

        // `set_contents` takes the copy by value; the backend owns it from here.
        match ctx.set_contents(password.to_owned()) {
            Ok(()) => {
                // Some backends only commit on read; wipe the copy we get back.
                if let Ok(mut echoed) = ctx.get_contents() {
                    echoed.zeroize();
                }
                debug!("password copied to clipboard");
                true
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                false
            }
        }
    }
}
