use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::OutputSink;

/// Appends each password as one line of a text file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    name: String,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, password: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut line = Zeroizing::new(Vec::with_capacity(password.len() + 1));
        line.extend_from_slice(password.as_bytes());
        line.push(b'\n');
        file.write_all(&line)?;
        file.flush()
    }
}

impl OutputSink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn deliver(&mut self, password: &str) -> bool {
        match self.append(password) {
            Ok(()) => {
                debug!(path = %self.path.display(), "password appended");
                true
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not write password file");
                false
            }
        }
    }
}
