//! Output destination of the `scan` command.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

/// `stdout`, `stderr`, or any other value as a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl From<String> for OutputTarget {
    fn from(value: String) -> Self {
        match value.as_str() {
            "stdout" => OutputTarget::Stdout,
            "stderr" => OutputTarget::Stderr,
            _ => OutputTarget::File(PathBuf::from(value)),
        }
    }
}

impl OutputTarget {
    /// Open the sink. A file is created (or truncated) before anything is scanned.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        Ok(match self {
            OutputTarget::Stdout => Box::new(BufWriter::new(io::stdout().lock())),
            OutputTarget::Stderr => Box::new(io::stderr().lock()),
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
        })
    }
}
