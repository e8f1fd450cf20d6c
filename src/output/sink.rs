//! Route command output: stdout mirror plus the routes file.

use crate::error::{Result, RoutesError};
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes each route line to `out`, then appends it to the routes file.
pub struct RouteSink<O: Write, F: Write = File> {
    out: O,
    file: F,
    path: PathBuf,
}

impl<O: Write> RouteSink<O, File> {
    /// Create (or truncate) `path` and mirror lines to `out`.
    pub fn create(path: &Path, out: O) -> Result<Self> {
        let file = File::create(path).map_err(|source| RoutesError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Writing routes to {}", path.display());
        Ok(RouteSink::new(out, file, path))
    }
}

impl<O: Write, F: Write> RouteSink<O, F> {
    pub fn new(out: O, file: F, path: &Path) -> Self {
        RouteSink {
            out,
            file,
            path: path.to_path_buf(),
        }
    }

    /// Emit one line. A stdout failure is only logged; a file failure is
    /// returned so the caller can skip the line and carry on.
    pub fn emit(&mut self, line: &str) -> Result<()> {
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("{} to print '{line}': {e}", "failed".on_red());
        }

        self.file
            .write_all(format!("{line}\n").as_bytes())
            .map_err(|source| RoutesError::OutputWrite {
                path: self.path.clone(),
                line: line.to_string(),
                source,
            })
    }

    /// Flush both writers. Errors are logged, the sink is consumed either way.
    pub fn finish(mut self) {
        if let Err(e) = self.out.flush() {
            log::warn!("Failed to flush stdout: {e}");
        }
        if let Err(e) = self.file.flush() {
            log::error!("Failed to close {}: {e}", self.path.display());
        }
    }
}
