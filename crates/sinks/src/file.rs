//! File sink - buffered trace file for offline visualization

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::SinkError;
use crate::sink::TraceSink;

/// Sink appending formatted lines to a file
///
/// The file is created (truncating any previous run) at construction;
/// `close` flushes the buffer and releases the handle.
pub struct FileSink {
    /// `None` once closed
    writer: Option<BufWriter<File>>,

    /// Path, kept for diagnostics
    path: PathBuf,
}

impl FileSink {
    /// Open the trace file
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Open`] when the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .map_err(|e| SinkError::open(path.display().to_string(), e))?;

        tracing::debug!(path = %path.display(), "trace file opened");
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            path,
        })
    }

    /// Path this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TraceSink for FileSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;
