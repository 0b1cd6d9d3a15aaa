//! Sinks backed by real process streams and files

use super::LogSink;
use std::fs::File;
use std::io;
use std::path::Path;

impl LogSink {
    /// Sink writing to the process standard error
    #[must_use]
    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }

    /// Sink writing to a newly created (or truncated) file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created
    pub fn to_file(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(file))
    }
}
