//! In-memory sink for tests

use super::LogSink;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Buffer collecting every diagnostic written to its sinks
///
/// # Example
/// ```
/// use argcursor::{ArgCursor, sink::MemoryLog};
///
/// let log = MemoryLog::new();
/// let mut cursor = ArgCursor::new(["prog", "abc"]);
/// cursor.set_log(log.sink());
///
/// let mut value = 7_i32;
/// cursor.extract(&mut value).unwrap();
///
/// assert_eq!(value, 7);
/// assert_eq!(log.contents(), "Error: could not parse abc.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    buffer: Arc<Mutex<Vec<u8>>>,
}

struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl MemoryLog {
    /// Create an empty buffer
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink handle appending to this buffer
    #[must_use]
    pub fn sink(&self) -> LogSink {
        LogSink::from_writer(MemoryWriter {
            buffer: Arc::clone(&self.buffer),
        })
    }

    /// Everything written so far
    #[must_use]
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Written text split into lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Whether nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
