//! Log sink abstraction for argument diagnostics
//!
//! Content errors (unparseable tokens, out-of-range values) are never raised;
//! they are written as lines of text to a `LogSink`. The sink is a cloneable
//! handle, so a cursor and the cursors sliced from it report to the same
//! destination.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

pub mod memory;
pub mod stream;

pub use memory::MemoryLog;

/// Shared handle to a writable text stream
///
/// # Implementations
/// - `LogSink::stderr()`: default destination, the process standard error
/// - `LogSink::to_file()` / `LogSink::from_writer()`: any `Write` destination
/// - `MemoryLog::sink()`: in-memory buffer for tests
#[derive(Clone)]
pub struct LogSink {
    writer: Arc<Mutex<dyn Write + Send>>,
}

impl LogSink {
    /// Wrap an arbitrary writer
    #[must_use]
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Write one newline-terminated diagnostic
    ///
    /// Write failures are reported through tracing and otherwise ignored:
    /// diagnostics must never turn into structural errors.
    pub fn line(&self, args: fmt::Arguments<'_>) {
        let mut text = args.to_string();
        debug!(diagnostic = %text, "argument diagnostic");
        text.push('\n');

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
            warn!("Failed to write argument diagnostic: {}", err);
        }
    }

    /// Whether both handles point at the same destination
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("writer", &Arc::as_ptr(&self.writer).cast::<()>())
            .finish()
    }
}
