//! In-memory capture of tracing output.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Records every tracing event emitted on the current thread as JSON while alive.
///
/// Use with `#[tokio::test]` (current-thread runtime) so the code under test runs on
/// the thread that owns the capture.
pub struct LogCapture {
    buffer: SharedBuffer,
    _guard: DefaultGuard,
}

impl LogCapture {
    pub fn start() -> Self {
        let buffer = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(buffer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        Self {
            buffer,
            _guard: guard,
        }
    }

    /// Every captured event, oldest first.
    pub fn events(&self) -> Vec<Value> {
        let bytes = self
            .buffer
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// Events whose `operation` field equals `operation`.
    pub fn events_for(&self, operation: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|event| event["fields"]["operation"] == operation)
            .collect()
    }

    /// Messages of the events for `operation`, in order.
    pub fn messages_for(&self, operation: &str) -> Vec<String> {
        self.events_for(operation)
            .iter()
            .filter_map(|event| event["fields"]["message"].as_str().map(str::to_owned))
            .collect()
    }
}
