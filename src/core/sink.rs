//! Shared output sink for rendered log lines
//!
//! A `LogSink` is a cloneable handle around one writer. Every clone writes
//! to the same destination, so a root logger and all loggers derived from
//! it share their output stream. Each line is written under the sink's lock
//! in a single `write_all`, which keeps lines from concurrent threads whole.

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Clone)]
pub struct LogSink {
    writer: SharedWriter,
    /// Number of lines the writer refused
    failed_writes: Arc<AtomicU64>,
}

impl LogSink {
    /// Wrap any writer as a shared sink
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_shim::{LogSink, SharedBuffer};
    ///
    /// let buffer = SharedBuffer::new();
    /// let sink = LogSink::new(buffer.clone());
    /// sink.write_line("[INFO] ready").unwrap();
    /// assert_eq!(buffer.contents(), "[INFO] ready\n");
    /// ```
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            failed_writes: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Sink bound to the process's standard error stream
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Sink bound to the process's standard output stream
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Append a newline to `line`, write it in one call and flush
    pub fn write_line(&self, line: impl Into<String>) -> Result<()> {
        let mut line = line.into();
        line.push('\n');

        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Record a line the writer refused
    pub(crate) fn record_failure(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Get the number of lines that failed to reach the writer
    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Check whether two handles point at the same writer
    pub fn same_sink(&self, other: &LogSink) -> bool {
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
            .field("failed_writes", &self.failed_writes())
            .finish_non_exhaustive()
    }
}

/// In-memory writer whose clones share one buffer
///
/// Handy for capturing a logger's output in tests.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Return everything written so far and clear the buffer
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Counts `write` calls and accepts every byte offered
    pub(crate) struct CountingWriter {
        pub(crate) writes: Arc<AtomicU64>,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.fetch_add(1, Ordering::Relaxed);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line_appends_newline() {
        let buffer = SharedBuffer::new();
        let sink = LogSink::new(buffer.clone());

        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        assert_eq!(buffer.contents(), "first\nsecond\n");
    }

    #[test]
    fn test_one_write_per_line() {
        let writes = Arc::new(AtomicU64::new(0));
        let sink = LogSink::new(CountingWriter {
            writes: Arc::clone(&writes),
        });

        sink.write_line("a").unwrap();
        sink.write_line(String::from("b")).unwrap();

        assert_eq!(writes.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_clones_share_writer() {
        let buffer = SharedBuffer::new();
        let sink = LogSink::new(buffer.clone());
        let clone = sink.clone();

        clone.write_line("from clone").unwrap();

        assert!(sink.same_sink(&clone));
        assert!(!sink.same_sink(&LogSink::new(SharedBuffer::new())));
        assert_eq!(buffer.contents(), "from clone\n");
    }

    #[test]
    fn test_write_error_is_returned() {
        let sink = LogSink::new(BrokenWriter);
        let err = sink.write_line("lost").unwrap_err();
        assert!(matches!(err, crate::core::LoggerError::IoError(_)));
    }

    #[test]
    fn test_failure_counter() {
        let sink = LogSink::new(BrokenWriter);
        assert_eq!(sink.failed_writes(), 0);
        sink.record_failure();
        sink.clone().record_failure();
        assert_eq!(sink.failed_writes(), 2);
    }

    #[test]
    fn test_buffer_take_clears() {
        let buffer = SharedBuffer::new();
        let sink = LogSink::new(buffer.clone());
        sink.write_line("once").unwrap();

        assert_eq!(buffer.take(), "once\n");
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }
}
