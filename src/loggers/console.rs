//! Console logger implementation

use crate::core::{Fields, LogLevel, LogSink, Logger, LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::Utc;
#[cfg(feature = "colors")]
use colored::Colorize;
use std::fmt::{self, Display, Write};

/// Logger that renders `[LEVEL] message key=value ...` lines to a sink
///
/// Clones share the sink. Fields are fixed at construction;
/// [`with_fields`](Logger::with_fields) builds a new logger instead of
/// touching this one.
///
/// # Example
///
/// ```
/// use rust_logger_shim::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = ConsoleLogger::new(LogSink::new(buffer.clone()));
///
/// logger
///     .with_fields(Fields::new().with_field("request_id", "abc-123"))
///     .info(&[&"served ", &200]);
///
/// assert_eq!(buffer.contents(), "[INFO] served 200 request_id=abc-123\n");
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    sink: LogSink,
    fields: Fields,
    timestamp: Option<String>,
    colors: bool,
}

impl ConsoleLogger {
    pub fn new(sink: LogSink) -> Self {
        Self {
            sink,
            fields: Fields::new(),
            timestamp: None,
            colors: false,
        }
    }

    /// Console logger bound to the process's standard error stream
    pub fn stderr() -> Self {
        Self::new(LogSink::stderr())
    }

    /// Prefix every line with the current UTC time in a strftime format
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] if `format` contains an
    /// unknown or malformed specifier.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_shim::ConsoleLogger;
    ///
    /// let _logger = ConsoleLogger::stderr().with_timestamp("%Y/%m/%d %H:%M:%S").unwrap();
    /// assert!(ConsoleLogger::stderr().with_timestamp("%Q").is_err());
    /// ```
    pub fn with_timestamp(mut self, format: &str) -> Result<Self> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "ConsoleLogger",
                format!("invalid timestamp format '{}'", format),
            ));
        }
        self.timestamp = Some(format.to_string());
        Ok(self)
    }

    /// Color the level tag
    ///
    /// Whether escapes are emitted is decided by `colored`'s process-wide
    /// switch (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`, or
    /// `colored::control::set_override`), not by the sink. Enabling colors
    /// on a file sink can write ANSI escapes into the file, and the switch
    /// can suppress them on a terminal sink.
    #[cfg(feature = "colors")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.colors = use_colors;
        self
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    /// Concrete-typed counterpart of [`Logger::with_fields`]
    #[must_use]
    pub fn derive(&self, fields: &Fields) -> ConsoleLogger {
        ConsoleLogger {
            sink: self.sink.clone(),
            fields: self.fields.merged(fields),
            timestamp: self.timestamp.clone(),
            colors: self.colors,
        }
    }

    /// Render one line without the trailing newline
    fn format_line(&self, level: LogLevel, body: &str) -> String {
        let mut line = String::with_capacity(body.len() + 32);

        if let Some(ref format) = self.timestamp {
            // Formats are validated in with_timestamp
            let _ = write!(line, "{} ", Utc::now().format(format));
        }

        self.write_tag(&mut line, level);
        line.push(' ');
        line.push_str(body);

        if !self.fields.is_empty() {
            line.push(' ');
            line.push_str(&self.fields.format_fields());
        }

        line
    }

    #[cfg(feature = "colors")]
    fn write_tag(&self, line: &mut String, level: LogLevel) {
        if self.colors {
            let _ = write!(line, "{}", level.tag().color(level.color_code()));
        } else {
            line.push_str(level.tag());
        }
    }

    #[cfg(not(feature = "colors"))]
    fn write_tag(&self, line: &mut String, level: LogLevel) {
        line.push_str(level.tag());
    }

    fn emit(&self, line: String) {
        if self.sink.write_line(line).is_err() {
            self.sink.record_failure();
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, values: &[&dyn Display]) {
        let body = crate::core::logger::concat(values);
        self.emit(self.format_line(level, &body));
    }

    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let mut body = String::new();
        // A Display impl reporting an error truncates the body instead of panicking
        let _ = body.write_fmt(args);
        self.emit(self.format_line(level, &body));
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        Box::new(self.derive(&fields))
    }
}
