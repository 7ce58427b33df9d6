//! The `Logger` capability set
//!
//! Library code logs through `&dyn Logger` (or a generic `L: Logger`) and
//! never names a concrete backend. Two implementations ship with the crate:
//! [`ConsoleLogger`](crate::loggers::ConsoleLogger) and
//! [`NullLogger`](crate::loggers::NullLogger).

use super::{log_context::Fields, log_level::LogLevel};
use std::fmt::{self, Display};
use std::sync::Arc;

/// Leveled logging interface with an immutable field context
///
/// Implementors provide [`log`](Logger::log), [`logf`](Logger::logf) and
/// [`with_fields`](Logger::with_fields); the per-level methods forward to
/// them.
///
/// # Example
///
/// ```
/// use rust_logger_shim::prelude::*;
///
/// fn connect(logger: &dyn Logger, host: &str) {
///     let logger = logger.with_fields(Fields::new().with_field("host", host));
///     logger.info(&[&"connecting to ", &host]);
///     logger.debugf(format_args!("retry budget {}", 3));
/// }
///
/// connect(&NullLogger::new(), "db.internal");
/// ```
pub trait Logger: Send + Sync {
    /// Emit the concatenation of `values` at `level`, with no separator
    fn log(&self, level: LogLevel, values: &[&dyn Display]);

    /// Emit pre-formatted arguments at `level`
    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>);

    /// Derive a logger whose fields are this logger's fields plus `fields`
    ///
    /// Keys in `fields` replace same-named existing keys. The receiver is
    /// never modified.
    fn with_fields(&self, fields: Fields) -> Box<dyn Logger>;

    #[inline]
    fn debug(&self, values: &[&dyn Display]) {
        self.log(LogLevel::Debug, values);
    }

    #[inline]
    fn info(&self, values: &[&dyn Display]) {
        self.log(LogLevel::Info, values);
    }

    #[inline]
    fn warn(&self, values: &[&dyn Display]) {
        self.log(LogLevel::Warn, values);
    }

    #[inline]
    fn error(&self, values: &[&dyn Display]) {
        self.log(LogLevel::Error, values);
    }

    #[inline]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Debug, args);
    }

    #[inline]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    #[inline]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Warn, args);
    }

    #[inline]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }
}

/// Concatenate the `Display` output of each value with no separator
pub fn concat(values: &[&dyn Display]) -> String {
    use fmt::Write;

    let mut out = String::new();
    for value in values {
        // Writing into a String only fails if a Display impl reports an error
        let _ = write!(out, "{}", value);
    }
    out
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: LogLevel, values: &[&dyn Display]) {
        (**self).log(level, values);
    }

    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        (**self).logf(level, args);
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        (**self).with_fields(fields)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: LogLevel, values: &[&dyn Display]) {
        (**self).log(level, values);
    }

    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        (**self).logf(level, args);
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        (**self).with_fields(fields)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: LogLevel, values: &[&dyn Display]) {
        (**self).log(level, values);
    }

    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        (**self).logf(level, args);
    }

    fn with_fields(&self, fields: Fields) -> Box<dyn Logger> {
        (**self).with_fields(fields)
    }
}
