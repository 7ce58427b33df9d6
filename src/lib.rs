//! # Rust Logger Shim
//!
//! A minimal logging abstraction that lets a library emit leveled,
//! optionally structured log lines without tying its consumers to a
//! specific logging backend.
//!
//! ## Features
//!
//! - **One Interface**: the [`Logger`] trait with four levels, plain and formatted
//! - **Console Logger**: `[LEVEL] message key=value` lines to an injected sink
//! - **Null Logger**: silences everything without changing call sites
//! - **Field Context**: `with_fields` derives new loggers, never mutating the parent
//!
//! ```
//! use rust_logger_shim::prelude::*;
//! use rust_logger_shim::{debug, debugf, fields};
//!
//! let buffer = SharedBuffer::new();
//! let logger = ConsoleLogger::new(LogSink::new(buffer.clone()));
//!
//! debug!(logger, "hi there ", "you");
//! debugf!(logger, "hi there {}", "you");
//! logger.with_fields(fields! { "attempt" => 2 }).warn(&[&"retrying"]);
//!
//! assert_eq!(
//!     buffer.contents(),
//!     "[DEBUG] hi there you\n[DEBUG] hi there you\n[WARN] retrying attempt=2\n"
//! );
//! ```

pub mod core;
pub mod loggers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        FieldValue, Fields, LogLevel, LogSink, Logger, LoggerConfig, LoggerError, LoggerKind,
        Result, SharedBuffer,
    };
    pub use crate::loggers::{ConsoleLogger, NullLogger};
}

pub use crate::core::{
    FieldValue, Fields, LogLevel, LogSink, Logger, LoggerConfig, LoggerError, LoggerKind, Result,
    SharedBuffer,
};
pub use loggers::{ConsoleLogger, NullLogger};

/// Boxed console logger writing to standard error
pub fn console() -> Box<dyn Logger> {
    Box::new(ConsoleLogger::stderr())
}

/// Boxed logger that discards everything
pub fn null() -> Box<dyn Logger> {
    Box::new(NullLogger::new())
}
