//! No-op logger

use crate::core::{Fields, LogLevel, Logger};
use std::fmt::{self, Display};

/// Logger that discards everything
///
/// Use it to silence a library without branching at every call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLogger;

impl NullLogger {
    pub const fn new() -> Self {
        NullLogger
    }
}

impl Logger for NullLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _values: &[&dyn Display]) {}

    #[inline]
    fn logf(&self, _level: LogLevel, _args: fmt::Arguments<'_>) {}

    fn with_fields(&self, _fields: Fields) -> Box<dyn Logger> {
        Box::new(*self)
    }
}
