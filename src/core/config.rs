//! Logger selection and construction settings
//!
//! The only decision a consumer makes is which implementation to use.
//! `LoggerConfig` carries that choice plus the console logger's optional
//! presentation settings, and deserializes from any serde format.

use super::{
    error::{LoggerError, Result},
    logger::Logger,
    sink::LogSink,
};
use crate::loggers::{ConsoleLogger, NullLogger};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which `Logger` implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerKind {
    /// Write lines to the sink
    #[default]
    #[serde(alias = "simple", alias = "stderr")]
    Console,
    /// Discard everything
    #[serde(alias = "noop", alias = "none", alias = "off")]
    Null,
}

impl LoggerKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            LoggerKind::Console => "console",
            LoggerKind::Null => "null",
        }
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LoggerKind {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "console" | "simple" | "stderr" => Ok(LoggerKind::Console),
            "null" | "noop" | "none" | "off" => Ok(LoggerKind::Null),
            _ => Err(LoggerError::config(
                "LoggerKind",
                format!("unknown logger kind '{}'", s),
            )),
        }
    }
}

/// Settings for building a logger
///
/// # Example
///
/// ```
/// use rust_logger_shim::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = LoggerConfig::console().build(LogSink::new(buffer.clone())).unwrap();
/// logger.info(&[&"started"]);
/// assert_eq!(buffer.contents(), "[INFO] started\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub kind: LoggerKind,
    /// strftime format for a timestamp prefix; no prefix when unset
    pub timestamp: Option<String>,
    /// Color the level tag (requires the `colors` feature)
    pub colors: bool,
}

impl LoggerConfig {
    pub fn console() -> Self {
        Self::default()
    }

    pub fn null() -> Self {
        Self {
            kind: LoggerKind::Null,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, format: impl Into<String>) -> Self {
        self.timestamp = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Build the selected logger, writing to `sink` when it is a console logger
    pub fn build(&self, sink: LogSink) -> Result<Box<dyn Logger>> {
        match self.kind {
            LoggerKind::Null => Ok(Box::new(NullLogger::new())),
            LoggerKind::Console => {
                let mut logger = ConsoleLogger::new(sink);
                if let Some(ref format) = self.timestamp {
                    logger = logger.with_timestamp(format.as_str())?;
                }
                if self.colors {
                    logger = Self::apply_colors(logger)?;
                }
                Ok(Box::new(logger))
            }
        }
    }

    #[cfg(feature = "colors")]
    fn apply_colors(logger: ConsoleLogger) -> Result<ConsoleLogger> {
        Ok(logger.with_colors(true))
    }

    #[cfg(not(feature = "colors"))]
    fn apply_colors(_logger: ConsoleLogger) -> Result<ConsoleLogger> {
        Err(LoggerError::config(
            "LoggerConfig",
            "colors requested but the `colors` feature is disabled",
        ))
    }
}
