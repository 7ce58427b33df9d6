//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_context;
pub mod log_level;
pub mod logger;
pub mod sink;

pub use config::{LoggerConfig, LoggerKind};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, Fields};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use sink::{LogSink, SharedBuffer};
