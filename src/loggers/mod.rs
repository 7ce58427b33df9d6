//! Logger implementations

pub mod console;
pub mod null;

pub use console::ConsoleLogger;
pub use null::NullLogger;

pub use crate::core::Logger;
