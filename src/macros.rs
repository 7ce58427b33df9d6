//! Logging macros for ergonomic call sites.
//!
//! The plain macros (`debug!`, `info!`, `warn!`, `error!`) concatenate their
//! values with no separator. The `f`-suffixed macros take a format string,
//! similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use rust_logger_shim::prelude::*;
//! use rust_logger_shim::{fields, info, infof};
//!
//! let logger = NullLogger::new();
//!
//! // Concatenated values
//! info!(logger, "Server started on port ", 8080);
//!
//! // With format arguments
//! let user_id = 42;
//! infof!(logger, "User {} performed action: {}", user_id, "login");
//!
//! // With fields
//! let scoped = logger.with_fields(fields! { "user_id" => user_id, "role" => "admin" });
//! info!(scoped, "permissions loaded");
//! ```

/// Log concatenated values at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_shim::prelude::*;
/// # let logger = NullLogger::new();
/// use rust_logger_shim::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: ", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {
        $crate::Logger::log(
            &$logger,
            $level,
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_shim::prelude::*;
/// # let logger = NullLogger::new();
/// use rust_logger_shim::logf;
/// logf!(logger, LogLevel::Warn, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::Logger::logf(&$logger, $level, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message from concatenated values.
///
/// # Examples
///
/// ```
/// # use rust_logger_shim::prelude::*;
/// # let logger = NullLogger::new();
/// use rust_logger_shim::debug;
/// debug!(logger, "hi there ", "you");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $value)*)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $value)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn $(, $value)*)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $value)*)
    };
}

/// Log a formatted debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_shim::prelude::*;
/// # let logger = NullLogger::new();
/// use rust_logger_shim::debugf;
/// debugf!(logger, "hi there {}", "you");
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Build a [`Fields`](crate::Fields) map from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_logger_shim::fields;
///
/// let fields = fields! { "foo" => "bar", "baz" => 2 };
/// assert_eq!(fields.len(), 2);
/// assert!(fields! {}.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(fields.insert($key, $value);)+
        fields
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, LogSink, Logger, SharedBuffer};
    use crate::loggers::ConsoleLogger;

    fn capture() -> (ConsoleLogger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        (ConsoleLogger::new(LogSink::new(buffer.clone())), buffer)
    }

    #[test]
    fn test_log_macro() {
        let (logger, buffer) = capture();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Count: ", 42);
        assert_eq!(buffer.contents(), "[INFO] Test message\n[INFO] Count: 42\n");
    }

    #[test]
    fn test_logf_macro() {
        let (logger, buffer) = capture();
        logf!(logger, LogLevel::Error, "Code: {}", 500);
        assert_eq!(buffer.contents(), "[ERROR] Code: 500\n");
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = capture();
        debug!(logger, "d", 1);
        info!(logger, "i", 2);
        warn!(logger, "w", 3);
        error!(logger, "e", 4);
        assert_eq!(
            buffer.contents(),
            "[DEBUG] d1\n[INFO] i2\n[WARN] w3\n[ERROR] e4\n"
        );
    }

    #[test]
    fn test_formatted_level_macros() {
        let (logger, buffer) = capture();
        debugf!(logger, "{}-{}", "a", 1);
        infof!(logger, "{:03}", 7);
        warnf!(logger, "plain");
        errorf!(logger, "{name}", name = "named");
        assert_eq!(
            buffer.contents(),
            "[DEBUG] a-1\n[INFO] 007\n[WARN] plain\n[ERROR] named\n"
        );
    }

    #[test]
    fn test_macros_accept_trait_objects() {
        let (logger, buffer) = capture();
        let boxed: Box<dyn Logger> = logger.with_fields(fields! { "k" => "v" });
        let borrowed: &dyn Logger = &*boxed;

        info!(boxed, "boxed");
        infof!(borrowed, "borrowed {}", 1);
        assert_eq!(buffer.contents(), "[INFO] boxed k=v\n[INFO] borrowed 1 k=v\n");
    }

    #[test]
    fn test_fields_macro() {
        let fields = fields! { "a" => 1, "b" => "two", "c" => true, };
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("b"), Some(&crate::FieldValue::from("two")));
        assert!(fields! {}.is_empty());
    }
}
