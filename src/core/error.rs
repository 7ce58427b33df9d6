//! Error types for the logger shim

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from the underlying sink
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("ConsoleLogger", "bad timestamp");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::other("something broke");
        assert!(matches!(err, LoggerError::Other(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("LoggerKind", "unknown kind 'syslog'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerKind: unknown kind 'syslog'"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
