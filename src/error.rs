//! Error handling for domain-scout

use thiserror::Error;

/// Main error type for domain-scout
#[derive(Error, Debug, Clone)]
pub enum DomainScoutError {
    #[error("Invalid domain format: '{input}'")]
    InvalidFormat { input: String },

    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    #[error("Backend error ({endpoint}): {message}")]
    Backend {
        endpoint: String,
        message: String,
        status_code: Option<u16>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainScoutError {
    /// Create an invalid format error
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a backend error
    pub fn backend(
        endpoint: impl Into<String>,
        message: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self::Backend {
            endpoint: endpoint.into(),
            message: message.into(),
            status_code,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error was raised locally, before any request went out
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat { .. } | Self::EmptyInput { .. } | Self::Config { .. }
        )
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidFormat { .. } => {
                "❌ Invalid domain format. Please use format like \"example.com\".".to_string()
            }
            Self::EmptyInput { message } => format!("❌ {}", message),
            // Backend messages are shown close to verbatim.
            Self::Backend { message, .. } => format!("❌ {}", message),
            Self::Parse { message, .. } => {
                format!("❌ Unexpected response: {}\n💡 This might be a temporary issue, try again", message)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or DOMAIN_SCOUT_* variables", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<reqwest::Error> for DomainScoutError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let endpoint = err
            .url()
            .map(|u| u.path().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        if err.is_timeout() {
            Self::backend(endpoint, "Request timed out", status_code)
        } else if err.is_connect() {
            Self::backend(endpoint, "Connection failed, is the backend running?", status_code)
        } else if err.is_decode() {
            Self::parse(err.to_string(), None)
        } else {
            Self::backend(endpoint, err.to_string(), status_code)
        }
    }
}

impl From<serde_json::Error> for DomainScoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainScoutError>;

#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::DomainScoutError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainScoutError::config(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message() {
        let err = DomainScoutError::invalid_format("bad_domain");
        assert!(err.to_string().contains("bad_domain"));
        assert!(err.user_message().contains("example.com"));
        assert!(err.is_local());
    }

    #[test]
    fn test_backend_message_is_verbatim() {
        let err = DomainScoutError::backend(
            "/api/check-domain-availability",
            "Registrar unavailable",
            Some(502),
        );
        assert!(!err.is_local());
        assert_eq!(err.user_message(), "❌ Registrar unavailable");
    }

    #[test]
    fn test_json_error_becomes_parse_error() {
        let err: DomainScoutError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, DomainScoutError::Parse { .. }));
        assert!(err.user_message().starts_with("❌ Unexpected response"));
    }

    #[test]
    fn test_config_macro() {
        let err = config_error!("bad timeout: {}", "abc");
        assert!(matches!(err, DomainScoutError::Config { .. }));
        assert!(err.to_string().contains("bad timeout: abc"));
    }
}
