//! Error types for environment-derived values

use thiserror::Error;

/// Errors raised while turning configured values into URLs
#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// A configured or derived value is not a valid URL
    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl EnvironmentError {
    pub(crate) fn invalid_url(
        field: &'static str,
        value: impl Into<String>,
        source: url::ParseError,
    ) -> Self {
        Self::InvalidUrl {
            field,
            value: value.into(),
            source,
        }
    }
}

/// Result type alias for environment operations
pub type Result<T> = std::result::Result<T, EnvironmentError>;
