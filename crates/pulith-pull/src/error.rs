//! Error types for pulith-pull.

use thiserror::Error;

/// Failure while constructing a [`crate::PullOptions`].
///
/// Every variant is a configuration error, as opposed to transfer, checksum
/// or cache errors raised later by the executor.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pull option `{option}`: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    #[error("failed to parse pull configuration: {0}")]
    Config(#[source] toml::de::Error),

    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption { option, reason: reason.into() }
    }

    /// Wrap an error raised by a caller-authored modifier.
    pub fn custom<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Custom(error.into())
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidOption { .. } | Self::Config(_) | Self::Custom(_))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
