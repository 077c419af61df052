//! Error types for the breadcrumbs system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use thiserror::Error;

/// Result type alias using the breadcrumbs [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for breadcrumb operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an invalid capacity error.
    #[must_use]
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::new(ErrorKind::InvalidCapacity(capacity))
    }

    /// Creates a missing configuration key error.
    #[must_use]
    pub fn missing_config(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingConfig(key.into()))
    }

    /// Creates a configuration type mismatch error.
    #[must_use]
    pub fn config_type(key: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::new(ErrorKind::ConfigType {
            key: key.into(),
            expected,
            actual,
        })
    }

    /// Creates a configuration unavailable error.
    #[must_use]
    pub fn config_unavailable(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigUnavailable(reason.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Creates a deserialization error.
    #[must_use]
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeserializationError(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A buffer was constructed with a capacity it cannot honor: zero, or
    /// more slots than can be allocated.
    #[error("invalid buffer capacity: {0}")]
    InvalidCapacity(usize),

    /// The configuration provider has no value for a key.
    #[error("configuration key not set: {0}")]
    MissingConfig(String),

    /// The configuration value has the wrong type.
    #[error("configuration key {key}: expected {expected}, got {actual}")]
    ConfigType {
        /// The key that was looked up.
        key: String,
        /// The expected value type.
        expected: &'static str,
        /// The type actually stored.
        actual: &'static str,
    },

    /// The configuration provider could not answer at all.
    #[error("configuration unavailable: {0}")]
    ConfigUnavailable(String),

    /// Encoding a summary failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Decoding a summary failed.
    #[error("deserialization error: {0}")]
    DeserializationError(String),
}
