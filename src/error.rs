//! Error types for powerbridge
//!
//! Provides standardized error handling across the library.

use thiserror::Error;

/// Errors that can occur in powerbridge
#[derive(Debug, Error)]
pub enum PowerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform power-management query errors
    #[error("Platform error: {0}")]
    Platform(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for powerbridge operations
pub type PowerResult<T> = Result<T, PowerError>;
