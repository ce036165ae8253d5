//! Error types for the ALF style layer
//!
//! Style resolution itself is total and never returns these. They cover the
//! edges where callers hand in names, preferences or configuration that come
//! from outside the type system.

use thiserror::Error;

/// Errors raised while building style inputs
#[derive(Debug, Error)]
pub enum Error {
    /// A string atom name outside the known vocabulary
    #[error("Unknown atom: {0}")]
    UnknownAtom(String),

    /// A theme name that does not match any built-in theme
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// A font scale step outside the supported range
    #[error("Invalid font scale: {0}")]
    InvalidFontScale(String),

    /// A typography context that cannot produce finite sizes
    #[error("Invalid typography context: {0}")]
    InvalidContext(String),

    /// Configuration values that parse but make no sense
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration that failed to parse
    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for ALF operations
pub type Result<T> = std::result::Result<T, Error>;
