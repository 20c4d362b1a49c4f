//! Error types for lint operations

use thiserror::Error;

/// Result type for lint operations
pub type LintResult<T> = Result<T, LintError>;

/// Errors that can occur while linting
#[derive(Debug, Error)]
pub enum LintError {
    /// I/O error reading sources or configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree-sitter rejected the grammar
    #[error("failed to load grammar: {0}")]
    Grammar(String),

    /// Tree-sitter could not produce a tree
    #[error("failed to parse {path}")]
    Parse {
        /// Path of the source that failed to parse
        path: String,
    },

    /// A file extension outside the linted set
    #[error("unsupported source file: {path}")]
    UnsupportedSource {
        /// Path of the rejected file
        path: String,
    },

    /// A configured exemption pattern is not a valid regex
    #[error("invalid exempt pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// The pattern as configured
        pattern: String,
        /// The regex engine's complaint
        message: String,
    },

    /// Configuration file could not be deserialized
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
