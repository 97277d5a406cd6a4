//! Error handling for the CLI application

use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Dictionary file missing or not a regular file
    #[error("Dictionary not found: {}", .0.display())]
    DictionaryNotFound(PathBuf),

    /// Dictionary content could not be parsed
    #[error("Invalid dictionary {}: {reason}", path.display())]
    InvalidDictionary {
        /// Dictionary path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Failure while reading or extracting from an input file
    #[error("Processing error: {0}")]
    ProcessingError(String),
}
