/*!
 * Error types for the xliff-transup application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building a slot pattern
#[derive(Error, Debug)]
pub enum SubstitutionError {
    /// A delimiter is empty, so filled targets would still match
    #[error("Slot delimiters must not be empty")]
    EmptyMarker,

    /// The escaped marker could not be compiled
    #[error("Invalid slot pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors that can occur while reading the interactive answer
#[derive(Error, Debug)]
pub enum PromptError {
    /// The answer did not name exactly two files
    #[error("Expected two file names separated by a comma, found {found}: '{input}'")]
    WrongFileCount {
        /// Number of names found in the answer
        found: usize,
        /// The raw answer
        input: String,
    },

    /// Reading from the terminal failed
    #[error("Prompt failed: {0}")]
    Terminal(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// An input file does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the substitution engine
    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    /// Error from the interactive prompt
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
