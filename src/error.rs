//! Custom error types and handling
//!
//! This module defines the pipeline's error taxonomy. Every stage returns
//! [`AppResult`] and propagates the first failure with `?`; `main` maps the
//! error to a message and a process exit code.

use std::path::PathBuf;

use chrono::TimeDelta;

use crate::config::ConfigError;
use crate::utils::time::format_elapsed;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Input errors
    #[error("Failed to load participant directory {}: {reason}", .path.display())]
    DirectoryLoad { path: PathBuf, reason: String },

    #[error("Failed to read timing log {}: {reason}", .path.display())]
    TimingLogRead { path: PathBuf, reason: String },

    #[error("Malformed timing log line {line_number}: expected `<bib> <separator> <time>`, got {line:?}")]
    MalformedLine { line_number: usize, line: String },

    #[error("Malformed timestamp {value:?} for participant number {bib}")]
    MalformedTimestamp { bib: String, value: String },

    // Ranking errors
    #[error("No information about participant number {bib} in the participant directory")]
    UnknownParticipant { bib: String },

    #[error("Invalid directory entry for participant number {bib}: {reason}")]
    InvalidParticipant { bib: String, reason: String },

    #[error("Negative elapsed time {} for participant number {bib}", format_elapsed(.elapsed.to_owned()))]
    NegativeElapsed { bib: String, elapsed: TimeDelta },

    // Output errors
    #[error("Failed to write report: {0}")]
    Output(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DirectoryLoad { .. } => "DIRECTORY_LOAD_ERROR",
            Self::TimingLogRead { .. } => "TIMING_LOG_READ_ERROR",
            Self::MalformedLine { .. } => "MALFORMED_LINE",
            Self::MalformedTimestamp { .. } => "MALFORMED_TIMESTAMP",
            Self::UnknownParticipant { .. } => "UNKNOWN_PARTICIPANT",
            Self::InvalidParticipant { .. } => "INVALID_PARTICIPANT",
            Self::NegativeElapsed { .. } => "NEGATIVE_ELAPSED",
            Self::Output(_) => "OUTPUT_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Internal(_) => 1,
            Self::Configuration(_) => 2,
            Self::DirectoryLoad { .. } => 3,
            Self::TimingLogRead { .. } => 4,
            Self::MalformedLine { .. } => 5,
            Self::MalformedTimestamp { .. } => 6,
            Self::UnknownParticipant { .. } => 7,
            Self::NegativeElapsed { .. } => 8,
            Self::Output(_) => 9,
            Self::InvalidParticipant { .. } => 10,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Output(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
