//! Error types and exit codes for slipbox
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including invoking unimplemented features)
//! - 2: Usage error (bad flags/args)
//! - 3: Data/source error (missing notes directory, unreadable note file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the slipbox binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/source error - missing directory, unreadable note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during slipbox operations
#[derive(Error, Debug)]
pub enum SlipboxError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data/source errors (exit code 3)
    #[error("notes directory not found: {path:?}")]
    NotesDirNotFound { path: PathBuf },

    #[error("failed to read note source {path:?}: {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    // Generic failures (exit code 1)
    #[error("not yet supported: {feature}")]
    Unimplemented { feature: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SlipboxError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            SlipboxError::UnknownFormat(_)
            | SlipboxError::DuplicateFormat
            | SlipboxError::UsageError(_) => ExitCode::Usage,

            // Data/source errors
            SlipboxError::NotesDirNotFound { .. } | SlipboxError::SourceRead { .. } => {
                ExitCode::Data
            }

            // Generic failures
            SlipboxError::Unimplemented { .. }
            | SlipboxError::Io(_)
            | SlipboxError::Toml(_)
            | SlipboxError::Json(_)
            | SlipboxError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SlipboxError::UnknownFormat(_) => "unknown_format",
            SlipboxError::DuplicateFormat => "duplicate_format",
            SlipboxError::UsageError(_) => "usage_error",
            SlipboxError::NotesDirNotFound { .. } => "notes_dir_not_found",
            SlipboxError::SourceRead { .. } => "source_read_error",
            SlipboxError::Unimplemented { .. } => "unimplemented",
            SlipboxError::Io(_) => "io_error",
            SlipboxError::Toml(_) => "toml_error",
            SlipboxError::Json(_) => "json_error",
            SlipboxError::Other(_) => "other",
        }
    }
}

/// Result type alias for slipbox operations
pub type Result<T> = std::result::Result<T, SlipboxError>;
