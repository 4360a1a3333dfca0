//! Error types for `modeldocs`
//!
//! A single top-level error enum covers every failure that aborts a run,
//! together with the process exit codes each variant maps to. Recoverable
//! conditions (missing images, unreadable tutorial titles, absent model
//! directories) never surface here.

use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `modeldocs` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Registry error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `modeldocs` operations.
#[derive(Debug, Error)]
pub enum ModelDocsError {
    /// Registry loading or validation error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// I/O error tied to a specific path
    #[error("{action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted ("failed to read", "failed to write", ...)
        action: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid file-discovery pattern
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Directory entry could not be read during discovery
    #[error("failed to walk {}: {}", .0.path().display(), .0.error())]
    Walk(#[from] glob::GlobError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelDocsError {
    /// Wraps an I/O error with the path and action that produced it.
    pub fn io(action: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Registry(_) | Self::Pattern(_) => ExitCode::CONFIG_ERROR,
            Self::Io { .. } | Self::Walk(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Registry Errors
// ============================================================================

/// Registry loading and validation errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Registry source ("<built-in>" for the embedded registry)
        path: String,
        /// Error message from the parser
        message: String,
    },

    /// A family entry has an empty or whitespace-only name
    #[error("family #{index} in {path} has an empty name")]
    EmptyFamilyName {
        /// Registry source
        path: String,
        /// Zero-based position of the family
        index: usize,
    },

    /// Two families share a display name
    #[error("duplicate family '{name}' in {path}")]
    DuplicateFamily {
        /// Registry source
        path: String,
        /// The repeated family name
        name: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `modeldocs` operations.
pub type Result<T> = std::result::Result<T, ModelDocsError>;

// ============================================================================
// Tests
// ============================================================================
