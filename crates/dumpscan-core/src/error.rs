//! Application error types with rich context
//!
//! Pattern-match failures are never errors in this crate -- the matchers
//! resolve to documented defaults instead. `Error` covers the I/O and
//! archive boundaries only.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Bug Report Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read bug report: {path}")]
    UnreadableReport { path: PathBuf },

    #[error("Bug report not found: {path}")]
    ReportNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Archive Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Archive error: {message}")]
    Archive { message: String },

    #[error("Archive entry escapes extraction root: {name}")]
    ArchiveEntryEscape { name: String },

    // ─────────────────────────────────────────────────────────────
    // Analysis Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Analysis error: {message}")]
    Analysis { message: String },

    #[error("Analysis was cancelled")]
    Cancelled,

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn unreadable_report(path: impl Into<PathBuf>) -> Self {
        Self::UnreadableReport { path: path.into() }
    }

    pub fn report_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ReportNotFound { path: path.into() }
    }

    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive {
            message: message.into(),
        }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are reported as "failed to process" and leave
    /// any prior analysis state untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::UnreadableReport { .. }
                | Error::Archive { .. }
                | Error::ArchiveEntryEscape { .. }
                | Error::Analysis { .. }
                | Error::Cancelled // User chose to abandon the analysis
        )
    }

    /// Check if this error should terminate the surrounding application
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ReportNotFound { .. } | Error::ChannelClosed
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
