//! Error types for mergepdf.
//!
//! Every failure of a single invocation is a [`MergePdfError`]. Each variant
//! maps onto one process exit code, see [`MergePdfError::exit_code`].
//!
//! # Error Categories
//!
//! - **Usage**: malformed invocation
//! - **Resolution**: missing inputs, unreadable directories, no PDFs found
//! - **Output**: destination cannot be determined
//! - **Merge**: opening, loading, merging or writing failed

use std::io;
use std::path::PathBuf;

/// Result type alias for mergepdf operations.
pub type Result<T> = std::result::Result<T, MergePdfError>;

/// Main error type for mergepdf operations.
#[derive(Debug, thiserror::Error)]
pub enum MergePdfError {
    /// The command line was malformed.
    #[error("{message}")]
    Usage {
        /// What was wrong with the invocation.
        message: String,
    },

    /// An input given on the command line does not exist.
    #[error("Path does not exist: {}", path.display())]
    PathNotFound {
        /// The offending input.
        path: PathBuf,
    },

    /// Inspecting an input or walking a directory failed.
    #[error("Error while scanning inputs: {}\n  Reason: {source}", path.display())]
    ScanFailed {
        /// Path being inspected when the failure happened.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: ScanError,
    },

    /// Every input was resolved but none of them was a PDF.
    #[error("No PDF files found in the given inputs")]
    NoPdfFilesFound,

    /// No `-o` was given and the inputs are not a single directory.
    #[error("Output filename must be specified with -o when not providing a single directory")]
    OutputAmbiguous,

    /// An input PDF could not be opened for reading.
    #[error("Failed to open PDF: {}\n  Reason: {source}", path.display())]
    FailedToOpen {
        /// Input that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The PDF backend reported a failure.
    #[error("Failed to merge PDFs: {reason}")]
    MergeFailed {
        /// Backend message, including its context chain.
        reason: String,
    },

    /// The merged document could not be written.
    #[error("Failed to write output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O or serialization error.
        #[source]
        source: io::Error,
    },
}

/// Low-level cause of a [`MergePdfError::ScanFailed`].
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Querying a path failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The recursive directory walk failed.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl MergePdfError {
    /// Create a Usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a PathNotFound error.
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a ScanFailed error.
    pub fn scan_failed(path: impl Into<PathBuf>, source: impl Into<ScanError>) -> Self {
        Self::ScanFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create a MergeFailed error from a backend error.
    ///
    /// The alternate formatting keeps the whole `anyhow` context chain.
    pub fn merge_failed(err: &anyhow::Error) -> Self {
        Self::MergeFailed {
            reason: format!("{err:#}"),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 2,
            Self::PathNotFound { .. } => 3,
            Self::ScanFailed { .. } => 3,
            Self::NoPdfFilesFound => 4,
            Self::OutputAmbiguous => 5,
            Self::FailedToOpen { .. } => 6,
            Self::MergeFailed { .. } => 6,
            Self::FailedToWrite { .. } => 6,
        }
    }

    /// Whether the usage text should be printed along with this error.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::Usage { .. } | Self::OutputAmbiguous)
    }
}
