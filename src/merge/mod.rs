//! Merging resolved PDFs into the destination file.
//!
//! A [`MergeJob`] pairs the ordered inputs with the destination. The
//! [`Merger`] opens every input, hands the streams to a [`MergeBackend`]
//! and writes the result with [`PdfWriter`](crate::io::PdfWriter).

pub mod backend;
pub mod merger;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{LopdfBackend, MergeBackend};
pub use merger::Merger;

use std::path::{Path, PathBuf};

use crate::error::{MergePdfError, Result};

/// The inputs of one merge, in page order, and where the result goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeJob {
    inputs: Vec<PathBuf>,
    destination: PathBuf,
}

impl MergeJob {
    /// Create a job.
    ///
    /// # Errors
    ///
    /// Returns [`MergePdfError::NoPdfFilesFound`] if `inputs` is empty.
    pub fn new(inputs: Vec<PathBuf>, destination: impl Into<PathBuf>) -> Result<Self> {
        if inputs.is_empty() {
            return Err(MergePdfError::NoPdfFilesFound);
        }

        Ok(Self {
            inputs,
            destination: destination.into(),
        })
    }

    /// Inputs in merge order. Never empty.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Destination of the merged document.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Outcome of a successful merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Number of input documents merged.
    pub files_merged: usize,
    /// Pages in the written document.
    pub total_pages: usize,
}
