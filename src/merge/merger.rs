//! Driving a merge job from input paths to the written destination.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{MergePdfError, Result};
use crate::io::{PdfWriter, SourceSet};
use crate::merge::{LopdfBackend, MergeBackend, MergeJob, MergeSummary};

/// Runs a [`MergeJob`] against a [`MergeBackend`].
#[derive(Debug, Default, Clone)]
pub struct Merger<B = LopdfBackend> {
    backend: B,
}

impl Merger {
    /// Create a merger using the lopdf backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: MergeBackend> Merger<B> {
    /// Create a merger with a custom backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Merge the job's inputs from disk and write the destination.
    ///
    /// # Errors
    ///
    /// - [`MergePdfError::FailedToOpen`] if an input cannot be opened.
    /// - [`MergePdfError::MergeFailed`] if the backend rejects the inputs.
    /// - [`MergePdfError::FailedToWrite`] if the destination cannot be written.
    pub fn run(&self, job: &MergeJob) -> Result<MergeSummary> {
        self.run_with(job, |path: &Path| File::open(path).map(BufReader::new))
    }

    /// Like [`Merger::run`], opening inputs with `open`.
    ///
    /// Every reader returned by `open` is dropped before this returns,
    /// whatever the outcome.
    pub fn run_with<R, F>(&self, job: &MergeJob, open: F) -> Result<MergeSummary>
    where
        R: Read,
        F: FnMut(&Path) -> io::Result<R>,
    {
        let mut sources = SourceSet::open_with(job.inputs(), open)?;
        log::debug!("opened {} input(s)", sources.len());

        let merged = self.backend.merge(sources.as_mut_slice());

        // Release inputs before touching the destination, which may be one of them.
        drop(sources);

        let mut document = merged.map_err(|err| MergePdfError::merge_failed(&err))?;
        let summary = MergeSummary {
            files_merged: job.inputs().len(),
            total_pages: document.get_pages().len(),
        };

        PdfWriter::write(&mut document, job.destination())?;

        Ok(summary)
    }
}
