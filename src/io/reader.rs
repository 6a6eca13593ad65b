//! Opening input PDFs.
//!
//! All inputs of a merge are opened up front, in merge order, into one
//! [`SourceSet`]. The set owns every handle: dropping it closes them all,
//! whether the merge succeeded, failed, or opening stopped halfway.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{MergePdfError, Result};

/// One opened input.
#[derive(Debug)]
pub struct Source<R> {
    /// Path the reader was opened from.
    pub path: PathBuf,
    /// Byte stream of the PDF.
    pub reader: R,
}

/// Opened inputs, in merge order.
#[derive(Debug)]
pub struct SourceSet<R> {
    sources: Vec<Source<R>>,
}

impl SourceSet<BufReader<File>> {
    /// Open every path as a buffered file.
    ///
    /// # Errors
    ///
    /// Returns [`MergePdfError::FailedToOpen`] for the first path that cannot
    /// be opened. Files opened before it are closed again.
    pub fn open(paths: &[PathBuf]) -> Result<Self> {
        Self::open_with(paths, |path| File::open(path).map(BufReader::new))
    }
}

impl<R> SourceSet<R> {
    /// Open every path with `open`, stopping at the first failure.
    pub fn open_with<F>(paths: &[PathBuf], mut open: F) -> Result<Self>
    where
        F: FnMut(&Path) -> io::Result<R>,
    {
        let mut sources = Vec::with_capacity(paths.len());

        for path in paths {
            // On error `sources` is dropped here, releasing what was opened.
            let reader = open(path).map_err(|source| MergePdfError::FailedToOpen {
                path: path.clone(),
                source,
            })?;
            log::trace!("opened {}", path.display());
            sources.push(Source {
                path: path.clone(),
                reader,
            });
        }

        Ok(Self { sources })
    }

    /// Number of opened inputs.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no input was opened.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Mutable access to the sources, in merge order.
    pub fn as_mut_slice(&mut self) -> &mut [Source<R>] {
        &mut self.sources
    }
}
