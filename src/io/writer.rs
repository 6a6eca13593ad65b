//! Writing the merged document to disk.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use lopdf::Document;

use crate::error::{MergePdfError, Result};

/// A utility struct responsible for serializing a PDF document to a file.
pub struct PdfWriter;

impl PdfWriter {
    /// Writes the given PDF [`Document`] to the specified file path.
    ///
    /// Missing parent directories are created first. An existing file at
    /// `path` is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`MergePdfError::FailedToWrite`] if:
    ///
    /// * The parent directories cannot be created (e.g., due to permissions).
    /// * The file cannot be created or opened for writing.
    /// * An I/O error occurs during the document serialization or flushing to disk.
    pub fn write<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let failed = |source: io::Error| MergePdfError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(failed)?;
        }

        let file = std::fs::File::create(path).map_err(failed)?;
        let mut writer = BufWriter::new(file);

        doc.save_to(&mut writer)
            .map_err(|err| failed(io::Error::other(err)))?;

        // Flush explicitly; errors on drop would be lost.
        writer.flush().map_err(failed)?;

        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
