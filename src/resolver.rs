//! Input resolution.
//!
//! Turns the positional command-line paths into the ordered list of PDF
//! files to merge. Explicit files are kept when they look like PDFs and
//! skipped with a warning otherwise; directories are walked recursively
//! and contribute every PDF beneath them without any warning for the
//! other files. The combined result is sorted case-insensitively by
//! absolute path, regardless of the order the inputs were given in.
//!
//! # Examples
//!
//! ```no_run
//! use mergepdf::output::OutputFormatter;
//! use mergepdf::resolver::resolve_inputs;
//!
//! # fn example() -> mergepdf::Result<()> {
//! let formatter = OutputFormatter::default();
//! let pdfs = resolve_inputs(["chapters", "cover.pdf"], &formatter)?;
//! println!("{} PDF files", pdfs.len());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{MergePdfError, Result};
use crate::output::Diagnostics;
use crate::utils::{absolute_normalized, compare_case_insensitive, is_pdf};

/// Resolve every input into absolute PDF paths, sorted case-insensitively.
///
/// Fails on the first input that does not exist; nothing is returned for
/// the inputs that were already resolved. An empty result is not an error
/// here.
///
/// # Errors
///
/// - [`MergePdfError::PathNotFound`] if an input does not exist.
/// - [`MergePdfError::ScanFailed`] if an input cannot be inspected or a
///   directory walk fails.
pub fn resolve_inputs<T, D>(inputs: T, diagnostics: D) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<Path>,
    D: Diagnostics,
{
    let mut resolved_paths = Vec::new();

    for input in inputs {
        let paths = resolve_input(input.as_ref(), &diagnostics)?;
        resolved_paths.extend(paths);
    }

    resolved_paths.sort_by(|a, b| compare_case_insensitive(a, b));
    log::debug!("resolved {} PDF file(s)", resolved_paths.len());

    Ok(resolved_paths)
}

/// Resolve a single input into the PDFs it names, in discovery order.
pub fn resolve_input<D: Diagnostics>(input: &Path, diagnostics: &D) -> Result<Vec<PathBuf>> {
    let exists = input
        .try_exists()
        .map_err(|err| MergePdfError::scan_failed(input, err))?;
    if !exists {
        return Err(MergePdfError::path_not_found(input));
    }

    if input.is_dir() {
        return collect_directory(input);
    }

    if input.is_file() {
        if is_pdf(input) {
            let path = absolute_normalized(input).map_err(|err| MergePdfError::scan_failed(input, err))?;
            return Ok(vec![path]);
        }

        diagnostics.warning(&format!("Skipping non-PDF file: {}", input.display()));
        return Ok(Vec::new());
    }

    diagnostics.debug(&format!(
        "Skipping {}: not a regular file or directory",
        input.display()
    ));
    Ok(Vec::new())
}

/// Walk `root` recursively and collect every PDF below it.
///
/// Directory symlinks are not followed, so link cycles cannot loop. A
/// symlink entry pointing at a regular file is treated as that file.
fn collect_directory(root: &Path) -> Result<Vec<PathBuf>> {
    let mut pdfs = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            MergePdfError::scan_failed(path, err)
        })?;

        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        if !is_pdf(entry.path()) {
            log::trace!("ignoring non-PDF file {}", entry.path().display());
            continue;
        }

        let path = absolute_normalized(entry.path())
            .map_err(|err| MergePdfError::scan_failed(entry.path(), err))?;
        pdfs.push(path);
    }

    log::debug!("{}: {} PDF file(s)", root.display(), pdfs.len());
    Ok(pdfs)
}
