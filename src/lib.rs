//! mergepdf - Concatenate PDF files into a single document.
//!
//! Inputs may be PDF files or directories. Directories are searched
//! recursively, and everything found is merged in case-insensitive
//! alphabetical order of the absolute paths. Without `-o`, a single
//! directory input names the output after itself.
//!
//! # Examples
//!
//! ```no_run
//! use mergepdf::config::Config;
//! use mergepdf::output::OutputFormatter;
//! use std::path::PathBuf;
//!
//! # fn example() -> mergepdf::Result<()> {
//! let config = Config {
//!     inputs: vec![PathBuf::from("chapters"), PathBuf::from("cover.pdf")],
//!     output: Some(PathBuf::from("book.pdf")),
//!     ..Default::default()
//! };
//!
//! mergepdf::run(&config, &OutputFormatter::default())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod output_path;
pub mod resolver;
pub mod utils;

pub use config::Config;
pub use error::{MergePdfError, Result};

use crate::merge::{MergeJob, MergeSummary, Merger};
use crate::output::OutputFormatter;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// How a successful [`run`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The plan was computed but nothing was written.
    DryRun(MergeJob),
    /// The destination was written.
    Merged {
        /// What was merged where.
        job: MergeJob,
        /// What the merge produced.
        summary: MergeSummary,
    },
}

/// Resolve the inputs, pick the destination and merge.
///
/// # Errors
///
/// Fails, in this order of checks, when an input is missing or unreadable,
/// when no PDF was found, when the output path cannot be determined, and
/// when the merge itself fails. See [`MergePdfError::exit_code`].
pub fn run(config: &Config, formatter: &OutputFormatter) -> Result<RunOutcome> {
    config.validate()?;

    let pdfs = resolver::resolve_inputs(&config.inputs, formatter)?;
    if pdfs.is_empty() {
        return Err(MergePdfError::NoPdfFilesFound);
    }

    let destination = output_path::select_output(config.output.as_deref(), &config.inputs)?;
    let job = MergeJob::new(pdfs, destination)?;

    if formatter.is_verbose() {
        for (idx, path) in job.inputs().iter().enumerate() {
            formatter.debug(&format!("[{}/{}] {}", idx + 1, job.inputs().len(), path.display()));
        }
    }

    if config.dry_run {
        formatter.info("Merge plan:");
        for (idx, path) in job.inputs().iter().enumerate() {
            formatter.list_item(idx + 1, &path.display().to_string());
        }
        formatter.info(&format!("Output would be: {}", job.destination().display()));
        return Ok(RunOutcome::DryRun(job));
    }

    let summary = Merger::new().run(&job)?;

    formatter.success(&format!(
        "Merged {} PDF(s) into: {}",
        summary.files_merged,
        job.destination().display()
    ));
    formatter.detail("Total pages", &summary.total_pages.to_string());

    Ok(RunOutcome::Merged { job, summary })
}
