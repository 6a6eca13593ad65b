//! Configuration for a single invocation.
//!
//! [`Config`] is the validated form of the parsed command line and is what
//! [`run`](crate::run) consumes.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{MergePdfError, Result};

/// Settings driving one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Files and directories, in the order given.
    pub inputs: Vec<PathBuf>,

    /// Explicit output path (`-o`), if any.
    pub output: Option<PathBuf>,

    /// Dry run mode - resolve and report without creating output.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a usage error if:
    /// - No inputs are specified
    /// - Verbose and quiet modes are both enabled
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(MergePdfError::usage(
                "No input files or directories provided",
            ));
        }

        if self.verbose && self.quiet {
            return Err(MergePdfError::usage(
                "--verbose and --quiet cannot be used together",
            ));
        }

        if self
            .output
            .as_ref()
            .is_some_and(|output| output.as_os_str().is_empty())
        {
            return Err(MergePdfError::usage("Output path must not be empty"));
        }

        Ok(())
    }
}

impl TryFrom<&Cli> for Config {
    type Error = MergePdfError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let config = Self {
            inputs: cli.inputs.clone(),
            output: cli.output.clone(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
            quiet: cli.quiet,
        };

        config.validate()?;
        Ok(config)
    }
}
