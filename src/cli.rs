//! CLI argument parsing for mergepdf.
//!
//! Defines the command-line interface with `clap` and maps every way an
//! invocation can end onto its exit code:
//!
//! | Code | Condition |
//! |------|-----------|
//! | 0 | merged, dry run, `--help` or `--version` |
//! | 1 | no arguments at all |
//! | 2 | usage error |
//! | 3 | an input is missing or cannot be scanned |
//! | 4 | no PDF files among the inputs |
//! | 5 | output path cannot be determined |
//! | 6 | the merge itself failed |

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;
use crate::output::OutputFormatter;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when invoked without any argument.
pub const EXIT_NO_ARGUMENTS: i32 = 1;

/// Exit code for malformed invocations.
pub const EXIT_USAGE: i32 = 2;

/// Concatenate PDF files into a single document.
///
/// Directories are searched recursively for PDF files. All collected files
/// are merged in case-insensitive alphabetical order of their absolute
/// paths.
#[derive(Parser, Debug)]
#[command(name = "mergepdf")]
#[command(version)]
#[command(about = "Concatenate PDF files and directories of PDFs into a single document")]
#[command(arg_required_else_help = true)]
#[command(after_help = "Examples:\n  mergepdf -o merged.pdf a.pdf b.pdf\n  mergepdf /path/to/dir")]
pub struct Cli {
    /// PDF files or directories to merge
    ///
    /// Directories are searched recursively. Explicit files without a .pdf
    /// extension are skipped with a warning.
    #[arg(required = true, value_name = "FILE_OR_DIR")]
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path
    ///
    /// If a single directory is given and -o is omitted, the directory
    /// name is used as the output filename in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Dry run - resolve inputs and show the merge plan without creating output
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - list every resolved input
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Parse `args` (including the program name), run, and return the exit code.
///
/// Nothing on the filesystem is touched unless parsing succeeds.
pub fn execute<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(&err),
    };

    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    let result = Config::try_from(&cli).and_then(|config| crate::run(&config, &formatter));
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(err) => {
            formatter.error(&err.to_string());
            if err.shows_usage() {
                eprintln!("{}", Cli::command().render_usage());
            }
            err.exit_code()
        }
    }
}

/// Print a clap outcome and pick the matching exit code.
fn report_parse_error(err: &clap::Error) -> i32 {
    // Help and version go to stdout, real errors to stderr.
    let _ = err.print();

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => EXIT_NO_ARGUMENTS,
        _ => EXIT_USAGE,
    }
}
