//! mergepdf - Concatenate PDF files into a single document.

use std::process;

fn main() {
    // Developer tracing, enabled with RUST_LOG=mergepdf=debug.
    env_logger::init();

    process::exit(mergepdf::cli::execute(std::env::args_os()));
}
