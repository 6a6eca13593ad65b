//! Output path selection.
//!
//! An explicit `-o` always wins. Without it, a single directory input
//! names the output after itself (`photos/` becomes `photos.pdf` in the
//! current directory). Anything else needs `-o`.

use std::path::{Path, PathBuf};

use crate::error::{MergePdfError, Result};
use crate::utils::{PDF_EXTENSION, absolute_normalized};

/// Compute the destination of the merged document.
///
/// # Arguments
///
/// * `explicit` - Value of `-o/--output`, if given
/// * `original_inputs` - Positional inputs exactly as the user gave them
///
/// # Errors
///
/// Returns [`MergePdfError::OutputAmbiguous`] when no explicit output is
/// given and the inputs are not exactly one directory.
pub fn select_output<P: AsRef<Path>>(
    explicit: Option<&Path>,
    original_inputs: &[P],
) -> Result<PathBuf> {
    if let Some(output) = explicit {
        return Ok(output.to_path_buf());
    }

    match original_inputs {
        [single] if single.as_ref().is_dir() => output_for_directory(single.as_ref()),
        _ => Err(MergePdfError::OutputAmbiguous),
    }
}

/// `<final component of dir>.pdf`, relative to the current directory.
///
/// Paths without a usable final component (`.`, `..`, `dir/..`) are named
/// after the directory they point to; the filesystem root has no name and
/// is rejected.
fn output_for_directory(dir: &Path) -> Result<PathBuf> {
    let name = match dir.file_name() {
        Some(name) => name.to_os_string(),
        None => {
            let absolute = absolute_normalized(dir).map_err(|err| MergePdfError::scan_failed(dir, err))?;
            absolute
                .file_name()
                .map(|name| name.to_os_string())
                .ok_or(MergePdfError::OutputAmbiguous)?
        }
    };

    let mut file_name = name;
    file_name.push(".");
    file_name.push(PDF_EXTENSION);

    log::debug!(
        "no output given, naming it after {}: {}",
        dir.display(),
        file_name.to_string_lossy()
    );
    Ok(PathBuf::from(file_name))
}
