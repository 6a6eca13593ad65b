//! Path helpers shared by the resolver and the output selector.

use std::cmp::Ordering;
use std::io;
use std::path::{Component, Path, PathBuf};

/// File extension that marks a PDF, compared case-insensitively.
pub const PDF_EXTENSION: &str = "pdf";

/// Check whether a file name carries a `.pdf` extension.
///
/// The extension is whatever follows the last `.` of the file name, so
/// `report.PDF` and `.pdf` match while a file called `pdf` does not.
pub fn is_pdf(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();

    match name.rfind('.') {
        Some(dot) => name[dot + 1..].eq_ignore_ascii_case(PDF_EXTENSION),
        None => false,
    }
}

/// Make `path` absolute against the current directory and fold `.` and `..`
/// components lexically. Symlinks are not resolved.
pub fn absolute_normalized(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize_lexically(&absolute))
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }

    normalized
}

/// Ordinal, case-insensitive comparison of two paths' string forms.
///
/// Characters are compared after Unicode lowercase folding. Paths that are
/// equal under folding fall back to their case-sensitive ordering so the
/// result is a total order.
pub fn compare_case_insensitive(a: &Path, b: &Path) -> Ordering {
    let a = a.to_string_lossy();
    let b = b.to_string_lossy();

    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| a.cmp(&b))
}
