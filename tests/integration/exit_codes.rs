//! Exit codes and diagnostics of the binary.

use predicates::prelude::*;
use tempfile::tempdir;

use crate::common::{entries, mergepdf, write_pdf};

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    let dir = tempdir().unwrap();

    mergepdf(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    assert!(entries(dir.path()).is_empty(), "nothing may be written");
}

#[test]
fn test_help_exits_0_and_overrides_everything() {
    let dir = tempdir().unwrap();

    mergepdf(dir.path())
        .args(["missing.pdf", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_version_exits_0() {
    let dir = tempdir().unwrap();

    mergepdf(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_output_flag_without_value_exits_2() {
    let dir = tempdir().unwrap();
    write_pdf(&dir.path().join("a.pdf"), 1);

    mergepdf(dir.path())
        .args(["a.pdf", "-o"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_no_inputs_exits_2() {
    let dir = tempdir().unwrap();

    mergepdf(dir.path())
        .args(["-o", "merged.pdf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FILE_OR_DIR"));
}

#[test]
fn test_missing_input_exits_3() {
    let dir = tempdir().unwrap();
    write_pdf(&dir.path().join("a.pdf"), 1);

    mergepdf(dir.path())
        .args(["-o", "merged.pdf", "a.pdf", "nope.pdf"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.pdf"));

    assert!(!dir.path().join("merged.pdf").exists());
}

#[test]
fn test_no_pdfs_found_exits_4() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("notes")).unwrap();
    std::fs::write(dir.path().join("notes/todo.txt"), b"nothing").unwrap();

    mergepdf(dir.path())
        .arg("notes")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No PDF files found"));

    assert!(!dir.path().join("notes.pdf").exists());
}

#[test]
fn test_ambiguous_output_exits_5() {
    let dir = tempdir().unwrap();
    write_pdf(&dir.path().join("a.pdf"), 1);
    write_pdf(&dir.path().join("b.pdf"), 1);

    mergepdf(dir.path())
        .args(["a.pdf", "b.pdf"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("-o"));

    assert_eq!(entries(dir.path()), vec!["a.pdf", "b.pdf"]);
}

#[test]
fn test_corrupted_pdf_exits_6() {
    let dir = tempdir().unwrap();
    write_pdf(&dir.path().join("a.pdf"), 1);
    std::fs::write(dir.path().join("broken.pdf"), b"not really a pdf").unwrap();

    mergepdf(dir.path())
        .args(["-o", "merged.pdf", "a.pdf", "broken.pdf"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("broken.pdf"));
}
