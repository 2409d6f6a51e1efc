use assert_cmd::Command;
use fencecat::{fencecat, FencecatBuilder};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn cli() -> Command {
    Command::cargo_bin("fencecat").unwrap()
}

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("project");
    write_file(&input.join("main.rs"), "fn main() {}\n");
    write_file(&input.join("src/lib.rs"), "pub fn test() {}\n");
    write_file(&input.join("src/notes.md"), "# notes\n");
    let output = dir.path().join("out.md");
    let options = FencecatBuilder::new(&input, &output).build();
    let summary = fencecat(options).unwrap();
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.skipped, 0);
    let doc = fs::read_to_string(&output).unwrap();
    // sorted by relative path: main.rs, src/lib.rs, src/notes.md
    let main_pos = doc.find("main.rs").unwrap();
    let lib_pos = doc.find("lib.rs").unwrap();
    let notes_pos = doc.find("notes.md").unwrap();
    assert!(main_pos < lib_pos && lib_pos < notes_pos);
    assert_eq!(doc.matches("```rust").count(), 0);
    assert_eq!(doc.matches("```rs").count(), 2);
    assert_eq!(doc.matches("```md").count(), 1);
}

#[test]
fn cli_end_to_end() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), "hello");
    fs::write(temp.path().join("src/b.bin"), b"\x00binary").unwrap();

    cli()
        .current_dir(temp.path())
        .args(["src", "out.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 1 files, skipped 1"));

    let doc = fs::read_to_string(temp.path().join("out.md")).unwrap();
    let expected = format!("{} src/a.txt\n```txt\nhello\n```\n", "_".repeat(30));
    assert_eq!(doc, expected);
}

#[test]
fn cli_missing_input_exits_nonzero() {
    let temp = tempdir().unwrap();

    cli()
        .current_dir(temp.path())
        .args(["no-such-dir", "out.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!temp.path().join("out.md").exists());
}

#[test]
fn cli_output_inside_input_exits_nonzero() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), "a");

    cli()
        .current_dir(temp.path())
        .args(["src", "src/out.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot be inside"));

    assert!(!temp.path().join("src/out.md").exists());
}

#[test]
fn cli_exclude_flag() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), "a\n");
    write_file(&temp.path().join("src/trace.log"), "log\n");
    write_file(&temp.path().join("src/deep/run.log"), "log\n");

    cli()
        .current_dir(temp.path())
        .args(["src", "out.md", "--exclude", "*.log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 1 files, skipped 0"));

    let doc = fs::read_to_string(temp.path().join("out.md")).unwrap();
    assert!(!doc.contains(".log"));
}

#[test]
fn cli_custom_separator() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("docs/note.txt"), "note\n");

    cli()
        .current_dir(temp.path())
        .args(["docs", "out.md", "--separator", "===="])
        .assert()
        .success();

    let doc = fs::read_to_string(temp.path().join("out.md")).unwrap();
    assert!(doc.starts_with("==== docs/note.txt\n"));
}

#[cfg(feature = "gitignore")]
#[test]
fn cli_gitignore_flag() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/.gitignore"), "*.log\n");
    write_file(&temp.path().join("src/a.log"), "noise\n");
    write_file(&temp.path().join("src/b.txt"), "keep\n");

    cli()
        .current_dir(temp.path())
        .args(["src", "out.md", "--gitignore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 files, skipped 0"));

    let doc = fs::read_to_string(temp.path().join("out.md")).unwrap();
    assert!(doc.contains("b.txt"));
    assert!(!doc.contains("a.log"));
}

#[test]
fn cli_binary_detection_none_emits_everything() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), "a\n");
    fs::write(temp.path().join("src/raw.dat"), b"\x00\x01").unwrap();

    cli()
        .current_dir(temp.path())
        .args(["src", "out.md", "--binary-detection", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 files, skipped 0"));
}
