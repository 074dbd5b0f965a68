use assert_cmd::Command;
use predicates::prelude::*;

fn chunker() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chunker"))
}

#[test]
fn no_arguments_shows_usage() {
    chunker()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: chunker <inputFilePath> <outputPrefix> <chunkSize>"))
        .stdout(predicate::str::contains("error:").not());
}

#[test]
fn help_flag_shows_usage() {
    chunker()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CHUNKER - USAGE"));
}

#[test]
fn too_many_arguments_shows_usage() {
    chunker()
        .args(["a", "b", "1KB", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: chunker"));
}

#[test]
fn invalid_size_shows_error_and_usage() {
    chunker()
        .args(["input.txt", "outputChunk", "invalid"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("error: invalid size format: 'invalid'"))
        .stdout(predicate::str::contains("Usage: chunker"));
}

#[test]
fn missing_input_shows_error_only() {
    let dir = tempfile::tempdir().unwrap();
    chunker()
        .current_dir(dir.path())
        .args(["does-not-exist.bin", "outputChunk", "5MB"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("error: error opening input file 'does-not-exist.bin'"))
        .stdout(predicate::str::contains("Usage:").not());
    assert!(!dir.path().join("outputChunk_1").exists());
}
