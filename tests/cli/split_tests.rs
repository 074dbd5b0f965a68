use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{read_chunks, write_input};

#[test]
fn splits_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "input.txt", b"Hello, itpey!");

    Command::new(env!("CARGO_BIN_EXE_chunker"))
        .current_dir(dir.path())
        .args(["input.txt", "outputChunk", "5"])
        .assert()
        .success()
        .stdout("Chunk outputChunk_1 created.\nChunk outputChunk_2 created.\nChunk outputChunk_3 created.\n");

    assert_eq!(
        read_chunks(&dir.path().join("outputChunk")),
        vec![b"Hello".to_vec(), b", ite".to_vec(), b"pey!".to_vec()]
    );
}

#[test]
fn kilobyte_chunks_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let data: Vec<u8> = (0..5_000u32).map(|i| (i % 251) as u8).collect();
    let input = write_input(dir.path(), "data.bin", &data);
    let prefix = dir.path().join("parts").join("data");
    std::fs::create_dir(dir.path().join("parts")).unwrap();

    Command::new(env!("CARGO_BIN_EXE_chunker"))
        .arg(&input)
        .arg(&prefix)
        .arg("2 kb")
        .assert()
        .success()
        .stdout(predicate::str::contains("data_3 created."));

    let chunks = read_chunks(&prefix);
    let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2048, 2048, 904]);
    assert_eq!(chunks.concat(), data);
}

#[test]
fn empty_input_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "empty.txt", b"");

    Command::new(env!("CARGO_BIN_EXE_chunker"))
        .current_dir(dir.path())
        .args(["empty.txt", "piece", "1MB"])
        .assert()
        .success()
        .stdout("");

    assert!(read_chunks(&dir.path().join("piece")).is_empty());
}

#[test]
fn unwritable_prefix_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "input.txt", b"abc");

    Command::new(env!("CARGO_BIN_EXE_chunker"))
        .current_dir(dir.path())
        .args(["input.txt", "missing-dir/chunk", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("error: error creating output file 'missing-dir/chunk_1'"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "input.txt", b"abcdef");

    Command::new(env!("CARGO_BIN_EXE_chunker"))
        .current_dir(dir.path())
        .env("CHUNKER_LOG", "debug")
        .args(["input.txt", "log", "4"])
        .assert()
        .success()
        .stdout("Chunk log_1 created.\nChunk log_2 created.\n")
        .stderr(predicate::str::contains("split input.txt into 2 chunk(s)"));
}

#[cfg(unix)]
#[test]
fn write_failure_keeps_partial_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let data: Vec<u8> = (0..5_000u32).map(|i| (i % 251) as u8).collect();
    write_input(dir.path(), "input.bin", &data);

    // Cap the file size below one chunk; the kernel accepts a short write and
    // then fails the next one with EFBIG.
    Command::new("sh")
        .current_dir(dir.path())
        .arg("-c")
        .arg(r#"trap '' XFSZ; ulimit -f 2; exec "$0" "$@""#)
        .arg(env!("CARGO_BIN_EXE_chunker"))
        .args(["input.bin", "part", "4KB"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("error: error writing chunk 'part_1'"));

    let chunks = read_chunks(&dir.path().join("part"));
    assert_eq!(chunks.len(), 1, "the partial chunk must stay on disk");
    assert!(!chunks[0].is_empty());
    assert!(chunks[0].len() < 4096);
    assert_eq!(chunks[0], data[..chunks[0].len()]);
}
