use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use levelbench::{Codec, ZstdCodec};

fn corpus_text() -> String {
    let mut text = String::new();
    for i in 0..200 {
        text.push_str(&format!(
            "{{\"order\":{i},\"customer\":\"customer-{}\",\"total\":{}.{:02},\"status\":\"shipped\"}}\n",
            i % 13,
            i * 3,
            i % 100
        ));
    }
    text.push_str("{\"order\":200,\"cust");
    text
}

fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("corpus.txt.zst");
    let packed = ZstdCodec.compress(corpus_text().as_bytes(), 3).unwrap();
    fs::write(&path, packed).unwrap();
    path
}

fn bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zstd-levelbench"))
        .args(args)
        .output()
        .expect("failed to run zstd-levelbench")
}

#[test]
fn text_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_corpus(dir.path());

    let out = bench(&[
        input.to_str().unwrap(),
        "--min-level",
        "1",
        "--max-level",
        "4",
        "--verify",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Testing Zstandard Compression Levels 1-4"));
    let level_lines: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("Compression Level: "))
        .collect();
    assert_eq!(level_lines.len(), 4);
    assert!(level_lines[0].starts_with("Compression Level:  1 - Uncompressed: "));
    assert!(level_lines[3].starts_with("Compression Level:  4 - "));
    assert!(stdout.contains("Compression Level without using a dictionary"));
    assert!(stdout.contains("Compression Level using a dictionary"));
}

#[test]
fn plain_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("corpus.txt");
    fs::write(&input, corpus_text()).unwrap();

    let out = bench(&[
        input.to_str().unwrap(),
        "--plain",
        "--min-level",
        "5",
        "--max-level",
        "5",
    ]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let expected_size = levelbench::report::group_thousands(corpus_text().len());
    let level_line = stdout
        .lines()
        .find(|l| l.starts_with("Compression Level:  5 - "))
        .expect("level 5 line");
    assert!(level_line.contains(&format!("Uncompressed: {expected_size} - ")));
    assert!(!stdout.contains("Compression Level:  4 - "));
}

#[test]
fn dictionary_level_defaults_to_three() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_corpus(dir.path());
    let out = bench(&[
        input.to_str().unwrap(),
        "--min-level",
        "1",
        "--max-level",
        "1",
        "-vv",
    ]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("dict_level: 3"), "{stderr}");
}

#[test]
fn log_level_ignores_rust_log() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_corpus(dir.path());
    let out = Command::new(env!("CARGO_BIN_EXE_zstd-levelbench"))
        .args([input.to_str().unwrap(), "--min-level", "1", "--max-level", "1"])
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run zstd-levelbench");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("parsed configuration"), "{stderr}");
    assert!(!stderr.contains("starting level sweep"), "{stderr}");
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.zst");
    let out = bench(&[input.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn unsupported_level_fails_without_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_corpus(dir.path());
    let out = bench(&[input.to_str().unwrap(), "--max-level", "23"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("level 23"));
}

#[test]
fn uncompressed_input_without_plain_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("corpus.txt");
    fs::write(&input, corpus_text()).unwrap();
    let out = bench(&[input.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--plain"));
}
