//! End-to-end tests for the `idocr` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CARD_TEXT: &str = "Ram Kumar\nS/o Shyam Lal\n1234 5678 9012\nDOB: 01-02-1990\nMale\n";

fn idocr(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("idocr").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_process_text_file_as_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, CARD_TEXT).unwrap();

    idocr(&dir)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""identifier_number": "1234 5678 9012""#))
        .stdout(predicate::str::contains(r#""date_of_birth": "01/02/1990""#))
        .stdout(predicate::str::contains(r#""guardian_name": "Shyam Lal""#));
}

#[test]
fn test_process_csv_to_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    let output = dir.path().join("card.csv");
    fs::write(&input, CARD_TEXT).unwrap();

    idocr(&dir)
        .args(["process", "--format", "csv", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("identifier_number,name,guardian_name,"));
    assert!(csv.contains("1234 5678 9012"));
}

#[test]
fn test_process_show_missing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, CARD_TEXT).unwrap();

    idocr(&dir)
        .args(["process", "--show-missing"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Missing fields:"))
        .stderr(predicate::str::contains("postal_code"));
}

#[test]
fn test_process_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    idocr(&dir)
        .args(["process", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_process_unsupported_format_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.docx");
    fs::write(&input, [0u8, 1, 2, 3]).unwrap();

    idocr(&dir)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported document format"));
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("idocr.json");

    idocr(&dir)
        .args(["config", "init", "--output"])
        .arg(&config)
        .assert()
        .success();
    assert!(config.exists());

    idocr(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""port": 8000"#));

    idocr(&dir)
        .args(["config", "init", "--output"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_config_path_uses_platform_dir() {
    let dir = TempDir::new().unwrap();

    idocr(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("idocr"))
        .stdout(predicate::str::contains("not created"));
}
