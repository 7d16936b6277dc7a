//! Integration tests for the greet_engine binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn greet_engine() -> Command {
    let mut cmd = Command::cargo_bin("greet_engine").unwrap();
    cmd.env_remove("GREETINGS_DATA_DIR")
        .env_remove("GREETINGS_SNAPSHOT")
        .env_remove("GREETINGS_MIN_TOKEN_CHARS")
        .env_remove("GREETINGS_WORD_CHARS");
    cmd
}

#[test]
fn test_has_command() {
    greet_engine()
        .args(["has", "Well, hello there!"])
        .assert()
        .success()
        .stdout("true\n");

    greet_engine()
        .args(["has", "this is a test"])
        .assert()
        .failure()
        .stdout("false\n");
}

#[test]
fn test_match_command_lists_phrase_and_language() {
    greet_engine()
        .args(["match", "Good "])
        .assert()
        .success()
        .stdout(predicate::str::contains("good morning\tEnglish"))
        .stdout(predicate::str::contains("good evening\tEnglish"));
}

#[test]
fn test_lang_command() {
    greet_engine()
        .args(["lang", "FRENCH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("French (4 greetings)"))
        .stdout(predicate::str::contains("bonjour"));

    greet_engine()
        .args(["lang", "Klingon"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No language named 'Klingon'"));
}

#[test]
fn test_data_dir_and_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    fs::write(
        data_dir.join("k.json"),
        r#"[{"name":"Korean","greetings":[{"phrase":"annyeong","script":"안녕"}]}]"#,
    )
    .unwrap();
    let snapshot = temp_dir.path().join("cache").join("greetings.bin");

    greet_engine()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["find", "Annyeong"])
        .assert()
        .success()
        .stdout("annyeong\tKorean\n");
    assert!(snapshot.exists());

    // the snapshot alone is enough now
    fs::remove_dir_all(&data_dir).unwrap();
    greet_engine()
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["is", "annyeong"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_missing_data_dir_fails() {
    let temp_dir = TempDir::new().unwrap();
    greet_engine()
        .arg("--data-dir")
        .arg(temp_dir.path().join("nope"))
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}
