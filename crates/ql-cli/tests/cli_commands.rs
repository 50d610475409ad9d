//! Integration tests for the CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ql() -> Command {
    let mut cmd = Command::cargo_bin("ql").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn classes_lists_every_class() {
    ql().arg("classes")
        .assert()
        .success()
        .stdout(predicate::str::contains("fighter"))
        .stdout(predicate::str::contains("wizard"))
        .stdout(predicate::str::contains("rogue"))
        .stdout(predicate::str::contains("cleric"))
        .stdout(predicate::str::contains("Chain Shirt"))
        .stdout(predicate::str::contains("4 classes"));
}

#[test]
fn world_export_prints_json() {
    ql().args(["world", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"start_location\": \"village-square\""))
        .stdout(predicate::str::contains("goblin-chieftain"));
}

#[test]
fn exported_world_passes_check() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");

    ql().args(["world", "export", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    ql().args(["world", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("10 locations"));
}

#[test]
fn check_rejects_a_broken_world() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{
  "start_location": "nowhere",
  "locations": [
    { "id": "hall", "name": "Hall", "description": "A hall.", "exits": { "north": "void" } }
  ],
  "npcs": []
}"#,
    )
    .unwrap();

    ql().args(["world", "check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn check_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();

    ql().args(["world", "check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid world file"));
}

#[test]
fn play_reads_commands_from_stdin() {
    ql().args(["play", "--seed", "7", "--name", "Tester"])
        .write_stdin("look\nn\nfly away\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tester the"))
        .stdout(predicate::str::contains("Seed: 7"))
        .stdout(predicate::str::contains("Village Square"))
        .stdout(predicate::str::contains("The Sleeping Stag"))
        .stdout(predicate::str::contains("Unknown command"))
        .stdout(predicate::str::contains("Farewell"));
}

#[test]
fn play_ends_at_eof() {
    ql().args(["play", "--class", "rogue", "--seed", "1"])
        .write_stdin("stats\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rogue"));
}

#[test]
fn play_prints_a_seed_when_none_is_given() {
    ql().arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Seed: \d+").unwrap());
}

#[test]
fn restart_starts_a_new_game() {
    ql().args(["play", "--seed", "3", "--name", "Tester"])
        .write_stdin("n\nrestart\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your adventure begins!").count(2));
}

#[test]
fn play_with_a_custom_world() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.json");
    fs::write(
        &path,
        r#"{
  "start_location": "cell",
  "locations": [
    { "id": "cell", "name": "Damp Cell", "description": "Water drips.", "exits": { "up": "yard" } },
    { "id": "yard", "name": "Prison Yard", "description": "Open sky at last.", "exits": { "down": "cell" } }
  ],
  "npcs": []
}"#,
    )
    .unwrap();

    ql().args(["play", "--seed", "5", "--world"])
        .arg(&path)
        .write_stdin("up\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Damp Cell"))
        .stdout(predicate::str::contains("Prison Yard"));
}

#[test]
fn unknown_class_fails() {
    ql().args(["play", "--class", "bard", "--seed", "1"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("bard"));
}

#[test]
fn transcript_is_written_on_exit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.log");

    ql().args(["play", "--seed", "7", "--transcript"])
        .arg(&path)
        .write_stdin("look\nfly away\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcript saved to"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[info] "));
    assert!(text.contains("Village Square"));
    assert!(text.lines().any(|l| l.starts_with("[error] ") && l.contains("Unknown command")));
}
