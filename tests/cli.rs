// ABOUTME: Integration tests for the docktree CLI commands.
// ABOUTME: Validates --help output, keys listing, rendering, and init behavior.

mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use support::NOW;

fn docktree_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("docktree"))
}

fn write_containers(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("containers.json");
    fs::write(&path, serde_json::to_string(&support::test_containers_json()).unwrap()).unwrap();
    path
}

#[test]
fn help_shows_commands() {
    docktree_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("keys"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn keys_lists_defaults() {
    docktree_cmd()
        .args(["keys", "volumes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("label:       CreatedTime, Driver, VolumeName"))
        .stdout(predicate::str::contains("(default: VolumeName)"));
}

#[test]
fn unknown_kind_is_rejected() {
    docktree_cmd()
        .args(["keys", "pods"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown resource kind"));
}

#[test]
fn render_uses_settings_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let descriptors = write_containers(temp_dir.path());
    fs::write(
        temp_dir.path().join("docktree.yml"),
        "containers:\n  groupBy: Tag\n  label: Repository\n  description: []\n",
    )
    .unwrap();

    docktree_cmd()
        .current_dir(temp_dir.path())
        .args(["render", "containers", "--now", &NOW.to_string(), "-d"])
        .arg(&descriptors)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("8.0\n  node  <stoppedContainer>\ncj8\n"));
}

#[test]
fn render_quiet_without_settings_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let descriptors = write_containers(temp_dir.path());

    docktree_cmd()
        .current_dir(temp_dir.path())
        .args(["render", "containers", "--quiet", "--now", &NOW.to_string(), "-d"])
        .arg(&descriptors)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("node:8.0\nregistry:latest\n"));
}

#[test]
fn render_json_reads_stdin() {
    let input = serde_json::to_string(&support::test_containers_json()).unwrap();
    let output = docktree_cmd()
        .args(["render", "containers", "--json", "--now", &NOW.to_string(), "-d", "-"])
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let nodes: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(nodes.as_array().unwrap().len(), 8);
    assert_eq!(nodes[1]["type"], "leaf");
    assert_eq!(nodes[1]["contextValue"], "runningContainer");
    assert_eq!(nodes[1]["description"], "elegant_knuth - Up 6 minutes");
}

#[test]
fn render_volumes_accepts_engine_envelope() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("volumes.json");
    fs::write(
        &path,
        r#"{
            "Volumes": [
                { "Name": "pgdata", "Driver": "local", "CreatedAt": "2023-11-13T22:13:20Z" },
                { "Name": "logs", "Driver": "local", "CreatedAt": "2023-11-14T21:13:20Z" }
            ],
            "Warnings": null
        }"#,
    )
    .unwrap();

    docktree_cmd()
        .current_dir(temp_dir.path())
        .args(["render", "volumes", "--now", &NOW.to_string(), "-d"])
        .arg(&path)
        .assert()
        .success()
        .stdout("logs  [an hour ago]  <volume>\npgdata  [a day ago]  <volume>\n");
}

#[test]
fn render_rejects_malformed_descriptors() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    docktree_cmd()
        .current_dir(temp_dir.path())
        .args(["render", "images", "-d"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid descriptor list"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("docktree.yml");

    docktree_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "docktree.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("containers:"), "Config should have a containers section");
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("docktree.yml");

    fs::write(&config_path, "existing: config").unwrap();

    docktree_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
