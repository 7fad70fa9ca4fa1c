// Allow deprecated cargo_bin - the deprecation is for custom build-dir edge case
// which doesn't apply to this project. See: https://docs.rs/assert_cmd
#![allow(deprecated)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_config_show_prints_effective_yaml() {
    let temp = tempfile::tempdir().unwrap();
    let projects_file = temp.path().join("projects.yaml");
    fs::write(&projects_file, "projects: []\n").unwrap();

    let config_path = temp.path().join("config.yaml");
    fs::write(
        &config_path,
        format!(
            "schedule:\n  time: \"07:15\"\ndelivery:\n  terminal:\n    enabled: true\nprojects:\n  file: {}\n",
            projects_file.display()
        ),
    )
    .unwrap();

    Command::cargo_bin("herald")
        .unwrap()
        .args(["config", "show"])
        .env("HERALD_CONFIG", &config_path)
        .assert()
        .success()
        // Explicit value plus a filled-in default from the schema.
        .stdout(predicate::str::contains("07:15"))
        .stdout(predicate::str::contains("US/Eastern"));
}

#[test]
fn test_config_show_fails_on_invalid_config() {
    let temp = tempfile::tempdir().unwrap();
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "schedule:\n  time: \"25:99\"\n").unwrap();

    Command::cargo_bin("herald")
        .unwrap()
        .args(["config", "show"])
        .env("HERALD_CONFIG", &config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration:"));
}
