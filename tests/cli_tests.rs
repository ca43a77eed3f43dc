//! Integration tests for the orthopairs CLI
//!
//! These tests validate the command-line interface and end-to-end
//! extraction behavior against small synthetic OrthoFinder layouts.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Test helper to get the CLI binary
fn orthopairs_cmd() -> Command {
    Command::cargo_bin("orthopairs").unwrap()
}

/// Lay out one proteome subdirectory with a single prediction spreadsheet.
fn write_predictions(root: &Path, subdir: &str, name: &str, content: &str) {
    let dir = root.join(subdir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_end_to_end_extraction() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("Orthologues");
    write_predictions(
        &root,
        "Orthologues_sp1",
        "sp1__v__sp2.tsv",
        "Orthogroup\tSpecies1\tSpecies2\nOG1\tsp|P12345|GENE1, sp|P67890|GENE2\tsp|Q11111|GENE3\n",
    );
    let out_file = temp.path().join("pairs.txt");

    orthopairs_cmd()
        .arg("--predictions")
        .arg(&root)
        .arg("--out_file")
        .arg(&out_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pairs written"));

    assert_eq!(
        fs::read_to_string(&out_file).unwrap(),
        "P12345\tQ11111\nP67890\tQ11111\n"
    );
}

#[test]
fn test_repeated_runs_append() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("Orthologues");
    write_predictions(
        &root,
        "Orthologues_sp1",
        "sp1__v__sp2.tsv",
        "OG1\tsp|P1|G1\tsp|Q1|G2\n",
    );
    let out_file = temp.path().join("pairs.txt");

    for _ in 0..2 {
        orthopairs_cmd()
            .arg("--predictions")
            .arg(&root)
            .arg("--out_file")
            .arg(&out_file)
            .assert()
            .success();
    }

    let content = fs::read_to_string(&out_file).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_malformed_rows_do_not_fail_the_run() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("Orthologues");
    write_predictions(
        &root,
        "Orthologues_sp1",
        "sp1__v__sp2.tsv",
        "OG1\tshort-row\nOG2\tsp|P1|G1\tsp|Q1|G2\n",
    );
    let out_file = temp.path().join("pairs.txt");

    orthopairs_cmd()
        .arg("--predictions")
        .arg(&root)
        .arg("--out_file")
        .arg(&out_file)
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed row"));

    assert_eq!(fs::read_to_string(&out_file).unwrap(), "P1\tQ1\n");
}

#[test]
fn test_missing_predictions_root_fails() {
    let temp = tempdir().unwrap();

    orthopairs_cmd()
        .arg("--predictions")
        .arg(temp.path().join("absent"))
        .arg("--out_file")
        .arg(temp.path().join("pairs.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_missing_arguments_is_a_usage_error() {
    orthopairs_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--predictions"));
}

#[test]
fn test_quiet_suppresses_summary() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("Orthologues");
    write_predictions(
        &root,
        "Orthologues_sp1",
        "sp1__v__sp2.tsv",
        "OG1\tsp|P1|G1\tsp|Q1|G2\n",
    );

    orthopairs_cmd()
        .arg("--quiet")
        .arg("--predictions")
        .arg(&root)
        .arg("--out_file")
        .arg(temp.path().join("pairs.txt"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
