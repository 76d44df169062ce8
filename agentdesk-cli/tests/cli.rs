use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// The returned directory must outlive the command; dropping it removes the file.
fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn extract_numbered_items_from_file() {
    let (_dir, fixture) = write_fixture(
        "ideas.txt",
        "Intro line.\n1. Message tagging.\n2. Notification preferences.\n\nThanks!\n",
    );
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("extract").arg(&fixture);

    cmd.assert()
        .success()
        .stdout("Message tagging.\nNotification preferences.\n");
}

#[test]
fn extract_bulleted_items_from_stdin() {
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("extract")
        .arg("-")
        .arg("--style")
        .arg("bulleted")
        .write_stdin("Sub-tasks:\n- Research models.\n* Fine-tune models.\n");

    cmd.assert()
        .success()
        .stdout("Research models.\nFine-tune models.\n");
}

#[test]
fn extract_strips_annotation_as_json() {
    let (_dir, fixture) = write_fixture(
        "outline.txt",
        "1. Journey (Tasks: UI, API)\n2. Dinner? (And Why It's Hard)\n",
    );
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("extract")
        .arg(&fixture)
        .arg("--strip")
        .arg("Tasks:")
        .arg("--format")
        .arg("json");

    cmd.assert().success().stdout(
        predicate::str::contains("\"Journey\"")
            .and(predicate::str::contains("\"Dinner? (And Why It's Hard)\""))
            .and(predicate::str::contains("Tasks:").not()),
    );
}

#[test]
fn extract_without_matches_prints_nothing() {
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("extract").arg("-").write_stdin("just prose\n");

    cmd.assert().success().stdout("");
}

#[test]
fn extract_missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("extract").arg("/nonexistent/agentdesk.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn ask_sub_tasks_ignores_input() {
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("ask").arg("sub-tasks").arg("Develop image processing pipeline.");

    cmd.assert().success().stdout(
        predicate::str::starts_with(
            "1. Research and select appropriate pre-trained summarization models (e.g., T5, BART).\n",
        )
        .and(predicate::str::contains("4. Integrate the summarization API")),
    );
}

#[test]
fn demo_runs_without_pauses() {
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("demo").arg("--no-pause").arg("--fast");

    cmd.assert().success().stdout(
        predicate::str::contains("Stage 1: Comms Hub (Brainstorming)")
            .and(predicate::str::contains(
                "GEMINI: \"Certainly! Here are some sub-tasks:\"",
            ))
            .and(predicate::str::contains("Thank you for watching!"))
            .and(predicate::str::contains("Press Enter").not()),
    );
}

#[test]
fn config_file_renames_assistant() {
    let (_dir, fixture) = write_fixture("config.toml", "[narration]\nassistant_name = \"HELPER\"\n");
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("demo")
        .arg("--no-pause")
        .arg("--fast")
        .arg("--config")
        .arg(&fixture);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("HELPER: \"Analyzing the discussion..."));
}

#[test]
fn no_pause_beats_interactive_config() {
    let (_dir, fixture) = write_fixture(
        "config.toml",
        "[pacing]\ninteractive = true\nscene_ms = 0\nheader_ms = 0\n",
    );
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("demo")
        .arg("--config")
        .arg(&fixture)
        .arg("--no-pause")
        .arg("--fast");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Press Enter").not());
}

#[test]
fn fixtures_are_removed_after_use() {
    let (dir, fixture) = write_fixture("ideas.txt", "1. Only item\n");
    let mut cmd = cargo_bin_cmd!("agentdesk");
    cmd.arg("extract").arg(&fixture);
    cmd.assert().success().stdout("Only item\n");

    drop(dir);
    assert!(!fixture.exists());
}
