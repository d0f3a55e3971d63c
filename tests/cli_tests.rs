use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn create_episode_files(dir: &Path) {
    fs::write(dir.join("lost.s01e02.mkv"), "video").unwrap();
    fs::write(dir.join("lost.s01e02.srt"), "subs").unwrap();
    fs::write(dir.join("notes.txt"), "text").unwrap();
}

/// Command with its settings file kept inside a scratch directory
fn command(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("show-renamer").unwrap();
    cmd.env("SHOW_RENAMER_CONFIG", config_dir.path().join("settings.json"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    let config = tempdir().unwrap();
    command(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rename TV episode files"));
}

#[test]
fn test_version_flag() {
    let config = tempdir().unwrap();
    command(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_target_dir() {
    let config = tempdir().unwrap();
    command(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_nonexistent_target_dir() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();

    command(&config)
        .arg(dir.path().join("missing"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_dry_run_prints_plan_without_changes() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();
    create_episode_files(dir.path());

    command(&config)
        .args(["--dry", "--show", "Lost"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("To: Lost - S01E02.mkv"))
        .stdout(predicate::str::contains("To: Lost - S01E02.srt"))
        .stdout(predicate::str::contains("2 files would be renamed"));

    assert!(dir.path().join("lost.s01e02.mkv").exists());
    assert!(dir.path().join("lost.s01e02.srt").exists());
}

#[test]
fn test_show_renames_video_and_subtitle() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();
    create_episode_files(dir.path());

    command(&config)
        .args(["--show", "Lost"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 2 files"));

    assert!(dir.path().join("Lost - S01E02.mkv").exists());
    assert!(dir.path().join("Lost - S01E02.srt").exists());
    assert!(dir.path().join("notes.txt").exists());

    let settings = fs::read_to_string(config.path().join("settings.json")).unwrap();
    assert!(settings.contains("\"Lost\""));
}

#[test]
fn test_custom_title_and_pattern() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lost.s01e02.mkv"), "video").unwrap();

    command(&config)
        .args(["--show", "Lost", "--title", "LOST", "--pattern", "%T %sx%E"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("LOST 1x02.mkv").exists());
}

#[test]
fn test_subtitle_follows_video_without_show() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Lost.1x02.avi"), "video").unwrap();
    fs::write(dir.path().join("lost-102-eng.srt"), "subs").unwrap();

    command(&config).arg(dir.path()).assert().success();

    assert!(dir.path().join("Lost.1x02.avi").exists());
    assert!(dir.path().join("Lost.1x02.srt").exists());
}

#[test]
fn test_delete_pattern_removes_matching_files() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lost.s01e02.mkv"), "video").unwrap();
    fs::write(dir.path().join("lost.s01e02.sample.mkv"), "video").unwrap();

    command(&config)
        .args(["--show", "Lost", "--delete", "sample"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files deleted"));

    assert!(!dir.path().join("lost.s01e02.sample.mkv").exists());
    assert!(dir.path().join("Lost - S01E02.mkv").exists());
}

#[test]
fn test_invalid_delete_pattern() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();

    command(&config)
        .args(["--delete", "("])
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid --delete pattern"));
}

#[test]
fn test_delete_empty_removes_leftover_folders() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("leftover")).unwrap();
    fs::write(dir.path().join("leftover").join("Thumbs.db"), "junk").unwrap();

    command(&config)
        .arg("--delete-empty")
        .arg(dir.path())
        .assert()
        .success();

    assert!(!dir.path().join("leftover").exists());
}

#[test]
fn test_verbose_flag() {
    let config = tempdir().unwrap();
    let dir = tempdir().unwrap();
    create_episode_files(dir.path());

    command(&config)
        .args(["-vv", "--dry"])
        .arg(dir.path())
        .assert()
        .success();
}
