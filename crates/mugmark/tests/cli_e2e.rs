#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Env {
    root: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("mugmark"));
        cmd.env("MUGMARK_DATA", self.root.path().join("data"))
            .env_remove("MUGMARK_DEFAULT_KIND")
            .env_remove("MUGMARK_SITE_NAME")
            .env_remove("MUGMARK_SITE_DATA_PATH")
            .env_remove("MUGMARK_CONFIRM_DELETE")
            .env_remove("RUST_LOG")
            .current_dir(self.root.path())
            .arg("--no-color");
        cmd
    }

    fn write(&self, name: &str, content: &str) -> std::path::PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_empty_list_by_default() {
    let env = Env::new();
    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No records."))
        .stdout(predicate::str::contains("Showing 0/0"));
}

#[test]
fn test_new_set_show_across_invocations() {
    let env = Env::new();
    env.cmd()
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created w-001"));
    env.cmd()
        .args(["set", "title", "Colors"])
        .assert()
        .success();
    env.cmd()
        .args(["set", "tags", "art, kids,"])
        .assert()
        .success();

    env.cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Colors (selected)"))
        .stdout(predicate::str::contains("\"art\""));
}

#[test]
fn test_import_then_export() {
    let env = Env::new();
    env.write(
        "worksheets.json",
        r#"[{"id": "w-1", "title": "Colors", "image": "/img/c.png"}]"#,
    );

    env.cmd()
        .args(["import", "worksheets.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 worksheets from worksheets.json"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Colors"))
        .stdout(predicate::str::contains("Loaded: worksheets.json • Showing 1/1"));

    env.cmd()
        .args(["export", "--out", "site"])
        .assert()
        .success();
    let written = fs::read_to_string(env.root.path().join("site/worksheets.json")).unwrap();
    assert!(written.contains("\"image\": \"/img/c.png\""));
}

#[test]
fn test_import_infers_kind_from_file_name() {
    let env = Env::new();
    env.write("recipes.json", r#"[{"id": "r-1", "title": "Soup"}]"#);

    env.cmd().args(["import", "recipes.json"]).assert().success();
    env.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("recipes (exports recipes.json)"));
}

#[test]
fn test_import_rejects_non_array() {
    let env = Env::new();
    env.write("bad.json", r#"{"id": "w-1"}"#);

    env.cmd()
        .args(["import", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be an array"));
}

#[test]
fn test_export_lists_every_problem() {
    let env = Env::new();
    env.write("worksheets.json", r#"[{"id": "w-1"}, {"title": "No id"}]"#);
    env.cmd().args(["import", "worksheets.json"]).assert().success();

    env.cmd()
        .args(["export", "--out", "site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fix these issues before export"))
        .stderr(predicate::str::contains("Worksheet w-1: missing title"))
        .stderr(predicate::str::contains("Worksheet #2: missing id"));
    assert!(!env.root.path().join("site/worksheets.json").exists());
}

#[test]
fn test_validate_fails_with_issues() {
    let env = Env::new();
    env.cmd().arg("new").assert().success();
    env.cmd()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Worksheet w-001: missing title"));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let env = Env::new();
    env.cmd().arg("new").assert().success();

    env.cmd()
        .args(["delete"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Delete \"w-001\"? This cannot be undone.",
        ))
        .stdout(predicate::str::contains("Cancelled."));

    env.cmd()
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted \"w-001\""));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0/0"));
}

#[test]
fn test_kind_flag_does_not_persist_for_reads() {
    let env = Env::new();
    env.cmd().arg("new").assert().success();

    env.cmd()
        .args(["--kind", "recipes", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0/0"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("w-001"));
}

#[test]
fn test_switch_guards_unsaved_draft() {
    let env = Env::new();
    env.cmd().arg("new").assert().success();

    env.cmd()
        .args(["switch", "comics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    env.cmd()
        .args(["switch", "comics", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to comics"));
}

#[test]
fn test_kind_flag_guards_unsaved_draft() {
    let env = Env::new();
    env.cmd().arg("new").assert().success();
    env.cmd().args(["set", "title", "unsaved"]).assert().success();

    env.cmd()
        .args(["--kind", "recipes", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    // Reads on another kind leave the draft alone.
    env.cmd()
        .args(["--kind", "recipes", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0/0"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("unsaved"));

    env.cmd()
        .args(["--kind", "recipes", "new", "--yes"])
        .assert()
        .success();
    env.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("recipes"));
}

#[test]
fn test_manifest_warns_about_spaces() {
    let env = Env::new();
    env.write(
        "worksheets.json",
        r#"[{"id": "w-1", "title": "T", "image": "/img/a b.png"}]"#,
    );
    env.cmd().args(["import", "worksheets.json"]).assert().success();

    env.cmd()
        .args(["manifest", "--out", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL contains spaces: /img/a b.png"));

    let text =
        fs::read_to_string(env.root.path().join("site/upload-manifest-worksheets.txt")).unwrap();
    assert!(text.starts_with("Mug & Marker Upload Manifest\nDataset: worksheets\n"));
}

#[test]
fn test_local_config_file_sets_site_name() {
    let env = Env::new();
    env.write("mugmark.toml", "site_name = \"Test Site\"\n");

    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("site_name = Test Site"));
    env.cmd()
        .args(["config", "gen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("site_data_path"));
}

#[test]
fn test_row_editing() {
    let env = Env::new();
    env.cmd().args(["switch", "recipes"]).assert().success();
    env.cmd().arg("new").assert().success();
    env.cmd().args(["row", "add", "ingredients"]).assert().success();
    env.cmd()
        .args(["row", "set", "ingredients", "1", "2 cups flour"])
        .assert()
        .success();

    env.cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cups flour"));

    env.cmd()
        .args(["row", "remove", "ingredients", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ingredients has no row 2"));
}
