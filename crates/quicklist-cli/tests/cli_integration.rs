use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn quicklist(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quicklist").unwrap();
    cmd.env_remove("QUICKLIST_DEBUG_LOG")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn run_ok(data_dir: &Path, args: &[&str]) -> Value {
    let output = quicklist(data_dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value =
        serde_json::from_str(&String::from_utf8_lossy(&output)).expect("Failed to parse JSON output");
    assert!(json["success"].as_bool().unwrap());
    json
}

fn add(data_dir: &Path, text: &str) -> u64 {
    let json = run_ok(data_dir, &["add", text]);
    json["data"]["id"].as_u64().unwrap()
}

mod item_tests {
    use super::*;

    #[test]
    fn test_add_and_list() {
        let dir = tempdir().unwrap();
        add(dir.path(), "Buy milk");
        add(dir.path(), "Walk dog");

        let json = run_ok(dir.path(), &["list"]);
        assert_eq!(json["data"]["count"], 2);
        assert_eq!(json["data"]["items"][0]["text"], "Buy milk");
        assert_eq!(json["data"]["items"][0]["completed"], false);
        assert_eq!(json["data"]["items"][1]["text"], "Walk dog");
    }

    #[test]
    fn test_add_persists_todos_file() {
        let dir = tempdir().unwrap();
        add(dir.path(), "Buy milk");

        let raw = fs::read_to_string(dir.path().join("todos.json")).unwrap();
        let stored: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored["title"], "");
        assert_eq!(stored["items"][0]["text"], "Buy milk");
    }

    #[test]
    fn test_blank_add_fails_and_writes_nothing() {
        let dir = tempdir().unwrap();
        quicklist(dir.path())
            .args(["add", "   "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be empty"));
        assert!(!dir.path().join("todos.json").exists());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let dir = tempdir().unwrap();
        let id = add(dir.path(), "Stretch").to_string();

        let json = run_ok(dir.path(), &["toggle", "--id", &id]);
        assert_eq!(json["data"]["completed"], true);
        let json = run_ok(dir.path(), &["toggle", "--id", &id]);
        assert_eq!(json["data"]["completed"], false);
    }

    #[test]
    fn test_update_fields() {
        let dir = tempdir().unwrap();
        let id = add(dir.path(), "Draft").to_string();

        let json = run_ok(
            dir.path(),
            &["update", "--id", &id, "--text", "Final", "--completed", "true"],
        );
        assert_eq!(json["data"]["text"], "Final");
        assert_eq!(json["data"]["completed"], true);
    }

    #[test]
    fn test_edit_to_empty_deletes() {
        let dir = tempdir().unwrap();
        let id = add(dir.path(), "Temp").to_string();

        let json = run_ok(dir.path(), &["edit", "--id", &id, ""]);
        assert_eq!(json["data"]["deleted"].as_u64().unwrap().to_string(), id);

        let json = run_ok(dir.path(), &["list"]);
        assert_eq!(json["data"]["count"], 0);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let dir = tempdir().unwrap();
        add(dir.path(), "Only");

        quicklist(dir.path())
            .args(["delete", "--id", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Item not found: 1"));
    }

    #[test]
    fn test_add_and_delete_different_items() {
        let dir = tempdir().unwrap();
        let first = add(dir.path(), "First").to_string();
        add(dir.path(), "Second");

        run_ok(dir.path(), &["delete", "--id", &first]);
        let json = run_ok(dir.path(), &["list"]);
        assert_eq!(json["data"]["count"], 1);
        assert_eq!(json["data"]["items"][0]["text"], "Second");
    }
}

mod list_tests {
    use super::*;

    #[test]
    fn test_title_and_clear() {
        let dir = tempdir().unwrap();
        add(dir.path(), "Eggs");
        let json = run_ok(dir.path(), &["title", "Groceries"]);
        assert_eq!(json["data"]["title"], "Groceries");

        run_ok(dir.path(), &["clear"]);
        assert!(!dir.path().join("todos.json").exists());

        let json = run_ok(dir.path(), &["list"]);
        assert_eq!(json["data"]["title"], "");
        assert_eq!(json["data"]["count"], 0);
    }

    #[test]
    fn test_data_dir_from_env() {
        let dir = tempdir().unwrap();
        Command::cargo_bin("quicklist")
            .unwrap()
            .env("QUICKLIST_DATA_DIR", dir.path())
            .args(["add", "From env"])
            .assert()
            .success();
        assert!(dir.path().join("todos.json").exists());
    }
}

mod export_tests {
    use super::*;

    #[test]
    fn test_raster_export_writes_pdf() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        add(dir.path(), "Pack bags");

        let json = run_ok(
            dir.path(),
            &["export", "--output-dir", out.path().to_str().unwrap()],
        );
        assert_eq!(json["data"]["pages"], 1);
        assert_eq!(json["data"]["mode"], "raster");

        let bytes = fs::read(out.path().join("todo-list.pdf")).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_text_export() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        add(dir.path(), "Pack bags");

        let json = run_ok(
            dir.path(),
            &[
                "export",
                "--mode",
                "text",
                "--output-dir",
                out.path().to_str().unwrap(),
            ],
        );
        assert_eq!(json["data"]["mode"], "text");
        assert!(out.path().join("todo-list.pdf").exists());
    }

    #[test]
    fn test_zero_width_export_has_no_target() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();
        add(dir.path(), "Pack bags");

        quicklist(dir.path())
            .args(["export", "--width", "0", "--output-dir"])
            .arg(out.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("not mounted"));
        assert!(!out.path().join("todo-list.pdf").exists());
    }
}

mod share_tests {
    use super::*;

    #[test]
    fn test_share_link_for_whatsapp() {
        let dir = tempdir().unwrap();
        add(dir.path(), "a");
        add(dir.path(), "b");

        let json = run_ok(dir.path(), &["share", "--method", "whatsapp"]);
        assert_eq!(json["data"]["link"], "https://wa.me/?text=-%20a%0A-%20b");
        assert_eq!(json["data"]["message"], "- a\n- b");
        assert_eq!(json["data"]["opened"], false);
    }

    #[test]
    fn test_unknown_share_method_rejected() {
        let dir = tempdir().unwrap();
        quicklist(dir.path())
            .args(["share", "--method", "fax"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown share method"));
    }
}

#[test]
fn test_completions() {
    let dir = tempdir().unwrap();
    quicklist(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quicklist"));
}
