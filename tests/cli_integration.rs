//! Integration tests for the `nook` CLI.
//!
//! Each test runs `nook` as a subprocess against a temp data directory and
//! verifies stdout, stderr and/or the store file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Env {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn store_path(&self) -> PathBuf {
        self.data_dir().join("store.json")
    }

    /// Run `nook` with the temp data dir and config file.
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_nook"))
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .env_remove("NOOK_DATA_DIR")
            .env_remove("NOOK_LOG")
            .env("XDG_CONFIG_HOME", self.dir.path())
            .output()
            .unwrap()
    }

    /// Run and expect success; returns stdout.
    fn ok(&self, args: &[&str]) -> String {
        let out = self.run(args);
        assert!(
            out.status.success(),
            "nook {:?} failed: {}",
            args,
            String::from_utf8_lossy(&out.stderr)
        );
        String::from_utf8(out.stdout).unwrap()
    }

    /// Run and expect failure; returns stderr.
    fn fails(&self, args: &[&str]) -> String {
        let out = self.run(args);
        assert_eq!(out.status.code(), Some(1), "nook {:?} should fail", args);
        String::from_utf8(out.stderr).unwrap()
    }

    fn stored(&self, key: &str) -> Option<String> {
        read_store(&self.store_path()).get(key).cloned()
    }
}

/// The store file in its on-disk key order.
fn read_store(path: &Path) -> IndexMap<String, String> {
    let Ok(text) = fs::read_to_string(path) else {
        return IndexMap::new();
    };
    serde_json::from_str(&text).unwrap()
}

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

#[test]
fn checklist_add_toggle_delete() {
    let env = Env::new();
    assert_eq!(env.ok(&["add", "Buy", "milk"]), "  1. [ ] Buy milk\n");
    assert_eq!(
        env.stored("checklistItems").as_deref(),
        Some(r#"[{"text":"Buy milk","checked":false}]"#)
    );

    assert_eq!(env.ok(&["toggle", "1"]), "  1. [x] Buy milk\n");
    assert_eq!(
        env.stored("checklistItems").as_deref(),
        Some(r#"[{"text":"Buy milk","checked":true}]"#)
    );

    assert_eq!(env.ok(&["rm", "1"]), "removed: Buy milk\n");
    assert_eq!(env.stored("checklistItems").as_deref(), Some("[]"));
    assert_eq!(env.ok(&["list"]), "");
}

#[test]
fn delete_shifts_later_items_down() {
    let env = Env::new();
    env.ok(&["add", "one"]);
    env.ok(&["add", "two"]);
    env.ok(&["add", "three"]);
    env.ok(&["rm", "2"]);
    assert_eq!(env.ok(&["list"]), "  1. [ ] one\n  2. [ ] three\n");
}

#[test]
fn whitespace_item_is_rejected_without_writing() {
    let env = Env::new();
    let stderr = env.fails(&["add", "   "]);
    assert!(stderr.starts_with("error: nothing to add"), "{}", stderr);
    assert!(env.stored("checklistItems").is_none());
}

#[test]
fn item_numbers_out_of_range() {
    let env = Env::new();
    env.ok(&["add", "only"]);
    assert!(env.fails(&["toggle", "0"]).contains("start at 1"));
    assert!(env.fails(&["rm", "5"]).contains("no item 5 (list has 1)"));
    assert_eq!(
        env.stored("checklistItems").as_deref(),
        Some(r#"[{"text":"only","checked":false}]"#)
    );
}

#[test]
fn list_json() {
    let env = Env::new();
    env.ok(&["add", "a"]);
    env.ok(&["add", "b"]);
    env.ok(&["toggle", "2"]);
    let out = env.ok(&["list", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"number": 1, "text": "a", "checked": false},
            {"number": 2, "text": "b", "checked": true},
        ])
    );
}

// ---------------------------------------------------------------------------
// Notepad
// ---------------------------------------------------------------------------

#[test]
fn notepad_set_show_clear() {
    let env = Env::new();
    assert_eq!(env.ok(&["notepad"]), "");
    env.ok(&["notepad", "--set", "line one\nline two"]);
    assert_eq!(env.stored("notepadContent").as_deref(), Some("line one\nline two"));
    assert_eq!(env.ok(&["notepad"]), "line one\nline two\n");

    env.ok(&["notepad", "--clear"]);
    assert!(env.stored("notepadContent").is_none());
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[test]
fn calendar_notes_are_namespaced_by_month() {
    let env = Env::new();
    env.ok(&["cal-note", "2024-01-15", "Dentist"]);
    assert_eq!(
        env.stored("calendarNotes-2024-0").as_deref(),
        Some(r#"{"15":"Dentist"}"#)
    );
    assert_eq!(env.ok(&["cal-note", "2024-01-15"]), "Dentist\n");
    assert_eq!(env.ok(&["cal-note", "2024-02-15"]), "");

    let january = env.ok(&["cal", "--month", "2024-01"]);
    assert!(january.starts_with("January 2024\nSu  Mo  Tu  We  Th  Fr  Sa\n"), "{}", january);
    assert!(january.contains("15*"));
    assert!(january.ends_with("15: Dentist\n"));

    let february = env.ok(&["cal", "--month", "2024-02"]);
    assert!(!february.contains('*'));
    assert!(february.contains("29"));
    assert!(!february.contains("30"));
}

#[test]
fn empty_note_clears_the_day() {
    let env = Env::new();
    env.ok(&["cal-note", "2026-10-17", "Party"]);
    env.ok(&["cal-note", "2026-10-17", ""]);
    assert_eq!(env.stored("calendarNotes-2026-9").as_deref(), Some("{}"));
}

#[test]
fn calendar_json_grid() {
    let env = Env::new();
    let out = env.ok(&["cal", "--month", "2024-02", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["label"], "February 2024");
    assert_eq!(value["month"], 2);
    // Feb 1 2024 is a Thursday
    assert_eq!(
        value["weeks"][0],
        serde_json::json!([null, null, null, null, 1, 2, 3])
    );
}

#[test]
fn monday_week_start_from_config() {
    let env = Env::new();
    fs::write(env.config_path(), "[calendar]\nweek_start = \"monday\"\n").unwrap();
    let out = env.ok(&["cal", "--month", "2024-02"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "Mo  Tu  We  Th  Fr  Sa  Su");
    assert_eq!(lines[2], "             1   2   3   4");
}

#[test]
fn bad_dates_are_errors() {
    let env = Env::new();
    assert!(env.fails(&["cal", "--month", "2024-13"]).contains("invalid month"));
    assert!(env.fails(&["cal-note", "2023-02-29", "x"]).contains("invalid date"));
    assert!(!env.store_path().exists());
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

#[test]
fn accent_default_and_custom() {
    let env = Env::new();
    assert_eq!(env.ok(&["accent"]), "#4A90E2 rgb(74, 144, 226)\n");
    assert_eq!(env.ok(&["accent", "03f"]), "#03f rgb(0, 51, 255)\n");
    assert_eq!(env.stored("accentColor").as_deref(), Some("#03f"));

    assert!(env.fails(&["accent", "blue"]).contains("not a hex color: blue"));
    assert_eq!(env.stored("accentColor").as_deref(), Some("#03f"));
}

#[test]
fn wallpaper_toggle_persists() {
    let env = Env::new();
    assert_eq!(env.ok(&["wallpaper"]), "video\n");
    assert_eq!(env.ok(&["wallpaper", "toggle"]), "image\n");
    assert_eq!(env.stored("wallpaperState").as_deref(), Some("image"));
    assert_eq!(env.ok(&["wallpaper", "video"]), "video\n");
}

// ---------------------------------------------------------------------------
// Store and config handling
// ---------------------------------------------------------------------------

#[test]
fn keys_share_one_store_file() {
    let env = Env::new();
    env.ok(&["add", "task"]);
    env.ok(&["wallpaper", "image"]);
    env.ok(&["accent", "#E94F64"]);
    let keys: Vec<String> = read_store(&env.store_path()).keys().cloned().collect();
    assert_eq!(keys, vec!["checklistItems", "wallpaperState", "accentColor"]);
}

#[test]
fn malformed_store_is_backed_up() {
    let env = Env::new();
    fs::create_dir_all(env.data_dir()).unwrap();
    fs::write(env.store_path(), "{not json").unwrap();

    assert_eq!(env.ok(&["list"]), "");
    let backup = env.data_dir().join("store.json.bak");
    assert_eq!(fs::read_to_string(backup).unwrap(), "{not json");

    env.ok(&["add", "fresh"]);
    assert_eq!(
        env.stored("checklistItems").as_deref(),
        Some(r#"[{"text":"fresh","checked":false}]"#)
    );
}

#[test]
fn malformed_config_is_an_error() {
    let env = Env::new();
    fs::write(env.config_path(), "[clock\nhour24 = ").unwrap();
    let stderr = env.fails(&["list"]);
    assert!(stderr.starts_with("error: could not parse"), "{}", stderr);
}

#[test]
fn commands_write_to_the_log_file() {
    let env = Env::new();
    env.ok(&["add", "logged"]);
    let log = fs::read_to_string(env.data_dir().join("nook.log")).unwrap();
    assert!(log.contains("added checklist item 1"), "{}", log);
}
