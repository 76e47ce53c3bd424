use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_daybook"))
}

/// A scratch database plus an isolated environment for one test.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    fn data_path(&self) -> PathBuf {
        self.dir.path().join("data").join("daybook.db")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.arg("--data")
            .arg(self.data_path())
            .env("DAYBOOK_CONFIG", self.dir.path().join("missing.toml"))
            .env("NO_COLOR", "1")
            .env_remove("DAYBOOK_DATA")
            .env_remove("DAYBOOK_LOG")
            .env_remove("GEMINI_API_KEY");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run daybook")
    }

    fn run_ok(&self, args: &[&str]) -> Output {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "daybook {:?} failed: stdout={}, stderr={}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self.run_ok(args);
        serde_json::from_slice(&output.stdout).expect("parse json output")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_cli_diary_add_list_show_edit_delete() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&[
        "diary",
        "add",
        "--content",
        "Hello from CLI",
        "--date",
        "2024-05-01",
        "--rating",
        "4",
        "--tag",
        "Work",
    ]);

    let list = sandbox.json(&["diary", "list", "--json"]);
    let array = list.as_array().expect("list output array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["date"], "2024-05-01");
    assert_eq!(array[0]["tags"][0], "Work");
    let entry_id = array[0]["id"].as_str().expect("entry id").to_string();

    let show = sandbox.run_ok(&["diary", "show", &entry_id]);
    assert!(stdout(&show).contains("Hello from CLI"));

    sandbox.run_ok(&["diary", "edit", &entry_id, "--content", "Changed", "--rating", "9"]);
    let shown = sandbox.json(&["diary", "show", &entry_id[..8], "--json"]);
    assert_eq!(shown["id"], entry_id.as_str());
    assert_eq!(shown["content"], "Changed");
    assert_eq!(shown["rating"], 5);
    assert_eq!(shown["date"], "2024-05-01");

    sandbox.run_ok(&["diary", "delete", &entry_id]);
    let missing = sandbox.run(&["diary", "show", &entry_id]);
    assert_eq!(missing.status.code(), Some(3));
    assert!(stderr(&missing).contains("daybook diary list"));
}

#[test]
fn test_cli_blank_entry_is_not_saved() {
    let sandbox = Sandbox::new();
    let add = sandbox.run_ok(&["diary", "add", "--content", "   "]);
    assert!(stdout(&add).contains("Nothing to save"));

    let list = sandbox.json(&["diary", "list", "--json"]);
    assert_eq!(list, Value::Array(Vec::new()));
}

#[test]
fn test_cli_workout_only_entry() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&[
        "diary",
        "add",
        "--no-input",
        "--body-part",
        "legs",
        "--exercise",
        "Squat=60x8,70x5",
    ]);

    let list = sandbox.json(&["diary", "list", "--json"]);
    let entry = &list[0];
    assert_eq!(entry["content"], "");
    assert_eq!(entry["workout"]["bodyParts"][0], "Legs");
    assert_eq!(entry["workout"]["exercises"][0]["sets"][1]["reps"], 5.0);
}

#[test]
fn test_cli_edit_removes_and_updates_sets() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&[
        "diary",
        "add",
        "--content",
        "push day",
        "--exercise",
        "Bench=60x8,70x5",
        "--exercise",
        "Dips=0x12",
    ]);
    let list = sandbox.json(&["diary", "list", "--json"]);
    let entry_id = list[0]["id"].as_str().expect("entry id").to_string();

    sandbox.run_ok(&[
        "diary",
        "edit",
        &entry_id,
        "--remove-set",
        "1:1",
        "--set-reps",
        "1:1=6",
        "--remove-set",
        "2:1",
    ]);
    let shown = sandbox.json(&["diary", "show", &entry_id, "--json"]);
    let exercises = shown["workout"]["exercises"]
        .as_array()
        .expect("exercises array");
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0]["name"], "Bench");
    assert_eq!(exercises[0]["sets"][0]["weight"], 70.0);
    assert_eq!(exercises[0]["sets"][0]["reps"], 6.0);

    let missing = sandbox.run(&["diary", "edit", &entry_id, "--remove-exercise", "3"]);
    assert_eq!(missing.status.code(), Some(4));
}

#[test]
fn test_cli_unknown_body_part_is_invalid_input() {
    let sandbox = Sandbox::new();
    let add = sandbox.run(&["diary", "add", "--content", "x", "--body-part", "tail"]);
    assert_eq!(add.status.code(), Some(4));
}

#[test]
fn test_cli_calendar_marks_entry_days() {
    let sandbox = Sandbox::new();
    for date in ["2024-05-03", "2024-05-03", "2024-05-20", "2024-06-01"] {
        sandbox.run_ok(&["diary", "add", "--content", "day", "--date", date]);
    }

    let calendar = sandbox.json(&["diary", "calendar", "--month", "2024-05", "--json"]);
    assert_eq!(calendar["month"], "2024-05");
    assert_eq!(calendar["daysInMonth"], 31);
    assert_eq!(
        calendar["daysWithEntries"],
        serde_json::json!(["2024-05-03", "2024-05-20"])
    );

    let day = sandbox.json(&["diary", "list", "--date", "2024-05-03", "--json"]);
    assert_eq!(day.as_array().map(Vec::len), Some(2));
}

#[test]
fn test_cli_health_same_day_upsert() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["health", "record", "--date", "2024-05-01", "--weight", "70"]);
    sandbox.run_ok(&["health", "record", "--date", "2024-05-01", "--weight", "72"]);

    let history = sandbox.json(&["health", "history", "--json"]);
    assert_eq!(history["total"], 1);
    assert_eq!(history["records"][0]["weight"], 72.0);
    assert_eq!(history["records"][0]["date"], "2024-05-01");
}

#[test]
fn test_cli_health_delete_resyncs_current() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&[
        "health", "record", "--date", "2024-05-01", "--weight", "70", "--gender", "female",
    ]);
    sandbox.run_ok(&["health", "record", "--date", "2024-05-03", "--weight", "69"]);
    sandbox.run_ok(&["health", "record", "--date", "2024-05-02", "--weight", "71"]);

    let history = sandbox.json(&["health", "history", "--json"]);
    let dates: Vec<&str> = history["records"]
        .as_array()
        .expect("records")
        .iter()
        .filter_map(|r| r["date"].as_str())
        .collect();
    assert_eq!(dates, vec!["2024-05-03", "2024-05-02", "2024-05-01"]);

    // Last saved, not newest by date.
    let shown = sandbox.json(&["health", "show", "--json"]);
    assert_eq!(shown["current"]["weight"], 71.0);
    assert_eq!(shown["ranges"]["body_fat"], "20% - 30%");

    let refused = sandbox.run(&["health", "delete", "2024-05-03"]);
    assert_eq!(refused.status.code(), Some(4));

    sandbox.run_ok(&["health", "delete", "2024-05-03", "--yes"]);
    let shown = sandbox.json(&["health", "show", "--json"]);
    assert_eq!(shown["current"]["date"], "2024-05-02");

    let missing = sandbox.run(&["health", "delete", "2024-01-01", "--yes"]);
    assert_eq!(missing.status.code(), Some(3));
}

#[test]
fn test_cli_health_negative_values_clamped() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&[
        "health",
        "record",
        "--date",
        "2024-05-01",
        "--weight",
        "-5",
        "--body-fat",
        "-1",
    ]);
    let shown = sandbox.json(&["health", "show", "--json"]);
    assert_eq!(shown["current"]["weight"], 0.0);
    assert_eq!(shown["current"]["bodyFatPercentage"], 0.0);
}

#[test]
fn test_cli_advice_without_key_is_unavailable() {
    let sandbox = Sandbox::new();
    let advice = sandbox.run(&["health", "advice"]);
    assert_eq!(advice.status.code(), Some(5));
}

#[test]
fn test_cli_export_writes_all_keys() {
    let sandbox = Sandbox::new();
    sandbox.run_ok(&["diary", "add", "--content", "exported"]);
    sandbox.run_ok(&["health", "record", "--weight", "70"]);

    let destination = sandbox.dir.path().join("out").join("export.json");
    sandbox.run_ok(&["export", destination.to_str().expect("utf-8 path")]);

    let text = std::fs::read_to_string(&destination).expect("read export");
    let value: Value = serde_json::from_str(&text).expect("parse export");
    assert_eq!(value["diary_entries"][0]["content"], "exported");
    assert_eq!(value["health_metrics"]["weight"], 70.0);
    assert_eq!(value["health_history"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_cli_rejects_unknown_format() {
    let sandbox = Sandbox::new();
    let list = sandbox.run(&["diary", "list", "--format", "yaml"]);
    assert_eq!(list.status.code(), Some(4));
}

#[test]
fn test_cli_without_terminal_prints_quickstart() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_ok(&[]);
    assert!(stdout(&output).contains("Quickstart"));
}
