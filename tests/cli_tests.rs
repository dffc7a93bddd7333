mod common;
use common::{SAMPLE_TEXT, rwl, setup_env};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// init in test mode, then fill in the sample day through `set`.
fn init_with_sample(name: &str) -> (String, String, String) {
    let (home, db, dir) = setup_env(name);

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    rwl(&home)
        .args([
            "--db", &db, "--dir", &dir, "set", "--date", "01-01-2025", "--in", "09:00", "--out",
            "18:00", "--break", "13:00-14:00", "--done", "Task A", "--done", "Task B", "--plan",
            "Task C", "--plan", "Task D",
        ])
        .assert()
        .success()
        .stdout(contains("8h 0m"));

    (home, db, dir)
}

#[test]
fn test_init_creates_database_and_report_dir() {
    let (home, db, dir) = setup_env("cli_init");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "--test", "init"])
        .assert()
        .success();

    assert!(Path::new(&db).exists());
    assert!(Path::new(&dir).is_dir());
    // test mode never writes the config file
    assert!(!Path::new(&home).join(".rworklog").join("rworklog.conf").exists());
}

#[test]
fn test_set_then_export_next_writes_canonical_files() {
    let (home, db, dir) = init_with_sample("cli_export_next");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "export", "--next"])
        .assert()
        .success()
        .stdout(contains("Work_Status_01-01-2025.txt"))
        .stdout(contains("Moved to the next day: 02-01-2025"));

    let txt = fs::read_to_string(Path::new(&dir).join("Work_Status_01-01-2025.txt")).unwrap();
    let md = fs::read_to_string(Path::new(&dir).join("Work_Status_01-01-2025.md")).unwrap();
    assert_eq!(txt, SAMPLE_TEXT);
    assert_eq!(md, SAMPLE_TEXT);

    // the draft moved on and is empty
    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "show"])
        .assert()
        .success()
        .stdout(contains("02-01-2025"))
        .stdout(contains("Mode: Draft"))
        .stdout(contains("(none)"));
}

#[test]
fn test_export_stay_keeps_the_draft() {
    let (home, db, dir) = init_with_sample("cli_export_stay");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "export", "--stay"])
        .assert()
        .success();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "show", "--preview"])
        .assert()
        .success()
        .stdout(contains("Work Status [01-01-2025]"))
        .stdout(contains("* Task D"));
}

#[test]
fn test_export_incomplete_record_fails_without_files() {
    let (home, db, dir) = setup_env("cli_export_incomplete");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "--test", "init"])
        .assert()
        .success();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "set", "--date", "05-05-2025", "--in", "09:00"])
        .assert()
        .success();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "export"])
        .assert()
        .failure()
        .stderr(contains("'out' is not set"));

    assert!(!Path::new(&dir).join("Work_Status_05-05-2025.txt").exists());
    assert!(!Path::new(&dir).join("Work_Status_05-05-2025.md").exists());
}

#[test]
fn test_invalid_time_is_rejected() {
    let (home, db, dir) = setup_env("cli_invalid_time");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "--test", "init"])
        .assert()
        .success();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "set", "--in", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_history_lists_one_entry_per_date() {
    let (home, db, dir) = init_with_sample("cli_history");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "export", "--stay"])
        .assert()
        .success();
    fs::write(Path::new(&dir).join("notes.txt"), "not a report").unwrap();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "history", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("identity,display_label,storage_key"))
        .stdout(contains("2025-01-01,01-01-2025,Work_Status_01-01-2025.txt"));

    let out = rwl(&home)
        .args(["--db", &db, "--dir", &dir, "history", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["storage_key"], "Work_Status_01-01-2025.txt");
    assert_eq!(entries[0]["display_label"], "01-01-2025");
}

#[test]
fn test_history_on_empty_dir() {
    let (home, db, dir) = setup_env("cli_history_empty");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "--test", "init"])
        .assert()
        .success();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "history"])
        .assert()
        .success()
        .stdout(contains("No reports found"));
}

#[test]
fn test_open_then_today_round_trip() {
    let (home, db, dir) = init_with_sample("cli_open_today");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "export", "--next"])
        .assert()
        .success();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "open", "01-01-2025"])
        .assert()
        .success()
        .stdout(contains("Mode: Viewing history [Work_Status_01-01-2025.txt]"))
        .stdout(contains("Task C"));

    // the viewing state survives between runs
    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "show"])
        .assert()
        .success()
        .stdout(contains("Viewing history"));

    // history edits never reach the draft
    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "set", "--plan", "Task E"])
        .assert()
        .success()
        .stderr(contains("not saved to the draft"));

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "today"])
        .assert()
        .success()
        .stdout(contains("Mode: Draft"))
        .stdout(contains("Task E").not());
}

#[test]
fn test_open_unknown_date_fails() {
    let (home, db, dir) = init_with_sample("cli_open_unknown");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "open", "03-03-2024"])
        .assert()
        .failure()
        .stderr(contains("No history entry found for 03-03-2024"));
}

#[test]
fn test_open_malformed_report_keeps_draft() {
    let (home, db, dir) = init_with_sample("cli_open_malformed");

    fs::write(
        Path::new(&dir).join("Work_Status_09-09-2024.md"),
        "random notes\nIN: 9:00 AM\n",
    )
    .unwrap();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "open", "09-09-2024"])
        .assert()
        .success()
        .stderr(contains("Cannot open Work_Status_09-09-2024.md"))
        .stdout(contains("Mode: Draft"))
        .stdout(contains("01-01-2025"));
}

#[test]
fn test_log_print_records_operations() {
    let (home, db, dir) = init_with_sample("cli_log");

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "export", "--stay"])
        .assert()
        .success();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("export"));
}

#[test]
fn test_relative_db_is_the_same_for_every_command() {
    let (home, _, dir) = setup_env("cli_relative_db");
    let work = Path::new(&home).join("work");
    fs::create_dir_all(&work).unwrap();

    rwl(&home)
        .current_dir(&work)
        .args(["--db", "rel.sqlite", "--dir", &dir, "--test", "init"])
        .assert()
        .success();

    rwl(&home)
        .current_dir(&work)
        .args(["--db", "rel.sqlite", "--dir", &dir, "set", "--in", "07:15"])
        .assert()
        .success();

    rwl(&home)
        .current_dir(&work)
        .args(["--db", "rel.sqlite", "--dir", &dir, "show"])
        .assert()
        .success()
        .stdout(contains("07:15"));

    // never created next to the working directory
    assert!(!work.join("rel.sqlite").exists());
}

#[test]
fn test_open_non_utf8_report() {
    let (home, db, dir) = init_with_sample("cli_open_latin1");

    let mut bytes = b"**Yesterday**\nIN: 9:00 AM\n* Caff".to_vec();
    bytes.push(0xE8);
    bytes.extend_from_slice(b" break\n**Today**\n* Plan it\n");
    fs::write(Path::new(&dir).join("Work_Status_10-10-2024.txt"), bytes).unwrap();

    rwl(&home)
        .args(["--db", &db, "--dir", &dir, "open", "10-10-2024"])
        .assert()
        .success()
        .stdout(contains("Viewing history"))
        .stdout(contains("Plan it"));
}
