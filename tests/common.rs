#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rworklog::errors::{AppError, AppResult};
use rworklog::models::record::WorkLogRecord;
use rworklog::store::{DraftStore, WorklogStore};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so the
/// user's real configuration is never read.
pub fn rwl(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rworklog");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh scratch area: returns (home, db path, report dir).
pub fn setup_env(name: &str) -> (String, String, String) {
    let mut base: PathBuf = env::temp_dir();
    base.push(format!("rworklog_{}", name));
    fs::remove_dir_all(&base).ok();
    fs::create_dir_all(&base).expect("create scratch dir");

    let home = base.join("home");
    fs::create_dir_all(&home).expect("create home");

    let db = base.join("rworklog.sqlite");
    let dir = base.join("reports");

    (
        home.to_string_lossy().to_string(),
        db.to_string_lossy().to_string(),
        dir.to_string_lossy().to_string(),
    )
}

pub fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub fn sample_record() -> WorkLogRecord {
    WorkLogRecord {
        report_date: date(1, 1, 2025),
        in_time: Some(hm(9, 0)),
        out_time: Some(hm(18, 0)),
        break_start: Some(hm(13, 0)),
        break_end: Some(hm(14, 0)),
        tasks_completed: vec!["Task A".into(), "Task B".into()],
        tasks_planned: vec!["Task C".into(), "Task D".into()],
    }
}

pub const SAMPLE_TEXT: &str = "Work Status [01-01-2025]
===================
Yesterday
IN: 9:00 AM
OUT: 6:00 PM
BREAK: 1:00 PM - 2:00 PM
--------------------------------
* Task A
* Task B

Today
--------------------------------
* Task C
* Task D

Total Work Hours: 8h 0m
";

/// In-memory report store; `fail_writes` simulates a full disk.
#[derive(Default)]
pub struct MemoryStore {
    pub files: RefCell<BTreeMap<String, String>>,
    pub fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (name, content) in files {
            store
                .files
                .borrow_mut()
                .insert(name.to_string(), content.to_string());
        }
        store
    }

    pub fn content(&self, key: &str) -> Option<String> {
        self.files.borrow().get(key).cloned()
    }
}

impl WorklogStore for MemoryStore {
    fn persist(&self, date: NaiveDate, content: &str) -> AppResult<PathBuf> {
        if self.fail_writes.get() {
            return Err(AppError::PersistenceFailure("disk full".into()));
        }
        let stamp = date.format("%d-%m-%Y");
        let mut files = self.files.borrow_mut();
        files.insert(format!("Work_Status_{stamp}.txt"), content.to_string());
        files.insert(format!("Work_Status_{stamp}.md"), content.to_string());
        Ok(PathBuf::from(format!("Work_Status_{stamp}.txt")))
    }

    fn list_entries(&self) -> AppResult<Vec<String>> {
        Ok(self.files.borrow().keys().cloned().collect())
    }

    fn read_content(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.files.borrow().get(key).cloned())
    }
}

/// In-memory draft autosave that counts its writes.
#[derive(Default)]
pub struct MemoryDrafts {
    pub draft: RefCell<Option<WorkLogRecord>>,
    pub saves: Cell<usize>,
}

impl MemoryDrafts {
    pub fn with(record: WorkLogRecord) -> Self {
        Self {
            draft: RefCell::new(Some(record)),
            saves: Cell::new(0),
        }
    }
}

impl DraftStore for MemoryDrafts {
    fn load_draft(&self) -> AppResult<Option<WorkLogRecord>> {
        Ok(self.draft.borrow().clone())
    }

    fn save_draft(&self, record: &WorkLogRecord) -> AppResult<()> {
        *self.draft.borrow_mut() = Some(record.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
