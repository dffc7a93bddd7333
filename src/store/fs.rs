use crate::errors::{AppError, AppResult};
use crate::history::naming::{Variant, file_name};
use crate::store::WorklogStore;
use chrono::NaiveDate;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reports stored as plain files inside a single directory.
#[derive(Debug, Clone)]
pub struct FsWorklogStore {
    root: PathBuf,
}

impl FsWorklogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write_variants(&self, date: NaiveDate, content: &str) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|e| self.failure(e))?;

        // 1️⃣ stage every variant in a temp file next to its target
        let mut staged: Vec<(NamedTempFile, PathBuf)> = Vec::new();
        for variant in Variant::ALL {
            let mut tmp = NamedTempFile::new_in(&self.root).map_err(|e| self.failure(e))?;
            tmp.write_all(content.as_bytes())
                .and_then(|_| tmp.as_file().sync_all())
                .map_err(|e| self.failure(e))?;
            staged.push((tmp, self.root.join(file_name(date, variant))));
        }

        // 2️⃣ remember what is there now, so a half-done swap can be undone
        let mut backups: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::new();
        for (_, target) in &staged {
            let previous = if target.is_file() {
                Some(fs::read(target).map_err(|e| self.failure(e))?)
            } else {
                None
            };
            backups.push((target.clone(), previous));
        }

        // 3️⃣ swap them in; undo the ones already done on failure
        for (done, (tmp, target)) in staged.into_iter().enumerate() {
            if let Err(e) = tmp.persist(&target) {
                let mut msg = format!("{}: {}", target.display(), e.error);
                if let Err(undo) = restore(&backups[..done]) {
                    msg.push_str(&format!(
                        "; could not restore previous report ({undo}), variants may differ"
                    ));
                }
                return Err(AppError::PersistenceFailure(msg));
            }
        }

        Ok(self.root.join(file_name(date, Variant::Text)))
    }

    fn failure(&self, e: io::Error) -> AppError {
        AppError::PersistenceFailure(format!("{}: {}", self.root.display(), e))
    }
}

/// Put back the files replaced so far: old bytes, or nothing if there was none.
fn restore(backups: &[(PathBuf, Option<Vec<u8>>)]) -> io::Result<()> {
    for (target, previous) in backups {
        match previous {
            Some(bytes) => fs::write(target, bytes)?,
            None => match fs::remove_file(target) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
                _ => {}
            },
        }
    }
    Ok(())
}

fn is_plain_name(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\'])
}

impl WorklogStore for FsWorklogStore {
    fn persist(&self, date: NaiveDate, content: &str) -> AppResult<PathBuf> {
        self.write_variants(date, content)
    }

    fn list_entries(&self) -> AppResult<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        // una voce illeggibile non deve bloccare la lista
        for ent in fs::read_dir(&self.root)?.flatten() {
            if !ent.path().is_file() {
                continue;
            }
            if let Ok(name) = ent.file_name().into_string() {
                names.push(name);
            }
        }

        Ok(names)
    }

    fn read_content(&self, key: &str) -> AppResult<Option<String>> {
        if !is_plain_name(key) {
            return Ok(None);
        }

        // hand-edited files may not be UTF-8; decode what can be decoded
        match fs::read(self.root.join(key)) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
