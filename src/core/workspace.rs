//! Everything a command needs to work on the day cursor: the database, the
//! report directory and the persisted cursor session.

use crate::config::Config;
use crate::core::cursor::DayCursor;
use crate::db::draft::SqliteDraftStore;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::session::{SessionState, load_session, save_session};
use crate::errors::AppResult;
use crate::history::HistoryCatalog;
use crate::models::cursor_mode::{CursorMode, HistoryDatePolicy};
use crate::store::FsWorklogStore;
use crate::ui::messages::warning;
use crate::utils::date;

pub type Cursor<'c> = DayCursor<SqliteDraftStore<'c>>;

pub struct Workspace {
    pub pool: DbPool,
    pub store: FsWorklogStore,
    pub policy: HistoryDatePolicy,
}

impl Workspace {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::open_initialized(&cfg.database_path())?;
        Ok(Self {
            pool,
            store: FsWorklogStore::new(cfg.storage_path()),
            policy: cfg.history_date,
        })
    }

    pub fn catalog(&self) -> AppResult<HistoryCatalog> {
        HistoryCatalog::scan(&self.store)
    }

    /// Rebuild the cursor as the previous command left it.
    ///
    /// A history report that can no longer be read sends the cursor back to
    /// the draft, with a warning.
    pub fn cursor(&self) -> AppResult<Cursor<'_>> {
        let mut cursor = DayCursor::open(SqliteDraftStore::new(&self.pool.conn), date::today())?;

        let session = load_session(&self.pool.conn)?;
        if let (CursorMode::ViewingHistory, Some(key)) = (session.mode, &session.history_key) {
            let catalog = self.catalog()?;
            let restored = match catalog.entries().iter().find(|e| &e.storage_key == key) {
                Some(entry) => cursor.load_history(&self.store, entry, self.policy).map(|_| ()),
                None => Err(crate::errors::AppError::EntryNotFound(key.clone())),
            };

            if let Err(e) = restored {
                warning(format!("Cannot reopen '{}' ({}), back to the draft.", key, e));
                save_session(&self.pool.conn, &SessionState::default())?;
            }
        }

        Ok(cursor)
    }

    /// Persist the cursor mode for the next invocation.
    pub fn save_cursor(&self, cursor: &Cursor<'_>) -> AppResult<()> {
        let state = SessionState {
            mode: cursor.mode(),
            history_key: cursor.viewing().map(|e| e.storage_key.clone()),
        };
        save_session(&self.pool.conn, &state)
    }

    pub fn log(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}
