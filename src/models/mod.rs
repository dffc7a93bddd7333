pub mod cursor_mode;
pub mod history_entry;
pub mod record;
