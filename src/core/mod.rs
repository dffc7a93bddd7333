pub mod cursor;
pub mod log;
pub mod workspace;
