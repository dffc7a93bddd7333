pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod open;
pub mod set;
pub mod show;
pub mod today;
