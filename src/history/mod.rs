pub mod catalog;
pub mod naming;

pub use catalog::HistoryCatalog;
