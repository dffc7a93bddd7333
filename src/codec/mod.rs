//! Text codec for work status reports.
//!
//! `encode` renders the canonical layout, `decode` recovers a record from a
//! (possibly hand-edited) report on a best-effort basis.

mod decode;
mod encode;

pub use decode::{DecodedRecord, decode};
pub use encode::encode;

pub(crate) const HEADER_PREFIX: &str = "Work Status";
pub(crate) const HEADER_RULE: &str = "===================";
pub(crate) const SECTION_RULE: &str = "--------------------------------";
pub(crate) const YESTERDAY: &str = "Yesterday";
pub(crate) const TODAY: &str = "Today";
pub(crate) const TOTAL: &str = "Total Work Hours";
pub(crate) const TASK_BULLET: &str = "* ";
