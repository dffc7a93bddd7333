/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Placeholder shown for an unset time field.
pub const UNSET: &str = "--:--";

/// Ritorna formattazione colorata di un valore opzionale.
///
/// Esempio:
/// `colorize_optional(None)` → "<grey>--:--<reset>"
pub fn colorize_optional(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => format!("{GREY}{UNSET}{RESET}"),
    }
}

/// Total worked time:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_total(minutes: i64) -> &'static str {
    if minutes > 0 {
        GREEN
    } else if minutes < 0 {
        RED
    } else {
        RESET
    }
}
