//! Formatting helpers shared across report renderers.

use crate::analytics::daybucket::DayKey;
use crate::analytics::temporal::month_name;

/// Format a count for display (e.g., "1.2K", "3.4M").
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Format a day for display (e.g., "June 14th").
pub fn format_day(day: DayKey) -> String {
    format!(
        "{} {}",
        month_name(day.month0() as u8),
        ordinal(day.day_of_month())
    )
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
