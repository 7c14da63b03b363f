//! Month, weekday, and single-day rollups
//!
//! Rolls day-bucketed counts up into 12 month buckets and 7 weekday buckets
//! (Sunday = index 0, matching the upstream platform's calendar), and picks
//! the best of each. Ties always go to the first bucket in chronological or
//! index order; nothing here depends on map iteration order.

use super::daybucket::DayKey;
use serde::Serialize;
use std::collections::BTreeMap;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Month name from a zero-based index.
pub fn month_name(month0: u8) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("Unknown")
}

/// Weekday name from an index with Sunday = 0.
pub fn weekday_name(weekday: u8) -> &'static str {
    WEEKDAY_NAMES.get(weekday as usize).copied().unwrap_or("Unknown")
}

/// The single day with the highest submission count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestDay {
    pub day: DayKey,
    pub submissions: u64,
}

/// Sums over the whole year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalendarTotals {
    /// Sum of all submission counts
    pub submissions: u64,
    /// Highest single-day count
    pub max_in_single_day: u64,
    /// Days with at least one submission
    pub active_days: u32,
}

/// Month/weekday distributions and peaks for one year of bucketed days.
#[derive(Debug, Clone, Serialize)]
pub struct TemporalStats {
    /// Submission count per month (0 = January)
    pub monthly_distribution: [u64; 12],
    /// Submission count per weekday (0 = Sunday)
    pub weekday_distribution: [u64; 7],
    /// Month with the highest total; first such month on ties
    pub best_month: u8,
    /// Weekday with the highest total; first such weekday on ties
    pub best_weekday: u8,
    /// Day with the highest count; earliest such day on ties.
    /// `None` when no day has a positive count.
    pub best_day: Option<BestDay>,
    pub totals: CalendarTotals,
}

/// Roll bucketed days up into month, weekday, and peak statistics.
pub fn aggregate(days: &BTreeMap<DayKey, u64>) -> TemporalStats {
    let mut monthly = [0u64; 12];
    let mut weekday = [0u64; 7];
    let mut best_day: Option<BestDay> = None;
    let mut totals = CalendarTotals::default();

    // BTreeMap iterates in ascending DayKey order, so a strict comparison
    // keeps the earliest day on ties.
    for (&day, &count) in days {
        monthly[day.month0()] += count;
        weekday[day.weekday_from_sunday()] += count;
        totals.submissions += count;
        totals.max_in_single_day = totals.max_in_single_day.max(count);
        if count > 0 {
            totals.active_days += 1;
            if best_day.map_or(true, |best| count > best.submissions) {
                best_day = Some(BestDay {
                    day,
                    submissions: count,
                });
            }
        }
    }

    TemporalStats {
        monthly_distribution: monthly,
        weekday_distribution: weekday,
        best_month: index_of_max(&monthly),
        best_weekday: index_of_max(&weekday),
        best_day,
        totals,
    }
}

/// First index holding the maximum value.
fn index_of_max(distribution: &[u64]) -> u8 {
    let mut best = 0usize;
    for (index, &value) in distribution.iter().enumerate() {
        if value > distribution[best] {
            best = index;
        }
    }
    best as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucketed(entries: &[((i32, u32, u32), u64)]) -> BTreeMap<DayKey, u64> {
        entries
            .iter()
            .map(|&((y, m, d), count)| (DayKey::from_ymd(y, m, d).unwrap(), count))
            .collect()
    }

    #[test]
    fn test_empty_days() {
        let stats = aggregate(&BTreeMap::new());
        assert_eq!(stats.totals, CalendarTotals::default());
        assert_eq!(stats.best_month, 0);
        assert_eq!(stats.best_weekday, 0);
        assert!(stats.best_day.is_none());
    }

    #[test]
    fn test_month_rollup_and_best_month() {
        let days = bucketed(&[
            ((2025, 1, 10), 2),
            ((2025, 1, 20), 3),
            ((2025, 3, 15), 4),
        ]);
        let stats = aggregate(&days);
        assert_eq!(stats.monthly_distribution[0], 5);
        assert_eq!(stats.monthly_distribution[2], 4);
        assert_eq!(stats.best_month, 0);
        assert_eq!(month_name(stats.best_month), "January");
        assert_eq!(stats.totals.submissions, 9);
        assert_eq!(stats.totals.active_days, 3);
    }

    #[test]
    fn test_weekday_rollup() {
        // 2025-01-05 was a Sunday, 2025-01-06 a Monday
        let days = bucketed(&[((2025, 1, 5), 1), ((2025, 1, 6), 6)]);
        let stats = aggregate(&days);
        assert_eq!(stats.weekday_distribution[0], 1);
        assert_eq!(stats.weekday_distribution[1], 6);
        assert_eq!(stats.best_weekday, 1);
        assert_eq!(weekday_name(stats.best_weekday), "Monday");
    }

    #[test]
    fn test_month_tie_goes_to_earlier_month() {
        let days = bucketed(&[((2025, 2, 1), 5), ((2025, 4, 1), 5)]);
        let stats = aggregate(&days);
        assert_eq!(stats.best_month, 1);
    }

    #[test]
    fn test_best_day_tie_goes_to_earlier_day() {
        let days = bucketed(&[((2025, 5, 2), 7), ((2025, 5, 9), 7), ((2025, 5, 1), 3)]);
        let stats = aggregate(&days);
        let best = stats.best_day.unwrap();
        assert_eq!(best.day, DayKey::from_ymd(2025, 5, 2).unwrap());
        assert_eq!(best.submissions, 7);
        assert_eq!(stats.totals.max_in_single_day, 7);
    }

    #[test]
    fn test_zero_count_days_are_not_active() {
        let days = bucketed(&[((2025, 5, 1), 0), ((2025, 5, 2), 2)]);
        let stats = aggregate(&days);
        assert_eq!(stats.totals.active_days, 1);
        assert_eq!(stats.best_day.unwrap().day, DayKey::from_ymd(2025, 5, 2).unwrap());
    }

    #[test]
    fn test_all_zero_counts_have_no_best_day() {
        let days = bucketed(&[((2025, 5, 1), 0)]);
        let stats = aggregate(&days);
        assert!(stats.best_day.is_none());
        assert_eq!(stats.totals.active_days, 0);
    }
}
