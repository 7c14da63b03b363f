//! Streak analysis over active UTC days
//!
//! Two numbers: the longest run of consecutive active days, and the run the
//! user is currently on. "Currently" is relative to a caller-supplied `now`
//! instant, never an ambient clock read, so the computation stays
//! deterministic and testable.

use super::daybucket::DayKey;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Longest and current consecutive-active-day streaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakStats {
    /// Length of the longest run of consecutive active days
    pub longest: u32,
    /// Length of the run ending at the UTC day of `now` (or the day before,
    /// see grace period below)
    pub current: u32,
}

/// Compute streaks from a set of active days.
///
/// A single active day is a streak of 1; no active days is 0.
///
/// The current streak is not considered broken until a full day passes with
/// zero activity: it counts backward from today (UTC day of `now`) if today
/// is active, otherwise from yesterday if yesterday is active, otherwise
/// it is 0.
pub fn streaks(days: &BTreeSet<DayKey>, now: DateTime<Utc>) -> StreakStats {
    StreakStats {
        longest: longest_streak(days),
        current: current_streak(days, now),
    }
}

fn longest_streak(days: &BTreeSet<DayKey>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<DayKey> = None;

    for &day in days {
        run = match prev {
            Some(p) if p.next() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    longest
}

fn current_streak(days: &BTreeSet<DayKey>, now: DateTime<Utc>) -> u32 {
    let today = DayKey::from_datetime(now);

    let start = if days.contains(&today) {
        today
    } else {
        match today.prev() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 1u32;
    let mut cursor = start.prev();
    while let Some(day) = cursor {
        if !days.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.prev();
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::from_ymd(y, m, d).unwrap()
    }

    fn days(list: &[(i32, u32, u32)]) -> BTreeSet<DayKey> {
        list.iter().map(|&(y, m, d)| day(y, m, d)).collect()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_days() {
        let stats = streaks(&BTreeSet::new(), at(2025, 1, 5));
        assert_eq!(stats.longest, 0);
        assert_eq!(stats.current, 0);
    }

    #[test]
    fn test_single_day_is_streak_of_one() {
        let active = days(&[(2025, 6, 1)]);
        let stats = streaks(&active, at(2025, 6, 1));
        assert_eq!(stats.longest, 1);
        assert_eq!(stats.current, 1);
    }

    #[test]
    fn test_gap_resets_longest_run() {
        // Jan 1-2 consecutive, Jan 4 isolated; now = Jan 5 with no activity.
        // Yesterday (Jan 4) is active, the day before is not.
        let active = days(&[(2025, 1, 1), (2025, 1, 2), (2025, 1, 4)]);
        let stats = streaks(&active, at(2025, 1, 5));
        assert_eq!(stats.longest, 2);
        assert_eq!(stats.current, 1);
    }

    #[test]
    fn test_current_streak_counts_from_today() {
        let active = days(&[(2025, 1, 8), (2025, 1, 9), (2025, 1, 10)]);
        let stats = streaks(&active, at(2025, 1, 10));
        assert_eq!(stats.current, 3);
        assert_eq!(stats.longest, 3);
    }

    #[test]
    fn test_grace_period_extends_through_today() {
        // No activity yet today, but yesterday closed a 3-day run
        let active = days(&[(2025, 1, 8), (2025, 1, 9), (2025, 1, 10)]);
        let stats = streaks(&active, at(2025, 1, 11));
        assert_eq!(stats.current, 3);
    }

    #[test]
    fn test_full_inactive_day_breaks_streak() {
        let active = days(&[(2025, 1, 8), (2025, 1, 9), (2025, 1, 10)]);
        let stats = streaks(&active, at(2025, 1, 12));
        assert_eq!(stats.current, 0);
        assert_eq!(stats.longest, 3);
    }

    #[test]
    fn test_streak_spans_month_boundary() {
        let active = days(&[(2025, 1, 31), (2025, 2, 1), (2025, 2, 2)]);
        let stats = streaks(&active, at(2025, 2, 2));
        assert_eq!(stats.longest, 3);
        assert_eq!(stats.current, 3);
    }

    #[test]
    fn test_longest_at_least_current() {
        // Holds for any input; spot-check a few shapes
        let cases = [
            days(&[(2025, 1, 1)]),
            days(&[(2025, 1, 1), (2025, 1, 2), (2025, 1, 5)]),
            days(&[(2025, 3, 30), (2025, 3, 31), (2025, 4, 1), (2025, 4, 3)]),
            BTreeSet::new(),
        ];
        for active in &cases {
            let stats = streaks(active, at(2025, 4, 4));
            assert!(stats.longest >= stats.current);
        }
    }
}
