//! UTC day bucketing
//!
//! The single source of truth for "which UTC calendar day does this
//! timestamp belong to". Every statistic that needs day-level granularity
//! goes through [`DayKey`] and [`bucket_by_day`] instead of redoing the
//! timezone conversion, so month, weekday, streak, and per-problem views can
//! never drift apart on day boundaries.

use crate::calendar::SubmissionCalendar;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A UTC calendar day.
///
/// Displays as `YYYY-MM-DD`; ordering is chronological, which for this
/// format coincides with lexicographic ordering of the display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Day containing the given epoch-seconds instant, in UTC.
    ///
    /// Returns `None` for timestamps outside chrono's representable range.
    pub fn from_timestamp(ts: i64) -> Option<DayKey> {
        DateTime::<Utc>::from_timestamp(ts, 0).map(|dt| DayKey(dt.date_naive()))
    }

    /// Day containing the given instant, in UTC.
    pub fn from_datetime(instant: DateTime<Utc>) -> DayKey {
        DayKey(instant.date_naive())
    }

    /// Construct from calendar fields, mainly for tests.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<DayKey> {
        NaiveDate::from_ymd_opt(year, month, day).map(DayKey)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month index (0 = January).
    pub fn month0(&self) -> usize {
        self.0.month0() as usize
    }

    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Weekday index with Sunday = 0, matching the upstream platform's
    /// calendar rendering.
    pub fn weekday_from_sunday(&self) -> usize {
        self.0.weekday().num_days_from_sunday() as usize
    }

    /// The previous calendar day, `None` at the representable minimum.
    pub fn prev(&self) -> Option<DayKey> {
        self.0.pred_opt().map(DayKey)
    }

    /// The next calendar day, `None` at the representable maximum.
    pub fn next(&self) -> Option<DayKey> {
        self.0.succ_opt().map(DayKey)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Bucket a calendar into per-day counts for one target year.
///
/// Entries whose UTC year differs from `year` are discarded; entries landing
/// on the same UTC day are summed, never overwritten. A year with no
/// qualifying entries yields an empty map.
pub fn bucket_by_day(calendar: &SubmissionCalendar, year: i32) -> BTreeMap<DayKey, u64> {
    let mut days = BTreeMap::new();
    for (&timestamp, &count) in calendar {
        let Some(day) = DayKey::from_timestamp(timestamp) else {
            tracing::debug!(timestamp, "skipping out-of-range timestamp");
            continue;
        };
        if day.year() != year {
            continue;
        }
        *days.entry(day).or_insert(0) += count;
    }
    days
}
