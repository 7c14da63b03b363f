//! Wrapped - Year in Review
//!
//! Composes every derived statistic into one immutable [`YearlyStats`] for a
//! (raw export, target year, "now" instant) triple. The computation is pure
//! and total: any export, however malformed, produces a result, and
//! recomputing is cheap enough that freshness is entirely the caller's
//! concern.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::categories::{merge, normalize_language, normalize_topic, CategoryCount};
use super::daybucket::{bucket_by_day, DayKey};
use super::problems::{classify, ProblemStats};
use super::streaks::{streaks, StreakStats};
use super::temporal::{aggregate, month_name, weekday_name, BestDay, CalendarTotals};
use crate::calendar::parse_submission_calendar;
use crate::types::{ActivityExport, RawSubmission};

/// Configuration for wrapped generation.
#[derive(Debug, Clone)]
pub struct WrappedConfig {
    /// Number of top problems (by attempt volume) to include
    pub top_problems_count: usize,
}

impl Default for WrappedConfig {
    fn default() -> Self {
        Self {
            top_problems_count: 5,
        }
    }
}

/// A month or weekday bucket that won its ranking.
#[derive(Debug, Clone, Serialize)]
pub struct BucketHighlight {
    pub name: &'static str,
    pub submissions: u64,
}

/// Where the language distribution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSource {
    /// Counted from the target year's submissions
    CurrentYear,
    /// No submissions in the year carried a language; fell back to the
    /// platform's all-time per-language counts
    AllTime,
}

impl LanguageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageSource::CurrentYear => "current_year",
            LanguageSource::AllTime => "all_time",
        }
    }
}

/// Merged language distribution plus its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageBreakdown {
    pub source: LanguageSource,
    pub entries: Vec<CategoryCount>,
}

/// Complete year-in-review statistics.
///
/// Constructed once by [`generate_wrapped`] and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct YearlyStats {
    /// The target year these stats cover
    pub year: i32,
    /// Calendar-derived sums: total submissions, single-day peak, active days
    pub totals: CalendarTotals,
    /// Longest and current consecutive-active-day streaks
    pub streaks: StreakStats,
    /// Month with the most submissions (None when the year is empty)
    pub best_month: Option<BucketHighlight>,
    /// Weekday with the most submissions (None when the year is empty)
    pub best_weekday: Option<BucketHighlight>,
    /// Single day with the most submissions
    pub best_day: Option<BestDay>,
    /// Submission count per month (0 = January)
    pub monthly_distribution: [u64; 12],
    /// Submission count per weekday (0 = Sunday)
    pub weekday_distribution: [u64; 7],
    /// Per-day submission counts; consumers bucket these into heatmap
    /// levels themselves via [`crate::types::ActivityLevel`]
    pub daily_counts: BTreeMap<DayKey, u64>,
    /// Per-problem grouping, retry analysis, and volume rankings
    pub problems: ProblemStats,
    /// Merged language distribution, sorted descending
    pub languages: LanguageBreakdown,
    /// Merged topic distribution, sorted descending
    pub topics: Vec<CategoryCount>,
}

/// Generate year-in-review statistics for one user export.
///
/// `now` drives the current-streak computation and must be supplied by the
/// caller; the engine never reads the wall clock.
pub fn generate_wrapped(
    export: &ActivityExport,
    year: i32,
    now: DateTime<Utc>,
    config: &WrappedConfig,
) -> YearlyStats {
    let calendar = parse_submission_calendar(&export.calendar.submission_calendar);
    let daily_counts = bucket_by_day(&calendar, year);

    let active_days: BTreeSet<DayKey> = daily_counts
        .iter()
        .filter(|(_, &count)| count > 0)
        .map(|(&day, _)| day)
        .collect();
    let streaks = streaks(&active_days, now);

    let temporal = aggregate(&daily_counts);
    let has_activity = temporal.totals.submissions > 0;
    let best_month = has_activity.then(|| BucketHighlight {
        name: month_name(temporal.best_month),
        submissions: temporal.monthly_distribution[temporal.best_month as usize],
    });
    let best_weekday = has_activity.then(|| BucketHighlight {
        name: weekday_name(temporal.best_weekday),
        submissions: temporal.weekday_distribution[temporal.best_weekday as usize],
    });

    let year_submissions: Vec<RawSubmission> = export
        .submissions
        .submission
        .iter()
        .filter(|s| {
            DayKey::from_timestamp(s.timestamp).map_or(false, |day| day.year() == year)
        })
        .cloned()
        .collect();
    let problems = classify(&year_submissions, config.top_problems_count);

    let languages = language_breakdown(export, &year_submissions);
    let topics = merge(
        export
            .skill_stats
            .all_tags()
            .map(|tag| (tag.tag_name.as_str(), tag.problems_solved)),
        normalize_topic,
    );

    tracing::debug!(
        year,
        active_days = temporal.totals.active_days,
        submissions = temporal.totals.submissions,
        problems = problems.unique_problems,
        language_source = languages.source.as_str(),
        "generated yearly stats"
    );

    YearlyStats {
        year,
        totals: temporal.totals,
        streaks,
        best_month,
        best_weekday,
        best_day: temporal.best_day,
        monthly_distribution: temporal.monthly_distribution,
        weekday_distribution: temporal.weekday_distribution,
        daily_counts,
        problems,
        languages,
        topics,
    }
}

/// Languages from the year's submissions, or the all-time feed when the
/// year carries none.
fn language_breakdown(
    export: &ActivityExport,
    year_submissions: &[RawSubmission],
) -> LanguageBreakdown {
    let year_entries = merge(
        year_submissions
            .iter()
            .filter(|s| !s.lang.is_empty())
            .map(|s| (s.lang.as_str(), 1u64)),
        normalize_language,
    );

    if !year_entries.is_empty() {
        return LanguageBreakdown {
            source: LanguageSource::CurrentYear,
            entries: year_entries,
        };
    }

    LanguageBreakdown {
        source: LanguageSource::AllTime,
        entries: merge(
            export
                .language_stats
                .language_problem_count
                .iter()
                .map(|l| (l.language_name.as_str(), l.problems_solved)),
            normalize_language,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_export_yields_zeroed_stats() {
        let export = ActivityExport::default();
        let stats = generate_wrapped(&export, 2025, at(2025, 6, 1), &WrappedConfig::default());

        assert_eq!(stats.year, 2025);
        assert_eq!(stats.totals, CalendarTotals::default());
        assert_eq!(stats.streaks, StreakStats::default());
        assert!(stats.best_month.is_none());
        assert!(stats.best_weekday.is_none());
        assert!(stats.best_day.is_none());
        assert!(stats.daily_counts.is_empty());
        assert!(stats.problems.most_retried.is_none());
        assert!(stats.languages.entries.is_empty());
        assert!(stats.topics.is_empty());
    }

    #[test]
    fn test_language_fallback_to_all_time() {
        let export: ActivityExport = serde_json::from_value(serde_json::json!({
            "languageStats": {
                "languageProblemCount": [
                    {"languageName": "python3", "problemsSolved": 40},
                    {"languageName": "python", "problemsSolved": 10},
                    {"languageName": "cpp", "problemsSolved": 12}
                ]
            }
        }))
        .unwrap();
        let stats = generate_wrapped(&export, 2025, at(2025, 6, 1), &WrappedConfig::default());

        assert_eq!(stats.languages.source, LanguageSource::AllTime);
        assert_eq!(stats.languages.entries[0].label, "Python");
        assert_eq!(stats.languages.entries[0].count, 50);
        assert_eq!(stats.languages.entries[1].label, "C++");
    }

    #[test]
    fn test_year_submissions_drive_languages() {
        let export: ActivityExport = serde_json::from_value(serde_json::json!({
            "submissions": {
                "count": 2,
                "submission": [
                    {"title": "Two Sum", "titleSlug": "two-sum", "statusDisplay": "Accepted",
                     "lang": "rust", "timestamp": "1735689600"},
                    {"title": "Two Sum", "titleSlug": "two-sum", "statusDisplay": "Accepted",
                     "lang": "golang", "timestamp": "1104537600"}
                ]
            },
            "languageStats": {
                "languageProblemCount": [{"languageName": "java", "problemsSolved": 99}]
            }
        }))
        .unwrap();
        let stats = generate_wrapped(&export, 2025, at(2025, 6, 1), &WrappedConfig::default());

        // Only the 2025 submission counts; the 2005 one is filtered out
        assert_eq!(stats.languages.source, LanguageSource::CurrentYear);
        assert_eq!(stats.languages.entries.len(), 1);
        assert_eq!(stats.languages.entries[0].label, "Rust");
        assert_eq!(stats.problems.total_submissions, 1);
    }
}
