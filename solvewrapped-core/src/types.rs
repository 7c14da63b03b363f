//! Raw feed types for solvewrapped
//!
//! These types mirror the upstream platform's per-user API payloads. They are
//! the input side of the pipeline: the analytics layer consumes them and
//! derives year-scoped statistics, never mutating or retaining them.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Submission** | One attempt at a problem: timestamp, outcome, language |
//! | **Problem** | Identified by a stable slug; many submissions may share it |
//! | **Calendar** | Map of epoch-second timestamps to per-day submission counts |
//! | **Skill tag** | A topic label ("Dynamic Programming") with a solve count |
//! | **Export** | The combined object holding all of a user's feeds |
//!
//! Deserialization is tolerant: unknown fields are ignored, missing sections
//! default to empty, and the ingest layer skips individual malformed records
//! rather than failing the whole export.

use serde::{Deserialize, Serialize};

// ============================================
// Calendar feed
// ============================================

/// The platform's submission-calendar feed for one user.
///
/// `submission_calendar` arrives from the upstream API as a *stringified*
/// JSON object (`"{\"1735689600\": 3, ...}"`), though an already-parsed
/// object is accepted too. Use [`crate::calendar::parse_submission_calendar`]
/// to turn it into a usable map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarFeed {
    /// Years in which the user had any activity
    pub active_years: Vec<i32>,
    /// All-time streak as reported by the platform (pass-through context;
    /// year-scoped streaks are recomputed by the engine)
    pub streak: u32,
    /// All-time active-day count as reported by the platform
    pub total_active_days: u32,
    /// Timestamp→count map, possibly stringified
    pub submission_calendar: serde_json::Value,
}

// ============================================
// Submissions feed
// ============================================

/// One submission record from the platform's submission list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
    /// Problem display title
    #[serde(default)]
    pub title: String,
    /// Stable problem identity
    pub title_slug: String,
    /// Outcome as displayed ("Accepted", "Wrong Answer", ...)
    #[serde(default)]
    pub status_display: String,
    /// Raw language label ("python3", "cpp", ...)
    #[serde(default)]
    pub lang: String,
    /// Epoch seconds; the upstream API sends this as a string
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
}

impl RawSubmission {
    /// Whether this attempt was accepted. Comparison is exact on the
    /// display string, matching the upstream API contract.
    pub fn is_accepted(&self) -> bool {
        self.status_display == "Accepted"
    }
}

/// Accepts `"1735689600"` or `1735689600`.
fn epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        Int(i64),
        Str(String),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::Int(ts) => Ok(ts),
        StringOrInt::Str(s) => s.parse::<i64>().map_err(serde::de::Error::custom),
    }
}

/// The submission-list section of an export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionFeed {
    /// Number of records in `submission`
    pub count: usize,
    /// Submission records, newest first as delivered by the platform
    pub submission: Vec<RawSubmission>,
}

// ============================================
// Language and skill feeds
// ============================================

/// All-time per-language solve counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageFeed {
    pub language_problem_count: Vec<LanguageCount>,
}

/// One language entry in the language feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCount {
    pub language_name: String,
    #[serde(default)]
    pub problems_solved: u64,
}

/// Topic/skill-tag counts, tiered by the platform into three levels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillFeed {
    pub fundamental: Vec<TagCount>,
    pub intermediate: Vec<TagCount>,
    pub advanced: Vec<TagCount>,
}

impl SkillFeed {
    /// All tiers flattened, fundamental first.
    pub fn all_tags(&self) -> impl Iterator<Item = &TagCount> {
        self.fundamental
            .iter()
            .chain(self.intermediate.iter())
            .chain(self.advanced.iter())
    }
}

/// One topic entry in the skill feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCount {
    pub tag_name: String,
    #[serde(default)]
    pub problems_solved: u64,
}

// ============================================
// Combined export
// ============================================

/// A user's combined activity export: every feed the aggregation consumes.
///
/// All sections default to empty; a missing or malformed section yields
/// zero-valued statistics for that slice rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityExport {
    pub calendar: CalendarFeed,
    pub submissions: SubmissionFeed,
    pub language_stats: LanguageFeed,
    pub skill_stats: SkillFeed,
}

// ============================================
// Activity level
// ============================================

/// Heatmap bucket for a day's submission count.
///
/// The thresholds are part of the contract consumers rely on: 0 none,
/// >0 low, ≥3 medium, ≥5 high, ≥10 very high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ActivityLevel {
    /// Classify a day's submission count.
    pub fn from_count(count: u64) -> Self {
        if count >= 10 {
            ActivityLevel::VeryHigh
        } else if count >= 5 {
            ActivityLevel::High
        } else if count >= 3 {
            ActivityLevel::Medium
        } else if count > 0 {
            ActivityLevel::Low
        } else {
            ActivityLevel::None
        }
    }

    /// Numeric level 0-4, for renderers that index into a palette.
    pub fn as_index(&self) -> u8 {
        match self {
            ActivityLevel::None => 0,
            ActivityLevel::Low => 1,
            ActivityLevel::Medium => 2,
            ActivityLevel::High => 3,
            ActivityLevel::VeryHigh => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_timestamp_forms() {
        let from_string: RawSubmission = serde_json::from_str(
            r#"{"title":"Two Sum","titleSlug":"two-sum","statusDisplay":"Accepted","lang":"python3","timestamp":"1735689600"}"#,
        )
        .unwrap();
        assert_eq!(from_string.timestamp, 1735689600);
        assert!(from_string.is_accepted());

        let from_int: RawSubmission = serde_json::from_str(
            r#"{"titleSlug":"two-sum","statusDisplay":"Wrong Answer","timestamp":1735689600}"#,
        )
        .unwrap();
        assert_eq!(from_int.timestamp, 1735689600);
        assert!(!from_int.is_accepted());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let sub: RawSubmission = serde_json::from_str(
            r#"{"id":"123","titleSlug":"two-sum","timestamp":"7","runtime":"52 ms","url":"/x"}"#,
        )
        .unwrap();
        assert_eq!(sub.title_slug, "two-sum");
        assert_eq!(sub.timestamp, 7);
    }

    #[test]
    fn test_activity_level_thresholds() {
        assert_eq!(ActivityLevel::from_count(0), ActivityLevel::None);
        assert_eq!(ActivityLevel::from_count(1), ActivityLevel::Low);
        assert_eq!(ActivityLevel::from_count(2), ActivityLevel::Low);
        assert_eq!(ActivityLevel::from_count(3), ActivityLevel::Medium);
        assert_eq!(ActivityLevel::from_count(5), ActivityLevel::High);
        assert_eq!(ActivityLevel::from_count(9), ActivityLevel::High);
        assert_eq!(ActivityLevel::from_count(10), ActivityLevel::VeryHigh);
        assert_eq!(ActivityLevel::from_count(10).as_index(), 4);
    }

    #[test]
    fn test_skill_feed_flatten() {
        let feed: SkillFeed = serde_json::from_str(
            r#"{
                "fundamental": [{"tagName": "Array", "problemsSolved": 10}],
                "intermediate": [{"tagName": "Hash Table", "problemsSolved": 4}],
                "advanced": [{"tagName": "Dynamic Programming", "problemsSolved": 2}]
            }"#,
        )
        .unwrap();
        let tags: Vec<&str> = feed.all_tags().map(|t| t.tag_name.as_str()).collect();
        assert_eq!(tags, vec!["Array", "Hash Table", "Dynamic Programming"]);
    }
}
