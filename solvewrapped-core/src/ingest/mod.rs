//! Export loading
//!
//! Reads a user's activity export - the combined object holding the
//! platform's calendar, submission, language, and skill feeds - from a JSON
//! file on disk.
//!
//! ## Design Principles
//!
//! 1. **Per-section resilience**: a missing or malformed section degrades to
//!    an empty feed and logs a warning; the other sections still load
//! 2. **Per-record resilience**: a malformed submission record is skipped,
//!    not fatal to the submission list
//! 3. **Errors only at the I/O boundary**: an unreadable file is an error;
//!    unparseable content is an empty export

use crate::error::Result;
use crate::types::{ActivityExport, CalendarFeed, LanguageFeed, RawSubmission, SkillFeed, SubmissionFeed};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Load an activity export from a JSON file.
pub fn load_export(path: &Path) -> Result<ActivityExport> {
    let content = std::fs::read_to_string(path)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "loading activity export");
    Ok(parse_export(&content))
}

/// Parse an activity export from JSON text.
///
/// Never fails: content that is not a JSON object yields an empty export.
pub fn parse_export(content: &str) -> ActivityExport {
    let root: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, "export is not valid JSON, using empty feeds");
            return ActivityExport::default();
        }
    };

    ActivityExport {
        calendar: section::<CalendarFeed>(&root, "calendar"),
        submissions: submissions_section(&root),
        language_stats: section::<LanguageFeed>(&root, "languageStats"),
        skill_stats: section::<SkillFeed>(&root, "skillStats"),
    }
}

fn section<T: DeserializeOwned + Default>(root: &Value, key: &str) -> T {
    let Some(value) = root.get(key) else {
        return T::default();
    };
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::warn!(section = key, %error, "malformed export section, using empty feed");
            T::default()
        }
    }
}

/// Submissions get record-level treatment: one bad record should not wipe
/// out the whole list.
fn submissions_section(root: &Value) -> SubmissionFeed {
    let Some(records) = root
        .get("submissions")
        .and_then(|s| s.get("submission"))
        .and_then(Value::as_array)
    else {
        return SubmissionFeed::default();
    };

    let mut submission = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in records {
        match serde_json::from_value::<RawSubmission>(record.clone()) {
            Ok(parsed) => submission.push(parsed),
            Err(error) => {
                tracing::debug!(%error, "skipping malformed submission record");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, kept = submission.len(), "skipped malformed submission records");
    }

    SubmissionFeed {
        count: submission.len(),
        submission,
    }
}
