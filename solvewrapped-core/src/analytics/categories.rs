//! Category label merging and normalization
//!
//! The platform reports the same logical category under different raw
//! spellings ("python" and "python3", say). This module normalizes labels
//! and sums their counts, once, for both languages and topic tags.

use serde::Serialize;
use std::collections::HashMap;

/// A normalized category label with its merged count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

/// Normalize labels and sum counts per normalized label.
///
/// Output is sorted descending by count; equal counts keep the order in
/// which their normalized labels were first seen.
pub fn merge<'a, I, F>(entries: I, normalize: F) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = (&'a str, u64)>,
    F: Fn(&str) -> String,
{
    let mut merged: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (label, count) in entries {
        let canonical = normalize(label);
        match index.get(&canonical) {
            Some(&at) => merged[at].count += count,
            None => {
                index.insert(canonical.clone(), merged.len());
                merged.push(CategoryCount {
                    label: canonical,
                    count,
                });
            }
        }
    }

    // Stable sort keeps first-seen order on ties
    merged.sort_by(|a, b| b.count.cmp(&a.count));
    merged
}

/// Canonical display name for a language slug.
///
/// Unrecognized labels pass through trimmed but otherwise unchanged.
pub fn normalize_language(raw: &str) -> String {
    let slug = raw.trim();
    let canonical = match slug.to_ascii_lowercase().as_str() {
        "python" | "python3" | "pythondata" => "Python",
        "cpp" | "c++" => "C++",
        "c" => "C",
        "csharp" | "c#" => "C#",
        "java" => "Java",
        "javascript" => "JavaScript",
        "typescript" => "TypeScript",
        "golang" | "go" => "Go",
        "rust" => "Rust",
        "kotlin" => "Kotlin",
        "swift" => "Swift",
        "scala" => "Scala",
        "ruby" => "Ruby",
        "php" => "PHP",
        "dart" => "Dart",
        "racket" => "Racket",
        "erlang" => "Erlang",
        "elixir" => "Elixir",
        "bash" => "Bash",
        "r" => "R",
        "mysql" => "MySQL",
        "mssql" => "MS SQL Server",
        "oraclesql" => "Oracle SQL",
        "postgresql" => "PostgreSQL",
        _ => return slug.to_string(),
    };
    canonical.to_string()
}

/// Topic tags are already canonical; trim whitespace only.
pub fn normalize_topic(raw: &str) -> String {
    raw.trim().to_string()
}
