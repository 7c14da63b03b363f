//! Analytics module for solvewrapped
//!
//! Year-scoped activity aggregation over the raw feeds:
//! - UTC day bucketing (the shared primitive everything else builds on)
//! - Streak analysis (longest and current consecutive-active-day runs)
//! - Temporal rollups (month, weekday, best single day)
//! - Per-problem grouping and retry analysis
//! - Category merging for languages and topic tags
//! - Wrapped (year in review) orchestration
//!
//! Every function here is pure and synchronous: no I/O, no ambient clock
//! reads, no shared state. The same inputs always produce the same
//! [`wrapped::YearlyStats`], and ties are broken in first-seen order rather
//! than by map iteration order.

pub mod categories;
pub mod daybucket;
pub mod problems;
pub mod streaks;
pub mod temporal;
pub mod wrapped;

pub use categories::{merge, normalize_language, normalize_topic, CategoryCount};
pub use daybucket::{bucket_by_day, DayKey};
pub use problems::{classify, MostRetried, ProblemAttemptGroup, ProblemStats};
pub use streaks::{streaks, StreakStats};
pub use temporal::{
    aggregate, month_name, weekday_name, BestDay, CalendarTotals, TemporalStats,
};
pub use wrapped::{
    generate_wrapped, BucketHighlight, LanguageBreakdown, LanguageSource, WrappedConfig,
    YearlyStats,
};
