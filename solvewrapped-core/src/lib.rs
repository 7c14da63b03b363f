//! # solvewrapped-core
//!
//! Core library for solvewrapped - a coding-practice year-in-review generator.
//!
//! This library provides:
//! - Raw feed types mirroring the upstream platform's per-user API payloads
//! - Resilient export loading and submission-calendar parsing
//! - The year-scoped aggregation engine (day bucketing, streaks, temporal
//!   rollups, per-problem retry analysis, category merging)
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows through three layers:
//! - **Raw feeds:** the platform's calendar, submission, language, and skill
//!   payloads, loaded tolerantly (malformed slices degrade to empty)
//! - **Day buckets:** one shared UTC timestamp→day primitive that every
//!   statistic builds on
//! - **Derived statistics:** an immutable [`analytics::YearlyStats`] per
//!   (export, target year, "now" instant) triple
//!
//! The aggregation is pure and synchronous; the caller supplies the target
//! year and the "now" instant, and freshness is the caller's concern.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use solvewrapped_core::analytics::{generate_wrapped, WrappedConfig};
//!
//! let export = solvewrapped_core::load_export("export.json".as_ref())
//!     .expect("failed to read export");
//! let stats = generate_wrapped(&export, 2025, Utc::now(), &WrappedConfig::default());
//! println!("{} active days", stats.totals.active_days);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use ingest::{load_export, parse_export};
pub use types::*;

// Public modules
pub mod analytics;
pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod ingest;
pub mod logging;
pub mod types;
