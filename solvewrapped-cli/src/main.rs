//! solvewrapped - Coding Practice Year in Review CLI
//!
//! Generate Spotify Wrapped-style summaries of a year of problem solving
//! from an exported activity file.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Utc};
use clap::Parser;
use solvewrapped_core::analytics::{generate_wrapped, LanguageSource, WrappedConfig, YearlyStats};
use solvewrapped_core::format::{format_count, format_day};
use solvewrapped_core::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solvewrapped")]
#[command(about = "Coding Practice Wrapped - Your Year in Review")]
#[command(version)]
struct Args {
    /// Path to the activity export JSON file
    #[arg(long)]
    input: PathBuf,

    /// Year to generate wrapped for (default: current year)
    #[arg(long)]
    year: Option<i32>,

    /// Treat this instant as "now" for the current-streak computation
    /// (RFC 3339, e.g. 2025-12-31T00:00:00Z; default: actual now)
    #[arg(long)]
    now: Option<String>,

    /// Number of top problems to show
    #[arg(long)]
    top: Option<usize>,

    /// Disable fun mode (no emoji, no milestone messages)
    #[arg(long)]
    serious: bool,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration and set up logging
    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = solvewrapped_core::logging::init(&config.logging).ok();

    // Determine the target year and the "now" instant
    let now = match &args.now {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .with_context(|| format!("invalid --now value: {}", text))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let year = args.year.unwrap_or_else(|| now.year());

    let wrapped_config = WrappedConfig {
        top_problems_count: args.top.unwrap_or(config.wrapped.top_problems_count),
    };

    // Load the export and generate the stats
    let export = solvewrapped_core::load_export(&args.input)
        .with_context(|| format!("failed to read export file {}", args.input.display()))?;
    let stats = generate_wrapped(&export, year, now, &wrapped_config);

    // Output based on export format
    match args.export.as_deref() {
        Some("json") => print_json(&stats)?,
        Some("md") => print_markdown(&stats, !args.serious),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&stats, !args.serious),
    }

    Ok(())
}

fn print_terminal(stats: &YearlyStats, fun_mode: bool) {
    let title = if fun_mode {
        format!("🎉 YOUR {} CODING WRAPPED 🎉", stats.year)
    } else {
        format!("Coding Practice Summary: {}", stats.year)
    };

    // Header
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    // Check if there's any data
    if stats.totals.submissions == 0 {
        println!("  No activity found for {}.", stats.year);
        println!();
        return;
    }

    // The Numbers
    if fun_mode {
        println!("📊 THE NUMBERS");
    } else {
        println!("SUMMARY");
    }
    println!(
        "   Active days: {:<10} Submissions: {}",
        stats.totals.active_days,
        format_count(stats.totals.submissions)
    );
    println!(
        "   Problems:    {:<10} Solved: {}",
        stats.problems.unique_problems, stats.problems.solved_problems
    );
    println!("   Max in a day: {}", stats.totals.max_in_single_day);
    println!();

    // Streaks
    if fun_mode {
        println!("🔥 STREAKS");
    } else {
        println!("STREAKS");
    }
    println!(
        "   Current:  {} day{}",
        stats.streaks.current,
        plural(stats.streaks.current)
    );
    println!(
        "   Longest:  {} day{}",
        stats.streaks.longest,
        plural(stats.streaks.longest)
    );
    if fun_mode {
        println!("   {}", milestone_message(stats.totals.active_days));
    }
    println!();

    // Time Patterns
    if fun_mode {
        println!("⏰ TIME PATTERNS");
    } else {
        println!("TIME PATTERNS");
    }
    if let Some(month) = &stats.best_month {
        println!(
            "   Best month:   {} ({} submissions)",
            month.name, month.submissions
        );
    }
    if let Some(weekday) = &stats.best_weekday {
        println!(
            "   Best weekday: {} ({} submissions)",
            weekday.name, weekday.submissions
        );
    }
    if let Some(day) = &stats.best_day {
        println!(
            "   Best day:     {} ({} submissions)",
            format_day(day.day),
            day.submissions
        );
    }
    println!();

    // Problems
    if let Some(retried) = &stats.problems.most_retried {
        if retried.retries_before_accept > 0 {
            if fun_mode {
                println!("🧩 MOST RETRIED");
            } else {
                println!("MOST RETRIED");
            }
            println!(
                "   {} - {} attempt{} before you cracked it",
                retried.title,
                retried.retries_before_accept,
                plural(retried.retries_before_accept)
            );
            println!();
        }
    }

    if !stats.problems.top_by_volume.is_empty() {
        if fun_mode {
            println!("🏆 TOP PROBLEMS");
        } else {
            println!("TOP PROBLEMS");
        }
        for (i, group) in stats.problems.top_by_volume.iter().enumerate() {
            let rank = match i {
                0 if fun_mode => "🥇".to_string(),
                1 if fun_mode => "🥈".to_string(),
                2 if fun_mode => "🥉".to_string(),
                _ => format!("{}.", i + 1),
            };
            println!(
                "   {} {:<30} {:>4}",
                rank, group.title, group.total_attempts
            );
        }
        println!();
    }

    // Languages
    if !stats.languages.entries.is_empty() {
        if fun_mode {
            println!("💬 LANGUAGES");
        } else {
            println!("LANGUAGES");
        }
        for entry in &stats.languages.entries {
            println!("   {:<20} {:>6}", entry.label, entry.count);
        }
        if stats.languages.source == LanguageSource::AllTime {
            println!("   (all-time counts; no language data for {})", stats.year);
        }
        println!();
    }

    // Topics
    if !stats.topics.is_empty() {
        if fun_mode {
            println!("🧠 TOP TOPICS");
        } else {
            println!("TOP TOPICS");
        }
        for topic in stats.topics.iter().take(6) {
            println!("   {:<25} {:>6}", topic.label, topic.count);
        }
        println!();
    }
}

fn print_markdown(stats: &YearlyStats, fun_mode: bool) {
    let title = if fun_mode {
        format!("🎉 {} Coding Wrapped 🎉", stats.year)
    } else {
        format!("Coding Practice Summary: {}", stats.year)
    };

    println!("# {}", title);
    println!();

    if stats.totals.submissions == 0 {
        println!("*No activity found for {}.*", stats.year);
        return;
    }

    // Summary table
    println!("## Summary");
    println!();
    println!("| Metric | Value |");
    println!("|--------|-------|");
    println!("| Active days | {} |", stats.totals.active_days);
    println!("| Submissions | {} |", stats.totals.submissions);
    println!("| Max in a day | {} |", stats.totals.max_in_single_day);
    println!("| Problems attempted | {} |", stats.problems.unique_problems);
    println!("| Problems solved | {} |", stats.problems.solved_problems);
    println!("| Current streak | {} days |", stats.streaks.current);
    println!("| Longest streak | {} days |", stats.streaks.longest);
    println!();

    // Time Patterns
    println!("## Time Patterns");
    println!();
    if let Some(month) = &stats.best_month {
        println!("- **Best month:** {} ({} submissions)", month.name, month.submissions);
    }
    if let Some(weekday) = &stats.best_weekday {
        println!(
            "- **Best weekday:** {} ({} submissions)",
            weekday.name, weekday.submissions
        );
    }
    if let Some(day) = &stats.best_day {
        println!(
            "- **Best day:** {} ({} submissions)",
            format_day(day.day),
            day.submissions
        );
    }
    println!();

    // Problems
    if let Some(retried) = &stats.problems.most_retried {
        if retried.retries_before_accept > 0 {
            println!("## Most Retried");
            println!();
            println!(
                "**{}** - {} attempts before the first accept",
                retried.title, retried.retries_before_accept
            );
            println!();
        }
    }

    if !stats.problems.top_by_volume.is_empty() {
        println!("## Top Problems");
        println!();
        for (i, group) in stats.problems.top_by_volume.iter().enumerate() {
            let emoji = match i {
                0 => "🥇",
                1 => "🥈",
                2 => "🥉",
                _ => "  ",
            };
            if fun_mode {
                println!(
                    "{} **{}** - {} submissions",
                    emoji, group.title, group.total_attempts
                );
            } else {
                println!(
                    "{}. **{}** - {} submissions",
                    i + 1,
                    group.title,
                    group.total_attempts
                );
            }
        }
        println!();
    }

    // Languages
    if !stats.languages.entries.is_empty() {
        println!("## Languages");
        println!();
        for entry in &stats.languages.entries {
            println!("- **{}** - {}", entry.label, entry.count);
        }
        println!();
    }

    // Topics
    if !stats.topics.is_empty() {
        println!("## Top Topics");
        println!();
        for topic in stats.topics.iter().take(6) {
            println!("- **{}** - {}", topic.label, topic.count);
        }
        println!();
    }

    println!("---");
    println!("*Generated by solvewrapped*");
}

fn print_json(stats: &YearlyStats) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn milestone_message(active_days: u32) -> &'static str {
    if active_days >= 300 {
        "Legendary! Almost every day of the year!"
    } else if active_days >= 200 {
        "Incredible dedication - 200+ days!"
    } else if active_days >= 100 {
        "Triple digits! A true grinder."
    } else if active_days >= 50 {
        "50+ days of coding excellence."
    } else if active_days >= 1 {
        "Every day counts. Keep it up!"
    } else {
        "Start your journey today!"
    }
}
