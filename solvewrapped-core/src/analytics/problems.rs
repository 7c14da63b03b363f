//! Per-problem submission grouping and retry analysis
//!
//! Groups a flat submission list by problem slug, works out how many
//! attempts each problem took before its first accepted submission, and
//! ranks problems by attempt volume. Group order follows first appearance in
//! the input, and every ranking breaks ties in that order, so results are
//! identical run to run.

use crate::types::RawSubmission;
use serde::Serialize;
use std::collections::HashMap;

/// All attempts at one problem, summarized.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemAttemptGroup {
    pub title: String,
    pub title_slug: String,
    /// Total submissions against this problem
    pub total_attempts: u32,
    /// Whether any attempt was accepted
    pub accepted: bool,
    /// Attempts strictly before the first accepted one, in timestamp order.
    /// `None` when the problem was never accepted.
    pub retries_before_accept: Option<u32>,
}

/// The problem that took the most attempts before its first accept.
#[derive(Debug, Clone, Serialize)]
pub struct MostRetried {
    pub title: String,
    pub title_slug: String,
    pub retries_before_accept: u32,
}

/// Derived per-problem statistics for one submission list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProblemStats {
    /// One group per distinct problem, in first-seen input order
    pub by_problem: Vec<ProblemAttemptGroup>,
    /// Highest retries-before-accept among accepted problems; first-seen
    /// group on ties, `None` when nothing was ever accepted
    pub most_retried: Option<MostRetried>,
    /// Groups ranked by total attempts descending, input order on ties
    pub top_by_volume: Vec<ProblemAttemptGroup>,
    /// Number of distinct problems attempted
    pub unique_problems: u32,
    /// Number of distinct problems with at least one accepted attempt
    pub solved_problems: u32,
    /// Total submissions across all problems
    pub total_submissions: u32,
}

/// Group submissions by problem and derive retry and volume rankings.
///
/// `top_n` caps `top_by_volume`. An empty submission list yields empty
/// rankings, not an error.
pub fn classify(submissions: &[RawSubmission], top_n: usize) -> ProblemStats {
    let mut slug_index: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<Vec<&RawSubmission>> = Vec::new();

    for submission in submissions {
        match slug_index.get(submission.title_slug.as_str()) {
            Some(&index) => grouped[index].push(submission),
            None => {
                slug_index.insert(&submission.title_slug, grouped.len());
                grouped.push(vec![submission]);
            }
        }
    }

    let mut by_problem = Vec::with_capacity(grouped.len());
    for mut attempts in grouped {
        // Stable sort keeps input order for equal timestamps
        attempts.sort_by_key(|s| s.timestamp);

        let retries_before_accept = attempts
            .iter()
            .position(|s| s.is_accepted())
            .map(|index| index as u32);

        by_problem.push(ProblemAttemptGroup {
            title: attempts[0].title.clone(),
            title_slug: attempts[0].title_slug.clone(),
            total_attempts: attempts.len() as u32,
            accepted: retries_before_accept.is_some(),
            retries_before_accept,
        });
    }

    let mut most_retried: Option<&ProblemAttemptGroup> = None;
    for group in &by_problem {
        let Some(retries) = group.retries_before_accept else {
            continue;
        };
        let is_better = match most_retried {
            Some(current) => retries > current.retries_before_accept.unwrap_or(0),
            None => true,
        };
        if is_better {
            most_retried = Some(group);
        }
    }
    let most_retried = most_retried.map(|group| MostRetried {
        title: group.title.clone(),
        title_slug: group.title_slug.clone(),
        retries_before_accept: group.retries_before_accept.unwrap_or(0),
    });

    let mut top_by_volume = by_problem.clone();
    // Stable sort keeps first-seen order on equal volume
    top_by_volume.sort_by(|a, b| b.total_attempts.cmp(&a.total_attempts));
    top_by_volume.truncate(top_n);

    let solved_problems = by_problem.iter().filter(|g| g.accepted).count() as u32;

    ProblemStats {
        unique_problems: by_problem.len() as u32,
        solved_problems,
        total_submissions: submissions.len() as u32,
        by_problem,
        most_retried,
        top_by_volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(slug: &str, status: &str, ts: i64) -> RawSubmission {
        RawSubmission {
            title: slug.to_uppercase(),
            title_slug: slug.to_string(),
            status_display: status.to_string(),
            lang: "python3".to_string(),
            timestamp: ts,
        }
    }

    #[test]
    fn test_empty_list() {
        let stats = classify(&[], 5);
        assert!(stats.by_problem.is_empty());
        assert!(stats.most_retried.is_none());
        assert!(stats.top_by_volume.is_empty());
        assert_eq!(stats.total_submissions, 0);
    }

    #[test]
    fn test_retries_before_first_accept() {
        let submissions = vec![
            submission("p1", "Wrong Answer", 1),
            submission("p1", "Wrong Answer", 2),
            submission("p1", "Accepted", 3),
        ];
        let stats = classify(&submissions, 5);

        let retried = stats.most_retried.unwrap();
        assert_eq!(retried.title_slug, "p1");
        assert_eq!(retried.retries_before_accept, 2);
        assert_eq!(stats.solved_problems, 1);
    }

    #[test]
    fn test_retry_count_uses_timestamp_order_not_input_order() {
        // Accept arrives first in the list but last chronologically
        let submissions = vec![
            submission("p1", "Accepted", 30),
            submission("p1", "Wrong Answer", 10),
            submission("p1", "Time Limit Exceeded", 20),
        ];
        let stats = classify(&submissions, 5);
        assert_eq!(stats.by_problem[0].retries_before_accept, Some(2));
    }

    #[test]
    fn test_attempts_after_accept_do_not_count_as_retries() {
        let submissions = vec![
            submission("p1", "Accepted", 1),
            submission("p1", "Wrong Answer", 2),
            submission("p1", "Accepted", 3),
        ];
        let stats = classify(&submissions, 5);
        assert_eq!(stats.by_problem[0].retries_before_accept, Some(0));
        assert_eq!(stats.by_problem[0].total_attempts, 3);
    }

    #[test]
    fn test_never_accepted_excluded_from_retry_ranking() {
        let submissions = vec![
            submission("p1", "Wrong Answer", 1),
            submission("p1", "Wrong Answer", 2),
            submission("p2", "Wrong Answer", 3),
            submission("p2", "Accepted", 4),
        ];
        let stats = classify(&submissions, 5);

        // p1 has more failed attempts but was never accepted
        let retried = stats.most_retried.unwrap();
        assert_eq!(retried.title_slug, "p2");
        assert_eq!(retried.retries_before_accept, 1);
        assert_eq!(stats.solved_problems, 1);
        assert_eq!(stats.unique_problems, 2);
    }

    #[test]
    fn test_most_retried_tie_goes_to_first_seen() {
        let submissions = vec![
            submission("p1", "Wrong Answer", 1),
            submission("p1", "Accepted", 2),
            submission("p2", "Wrong Answer", 3),
            submission("p2", "Accepted", 4),
        ];
        let stats = classify(&submissions, 5);
        assert_eq!(stats.most_retried.unwrap().title_slug, "p1");
    }

    #[test]
    fn test_top_by_volume_is_stable() {
        let submissions = vec![
            submission("p1", "Accepted", 1),
            submission("p2", "Wrong Answer", 2),
            submission("p2", "Accepted", 3),
            submission("p3", "Wrong Answer", 4),
            submission("p3", "Accepted", 5),
            submission("p4", "Accepted", 6),
        ];
        let stats = classify(&submissions, 2);

        // p2 and p3 tie at 2 attempts; p2 appeared first
        assert_eq!(stats.top_by_volume.len(), 2);
        assert_eq!(stats.top_by_volume[0].title_slug, "p2");
        assert_eq!(stats.top_by_volume[1].title_slug, "p3");
    }
}
