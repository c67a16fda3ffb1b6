//! Mastery aggregation — collapses a quiz-attempt history into one strength
//! value per topic. Latest attempt wins outright; strengths are never
//! averaged across attempts.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::quiz::percentage;

/// One historical quiz attempt as persisted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub topic: String,
    pub score: usize,
    pub total: usize,
    pub completed_at: DateTime<Utc>,
}

/// Latest strength percentage for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryRecord {
    pub topic: String,
    /// 0–100, from the most recent attempt only.
    pub strength: u8,
}

/// Groups attempts by topic and keeps the most recent attempt's percentage.
/// Attempts are ordered by `completed_at` before folding, so the result does
/// not depend on the caller's slice ordering. Output sorted by topic for
/// stable rendering.
pub fn aggregate_mastery(attempts: &[QuizAttempt]) -> Vec<MasteryRecord> {
    let mut ordered: Vec<&QuizAttempt> = attempts.iter().collect();
    ordered.sort_by_key(|attempt| attempt.completed_at);

    let mut latest: HashMap<&str, u8> = HashMap::new();
    for attempt in ordered {
        latest.insert(attempt.topic.as_str(), percentage(attempt.score, attempt.total));
    }

    let mut records: Vec<MasteryRecord> = latest
        .into_iter()
        .map(|(topic, strength)| MasteryRecord {
            topic: topic.to_string(),
            strength,
        })
        .collect();
    records.sort_by(|a, b| a.topic.cmp(&b.topic));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn attempt(topic: &str, score: usize, total: usize, minute: u32) -> QuizAttempt {
        QuizAttempt {
            topic: topic.to_string(),
            score,
            total,
            completed_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, minute, 0).unwrap(),
        }
    }

    #[test]
    fn test_latest_attempt_wins_not_average() {
        let attempts = vec![attempt("Arrays", 2, 5, 0), attempt("Arrays", 4, 5, 30)];
        let records = aggregate_mastery(&attempts);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].strength, 80, "latest wins: 80, not the 60 average");
    }

    #[test]
    fn test_ordering_comes_from_timestamps_not_slice_order() {
        // Most recent attempt listed first — timestamp still decides.
        let attempts = vec![attempt("Arrays", 4, 5, 30), attempt("Arrays", 2, 5, 0)];
        let records = aggregate_mastery(&attempts);
        assert_eq!(records[0].strength, 80);
    }

    #[test]
    fn test_topics_tracked_independently_and_sorted() {
        let attempts = vec![
            attempt("Recursion", 5, 5, 0),
            attempt("Arrays", 3, 5, 1),
            attempt("Graphs", 1, 5, 2),
        ];
        let records = aggregate_mastery(&attempts);
        let topics: Vec<&str> = records.iter().map(|r| r.topic.as_str()).collect();
        assert_eq!(topics, vec!["Arrays", "Graphs", "Recursion"]);
    }

    #[test]
    fn test_strength_is_rounded_percentage() {
        let records = aggregate_mastery(&[attempt("Trees", 2, 3, 0)]);
        assert_eq!(records[0].strength, 67);
    }

    #[test]
    fn test_empty_history_yields_no_records() {
        assert!(aggregate_mastery(&[]).is_empty());
    }
}
