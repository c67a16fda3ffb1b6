//! Wellness assessment scoring — five self-reported dimensions averaged and
//! bucketed into a recommendation tier.

use serde::{Deserialize, Serialize};

pub const DIMENSION_MIN: u8 = 1;
pub const DIMENSION_MAX: u8 = 5;

/// One submitted check-in. Raw 1–5 values as the student entered them —
/// no dimension is inverted before averaging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    pub stress: u8,
    pub sleep_quality: u8,
    pub mood: u8,
    pub social_connection: u8,
    pub academic_pressure: u8,
}

impl AssessmentSubmission {
    pub fn dimensions(&self) -> [(&'static str, u8); 5] {
        [
            ("stress", self.stress),
            ("sleepQuality", self.sleep_quality),
            ("mood", self.mood),
            ("socialConnection", self.social_connection),
            ("academicPressure", self.academic_pressure),
        ]
    }

    /// Every dimension must sit in [1, 5].
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in self.dimensions() {
            if !(DIMENSION_MIN..=DIMENSION_MAX).contains(&value) {
                return Err(format!(
                    "{name} must be between {DIMENSION_MIN} and {DIMENSION_MAX}, got {value}"
                ));
            }
        }
        Ok(())
    }
}

/// Recommendation tier. The serialized labels are the wire contract the
/// client renders; note that "low" fires on a *good* (≥3.8) average — the
/// historical label is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationBucket {
    Congratulations,
    Low,
    Moderate,
    Improvement,
    Confidence,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentScore {
    pub average: f32,
    pub bucket: RecommendationBucket,
}

/// Average = sum of the five raw values / 5, bucketed by fixed thresholds.
pub fn score_assessment(submission: &AssessmentSubmission) -> AssessmentScore {
    let sum: u32 = submission.dimensions().iter().map(|&(_, v)| v as u32).sum();
    let average = sum as f32 / 5.0;
    AssessmentScore {
        average,
        bucket: bucket_for(average),
    }
}

/// Thresholds evaluated high to low.
pub fn bucket_for(average: f32) -> RecommendationBucket {
    if average >= 4.5 {
        RecommendationBucket::Congratulations
    } else if average >= 3.8 {
        RecommendationBucket::Low
    } else if average >= 3.0 {
        RecommendationBucket::Moderate
    } else if average >= 2.0 {
        RecommendationBucket::Improvement
    } else {
        RecommendationBucket::Confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(values: [u8; 5]) -> AssessmentSubmission {
        AssessmentSubmission {
            stress: values[0],
            sleep_quality: values[1],
            mood: values[2],
            social_connection: values[3],
            academic_pressure: values[4],
        }
    }

    #[test]
    fn test_all_fives_is_congratulations() {
        let score = score_assessment(&submission([5, 5, 5, 5, 5]));
        assert!((score.average - 5.0).abs() < f32::EPSILON);
        assert_eq!(score.bucket, RecommendationBucket::Congratulations);
    }

    #[test]
    fn test_all_ones_is_confidence() {
        let score = score_assessment(&submission([1, 1, 1, 1, 1]));
        assert!((score.average - 1.0).abs() < f32::EPSILON);
        assert_eq!(score.bucket, RecommendationBucket::Confidence);
    }

    #[test]
    fn test_all_fours_is_moderate() {
        let score = score_assessment(&submission([4, 4, 4, 4, 4]));
        assert!((score.average - 4.0).abs() < f32::EPSILON);
        assert_eq!(score.bucket, RecommendationBucket::Moderate);
    }

    #[test]
    fn test_bucket_boundaries_are_inclusive() {
        assert_eq!(bucket_for(4.5), RecommendationBucket::Congratulations);
        assert_eq!(bucket_for(3.8), RecommendationBucket::Low);
        assert_eq!(bucket_for(3.0), RecommendationBucket::Moderate);
        assert_eq!(bucket_for(2.0), RecommendationBucket::Improvement);
        assert_eq!(bucket_for(1.99), RecommendationBucket::Confidence);
    }

    #[test]
    fn test_mixed_values_average_exactly() {
        // (4 + 5 + 4 + 4 + 4) / 5 = 4.2 → low tier
        let score = score_assessment(&submission([4, 5, 4, 4, 4]));
        assert!((score.average - 4.2).abs() < 1e-6);
        assert_eq!(score.bucket, RecommendationBucket::Low);
    }

    #[test]
    fn test_validate_rejects_zero_and_six() {
        assert!(submission([0, 3, 3, 3, 3]).validate().is_err());
        assert!(submission([3, 3, 3, 3, 6]).validate().is_err());
        assert!(submission([1, 5, 3, 2, 4]).validate().is_ok());
    }

    #[test]
    fn test_bucket_labels_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecommendationBucket::Congratulations).unwrap(),
            r#""congratulations""#
        );
        assert_eq!(
            serde_json::to_string(&RecommendationBucket::Low).unwrap(),
            r#""low""#
        );
    }
}
