//! Axum route handlers for scoring and progress.
//!
//! Callers supply the full persisted state (question sets with answers,
//! step lists) and receive the derived fields back; nothing here reads or
//! writes storage.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::quiz::QuizQuestion;
use crate::models::roadmap::{Roadmap, RoadmapStep};
use crate::progress::{toggle_completion, ToggleTarget};
use crate::scoring::assessment::{score_assessment, AssessmentScore, AssessmentSubmission};
use crate::scoring::mastery::{aggregate_mastery, MasteryRecord, QuizAttempt};
use crate::scoring::quiz::{score_quiz, QuizScore};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreQuizRequest {
    pub answers: Vec<usize>,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct MasteryRequest {
    pub attempts: Vec<QuizAttempt>,
}

#[derive(Debug, Serialize)]
pub struct MasteryResponse {
    pub mastery: Vec<MasteryRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub steps: Vec<RoadmapStep>,
    pub target: ToggleTarget,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/quiz/score
pub async fn handle_score_quiz(
    Json(request): Json<ScoreQuizRequest>,
) -> Result<Json<QuizScore>, AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation("questions cannot be empty".to_string()));
    }
    if request.answers.len() != request.questions.len() {
        return Err(AppError::Validation(format!(
            "expected {} answers, got {}",
            request.questions.len(),
            request.answers.len()
        )));
    }

    Ok(Json(score_quiz(&request.answers, &request.questions)))
}

/// POST /api/v1/assessment/score
pub async fn handle_score_assessment(
    Json(submission): Json<AssessmentSubmission>,
) -> Result<Json<AssessmentScore>, AppError> {
    submission.validate().map_err(AppError::Validation)?;
    Ok(Json(score_assessment(&submission)))
}

/// POST /api/v1/mastery
pub async fn handle_aggregate_mastery(
    Json(request): Json<MasteryRequest>,
) -> Result<Json<MasteryResponse>, AppError> {
    if request.attempts.iter().any(|a| a.total == 0) {
        return Err(AppError::Validation(
            "attempt total must be positive".to_string(),
        ));
    }

    Ok(Json(MasteryResponse {
        mastery: aggregate_mastery(&request.attempts),
    }))
}

/// POST /api/v1/roadmap/progress
///
/// Toggles one flag and returns the updated step list with the recomputed
/// percentage for the caller to persist.
pub async fn handle_roadmap_progress(
    Json(request): Json<ProgressRequest>,
) -> Result<Json<Roadmap>, AppError> {
    let mut steps = request.steps;
    let overall_progress = toggle_completion(&mut steps, request.target)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(Roadmap {
        steps,
        overall_progress,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_quiz_request_deserializes() {
        let json = r#"{
            "answers": [0, 2],
            "questions": [
                {"question": "Q1?", "options": ["a","b","c","d"], "correctAnswerIndex": 0, "explanation": "e"},
                {"question": "Q2?", "options": ["a","b","c","d"], "correctAnswerIndex": 2, "explanation": "e"}
            ]
        }"#;
        let request: ScoreQuizRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.answers.len(), 2);
        assert_eq!(request.questions.len(), 2);
    }

    #[test]
    fn test_progress_request_deserializes_with_target() {
        let json = r#"{
            "steps": [{"title": "Step", "subModules": []}],
            "target": {"kind": "step", "id": "6f7c2a9a-5b1e-4f63-9a70-3d2f6f3f1b11"}
        }"#;
        let request: ProgressRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(request.target, ToggleTarget::Step(_)));
        assert_eq!(request.steps.len(), 1);
    }
}
