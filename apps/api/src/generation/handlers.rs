//! Axum route handlers for the Generation API.
//!
//! Handlers validate input, assemble a `GenerationRequest`, and unwrap the
//! kind-tagged payload into a typed response. Persistence of the returned
//! structures is the caller's concern.

use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::generate;
use crate::generation::{ContentKind, GeneratedPayload, GenerationRequest, GenerationStatus};
use crate::models::career::{CareerReport, ProfileSnapshot};
use crate::models::quiz::QuizQuestion;
use crate::models::roadmap::Roadmap;
use crate::models::Level;
use crate::progress::compute_overall_progress;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizGenerateRequest {
    pub topic: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub variation_seed: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizGenerateResponse {
    pub status: GenerationStatus,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapGenerateRequest {
    pub topic: String,
    #[serde(default)]
    pub level: Level,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapGenerateResponse {
    pub status: GenerationStatus,
    pub roadmap: Roadmap,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSimulateRequest {
    pub profile: ProfileSnapshot,
    #[serde(default)]
    pub domain: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerSimulateResponse {
    pub status: GenerationStatus,
    pub report: CareerReport,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub status: GenerationStatus,
    pub reply: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate/quiz
///
/// Always returns exactly 5 questions — generated on success, drawn from the
/// fallback pool otherwise. The status field tells the caller which.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizGenerateRequest>,
) -> Result<Json<QuizGenerateResponse>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let gen_request = GenerationRequest {
        kind: ContentKind::Quiz,
        topic: request.topic,
        level: request.level,
        profile: None,
        variation_seed: request.variation_seed,
    };

    let mut rng = StdRng::from_entropy();
    let result = generate(
        state.generator.as_ref(),
        &state.generation_options(),
        &gen_request,
        &mut rng,
    )
    .await?;

    match result.payload {
        GeneratedPayload::Quiz(questions) => Ok(Json(QuizGenerateResponse {
            status: result.status,
            questions,
        })),
        _ => Err(AppError::Internal(anyhow::anyhow!(
            "generation returned a non-quiz payload"
        ))),
    }
}

/// POST /api/v1/generate/roadmap
///
/// Returns a fresh roadmap with overallProgress derived from the step list.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapGenerateRequest>,
) -> Result<Json<RoadmapGenerateResponse>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let gen_request = GenerationRequest {
        kind: ContentKind::Roadmap,
        topic: request.topic,
        level: request.level,
        profile: None,
        variation_seed: None,
    };

    let mut rng = StdRng::from_entropy();
    let result = generate(
        state.generator.as_ref(),
        &state.generation_options(),
        &gen_request,
        &mut rng,
    )
    .await?;

    match result.payload {
        GeneratedPayload::Roadmap(steps) => {
            let overall_progress = compute_overall_progress(&steps);
            Ok(Json(RoadmapGenerateResponse {
                status: result.status,
                roadmap: Roadmap {
                    steps,
                    overall_progress,
                },
            }))
        }
        _ => Err(AppError::Internal(anyhow::anyhow!(
            "generation returned a non-roadmap payload"
        ))),
    }
}

/// POST /api/v1/generate/career-simulation
pub async fn handle_simulate_career(
    State(state): State<AppState>,
    Json(request): Json<CareerSimulateRequest>,
) -> Result<Json<CareerSimulateResponse>, AppError> {
    let gen_request = GenerationRequest {
        kind: ContentKind::CareerSimulation,
        topic: request
            .domain
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "technology".to_string()),
        level: Level::default(),
        profile: Some(request.profile),
        variation_seed: None,
    };

    let mut rng = StdRng::from_entropy();
    let result = generate(
        state.generator.as_ref(),
        &state.generation_options(),
        &gen_request,
        &mut rng,
    )
    .await?;

    match result.payload {
        GeneratedPayload::CareerSimulation(report) => Ok(Json(CareerSimulateResponse {
            status: result.status,
            report,
        })),
        _ => Err(AppError::Internal(anyhow::anyhow!(
            "generation returned a non-career payload"
        ))),
    }
}

/// POST /api/v1/chat
///
/// Free-text mentor reply. Upstream throttling or transport failure maps to
/// 503 with a retry message — there is no canned substitute for conversation.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let gen_request = GenerationRequest {
        kind: ContentKind::ChatReply,
        topic: request.message,
        level: Level::default(),
        profile: None,
        variation_seed: None,
    };

    let mut rng = StdRng::from_entropy();
    let result = generate(
        state.generator.as_ref(),
        &state.generation_options(),
        &gen_request,
        &mut rng,
    )
    .await?;

    match result.payload {
        GeneratedPayload::ChatReply(reply) => Ok(Json(ChatResponse {
            status: result.status,
            reply,
        })),
        _ => Err(AppError::Internal(anyhow::anyhow!(
            "generation returned a non-chat payload"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_request_deserializes_with_defaults() {
        let request: QuizGenerateRequest =
            serde_json::from_str(r#"{"topic": "Graphs"}"#).unwrap();
        assert_eq!(request.topic, "Graphs");
        assert_eq!(request.level, Level::Beginner);
        assert!(request.variation_seed.is_none());
    }

    #[test]
    fn test_quiz_request_accepts_camel_case_seed() {
        let request: QuizGenerateRequest = serde_json::from_str(
            r#"{"topic": "Graphs", "level": "Advanced", "variationSeed": "abc123"}"#,
        )
        .unwrap();
        assert_eq!(request.level, Level::Advanced);
        assert_eq!(request.variation_seed.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_career_request_profile_required() {
        let result: Result<CareerSimulateRequest, _> =
            serde_json::from_str(r#"{"domain": "design"}"#);
        assert!(result.is_err(), "profile is required");
    }
}
