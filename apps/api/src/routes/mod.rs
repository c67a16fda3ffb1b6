pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/generate/quiz", post(generation::handle_generate_quiz))
        .route(
            "/api/v1/generate/roadmap",
            post(generation::handle_generate_roadmap),
        )
        .route(
            "/api/v1/generate/career-simulation",
            post(generation::handle_simulate_career),
        )
        .route("/api/v1/chat", post(generation::handle_chat))
        // Scoring & progress API
        .route("/api/v1/quiz/score", post(scoring::handle_score_quiz))
        .route(
            "/api/v1/assessment/score",
            post(scoring::handle_score_assessment),
        )
        .route("/api/v1/mastery", post(scoring::handle_aggregate_mastery))
        .route(
            "/api/v1/roadmap/progress",
            post(scoring::handle_roadmap_progress),
        )
        .with_state(state)
}
