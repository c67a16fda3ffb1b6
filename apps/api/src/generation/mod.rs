//! AI-backed content generation and resilience layer.
//!
//! Pipeline: prompt assembly → upstream model call → sanitization →
//! validation. Structured kinds (quiz, roadmap, career simulation) fall back
//! to deterministic pool content on any failure, so those requests never
//! fail outright. Chat replies have no safe substitute and surface upstream
//! failures as a retry condition instead.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod sanitizer;
pub mod validator;

use serde::{Deserialize, Serialize};

use crate::models::career::{CareerReport, ProfileSnapshot};
use crate::models::quiz::QuizQuestion;
use crate::models::roadmap::RoadmapStep;
use crate::models::Level;

/// The four content kinds. Drives prompt selection, the sanitizer's shape
/// hint, the validator's contract, and the fallback pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Quiz,
    Roadmap,
    CareerSimulation,
    ChatReply,
}

impl ContentKind {
    /// Kinds whose payload is a JSON array — the sanitizer scans for a
    /// bracket span on these.
    pub fn expects_array(&self) -> bool {
        matches!(self, ContentKind::Quiz | ContentKind::Roadmap)
    }
}

/// One generation request as assembled by a route handler.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub kind: ContentKind,
    /// Topic for quizzes and roadmaps, domain for career simulations,
    /// the free-form message for chat.
    pub topic: String,
    pub level: Level,
    pub profile: Option<ProfileSnapshot>,
    /// Caller-pinned variation token; a random one is drawn when absent.
    pub variation_seed: Option<String>,
}

/// How a result was produced. `Error` is the tag callers persist for failed
/// chat exchanges — the generator itself never returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Success,
    Fallback,
    Error,
}

/// Payload tagged by the requested content kind.
#[derive(Debug, Clone)]
pub enum GeneratedPayload {
    Quiz(Vec<QuizQuestion>),
    Roadmap(Vec<RoadmapStep>),
    CareerSimulation(CareerReport),
    ChatReply(String),
}

/// Created once per request, never mutated; the caller owns persistence.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub status: GenerationStatus,
    pub payload: GeneratedPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_shaped_kinds() {
        assert!(ContentKind::Quiz.expects_array());
        assert!(ContentKind::Roadmap.expects_array());
        assert!(!ContentKind::CareerSimulation.expects_array());
        assert!(!ContentKind::ChatReply.expects_array());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&GenerationStatus::Fallback).unwrap(),
            r#""fallback""#
        );
        assert_eq!(
            serde_json::to_string(&GenerationStatus::Error).unwrap(),
            r#""error""#
        );
    }
}
