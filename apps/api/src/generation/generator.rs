//! Content generation — orchestrates the full pipeline.
//!
//! Flow: build prompt → upstream call → sanitize → validate → Success.
//! Any failure on a structured kind (throttling, transport, malformed
//! output) routes to the fallback pool and the caller receives a
//! Fallback-tagged result instead of an error. Chat replies have no safe
//! deterministic substitute, so their upstream failures surface as
//! `AppError::ModelBusy`.

use rand::Rng;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::fallback::{fallback_career, fallback_quiz, fallback_roadmap};
use crate::generation::prompt_builder::{build_prompt, BuiltPrompt};
use crate::generation::sanitizer::extract_candidate;
use crate::generation::validator::validate;
use crate::generation::{
    ContentKind, GeneratedPayload, GenerationRequest, GenerationResult, GenerationStatus,
};
use crate::llm_client::{GenerationOptions, TextGenerator};

/// Runs one generation request end to end. Exactly one upstream call is made
/// regardless of outcome.
pub async fn generate<R: Rng>(
    client: &dyn TextGenerator,
    opts: &GenerationOptions,
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GenerationResult, AppError> {
    let prompt = build_prompt(request, rng)?;

    if request.kind == ContentKind::ChatReply {
        return chat_reply(client, opts, &prompt).await;
    }

    structured(client, opts, request, &prompt, rng).await
}

async fn chat_reply(
    client: &dyn TextGenerator,
    opts: &GenerationOptions,
    prompt: &BuiltPrompt,
) -> Result<GenerationResult, AppError> {
    match client.generate(prompt.system, &prompt.user, opts).await {
        Ok(raw) => Ok(GenerationResult {
            status: GenerationStatus::Success,
            payload: GeneratedPayload::ChatReply(extract_candidate(&raw, false)),
        }),
        Err(e) => {
            warn!("chat generation failed, surfacing retry condition: {e}");
            Err(AppError::ModelBusy)
        }
    }
}

async fn structured<R: Rng>(
    client: &dyn TextGenerator,
    opts: &GenerationOptions,
    request: &GenerationRequest,
    prompt: &BuiltPrompt,
    rng: &mut R,
) -> Result<GenerationResult, AppError> {
    let outcome = match client.generate(prompt.system, &prompt.user, opts).await {
        Ok(raw) => {
            let candidate = extract_candidate(&raw, request.kind.expects_array());
            validate(request.kind, &candidate).map_err(|e| e.to_string())
        }
        Err(e) => Err(e.to_string()),
    };

    match outcome {
        Ok(payload) => {
            info!("generated {:?} content for topic '{}'", request.kind, request.topic);
            Ok(GenerationResult {
                status: GenerationStatus::Success,
                payload,
            })
        }
        Err(reason) => {
            warn!(
                "{:?} generation for topic '{}' failed ({reason}), serving fallback content",
                request.kind, request.topic
            );
            let payload = match request.kind {
                ContentKind::Quiz => {
                    GeneratedPayload::Quiz(fallback_quiz(&request.topic, request.level, rng))
                }
                ContentKind::Roadmap => {
                    GeneratedPayload::Roadmap(fallback_roadmap(&request.topic, request.level))
                }
                ContentKind::CareerSimulation => {
                    GeneratedPayload::CareerSimulation(fallback_career(request.profile.as_ref()))
                }
                // Chat never reaches the structured path; if it ever did,
                // surface the retry condition rather than fabricate a reply.
                ContentKind::ChatReply => return Err(AppError::ModelBusy),
            };
            Ok(GenerationResult {
                status: GenerationStatus::Fallback,
                payload,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::GenerationError;
    use crate::models::quiz::QUIZ_LENGTH;
    use crate::models::Level;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    enum Script {
        Reply(String),
        Throttled,
        Transport,
    }

    struct CannedGenerator(Script);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(
            &self,
            _system: &str,
            _prompt: &str,
            _opts: &GenerationOptions,
        ) -> Result<String, GenerationError> {
            match &self.0 {
                Script::Reply(text) => Ok(text.clone()),
                Script::Throttled => Err(GenerationError::Throttled),
                Script::Transport => {
                    Err(GenerationError::Transport("connection reset".to_string()))
                }
            }
        }
    }

    fn reply(text: impl Into<String>) -> Script {
        Script::Reply(text.into())
    }

    fn request(kind: ContentKind) -> GenerationRequest {
        GenerationRequest {
            kind,
            topic: "Rust ownership".to_string(),
            level: Level::Intermediate,
            profile: None,
            variation_seed: None,
        }
    }

    fn quiz_json(count: usize) -> String {
        let questions: Vec<_> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "question": format!("Question {i}?"),
                    "options": ["a", "b", "c", "d"],
                    "correctAnswerIndex": i % 4,
                    "explanation": "because"
                })
            })
            .collect();
        serde_json::to_string(&questions).unwrap()
    }

    async fn run(script: Script, kind: ContentKind) -> Result<GenerationResult, AppError> {
        let client = CannedGenerator(script);
        let mut rng = StdRng::seed_from_u64(17);
        generate(
            &client,
            &GenerationOptions::default(),
            &request(kind),
            &mut rng,
        )
        .await
    }

    fn expect_quiz(result: &GenerationResult) -> &[crate::models::quiz::QuizQuestion] {
        match &result.payload {
            GeneratedPayload::Quiz(questions) => questions,
            other => panic!("expected quiz payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_valid_quiz_output_is_success() {
        // Fences and prose around the array exercise the sanitizer too.
        let wrapped = format!("Here you go!\n```json\n{}\n```", quiz_json(5));

        let result = run(reply(wrapped), ContentKind::Quiz).await.unwrap();
        assert_eq!(result.status, GenerationStatus::Success);
        let questions = expect_quiz(&result);
        assert_eq!(questions.len(), QUIZ_LENGTH);
        assert_eq!(questions[1].correct_answer_index, 1);
    }

    #[tokio::test]
    async fn test_short_quiz_output_falls_back_with_full_invariants() {
        let result = run(reply(quiz_json(3)), ContentKind::Quiz).await.unwrap();
        assert_eq!(result.status, GenerationStatus::Fallback);
        let questions = expect_quiz(&result);
        assert_eq!(questions.len(), QUIZ_LENGTH);
        for question in questions {
            assert_eq!(question.options.len(), 4);
            assert!(question.correct_answer_index < 4);
        }
    }

    #[tokio::test]
    async fn test_throttled_quiz_falls_back() {
        let result = run(Script::Throttled, ContentKind::Quiz).await.unwrap();
        assert_eq!(result.status, GenerationStatus::Fallback);
        assert_eq!(expect_quiz(&result).len(), QUIZ_LENGTH);
    }

    #[tokio::test]
    async fn test_transport_failure_roadmap_falls_back() {
        let result = run(Script::Transport, ContentKind::Roadmap).await.unwrap();
        assert_eq!(result.status, GenerationStatus::Fallback);
        match &result.payload {
            GeneratedPayload::Roadmap(steps) => assert!(!steps.is_empty()),
            other => panic!("expected roadmap payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_out_of_range_career_report_falls_back() {
        let report = r#"{
            "candidates": [{
                "careerName": "Astronaut",
                "readinessPercent": 150,
                "predictedStressLoad": 6,
                "marketDemandScore": 8,
                "skillGaps": ["a", "b", "c"],
                "reasoning": {
                    "strengthsAlignment": "x",
                    "marketContext": "y",
                    "preparationAdvice": "z"
                }
            }]
        }"#;
        let result = run(reply(report), ContentKind::CareerSimulation)
            .await
            .unwrap();
        assert_eq!(result.status, GenerationStatus::Fallback);
        match &result.payload {
            GeneratedPayload::CareerSimulation(report) => {
                assert!(!report.candidates.is_empty());
                for candidate in &report.candidates {
                    assert!(candidate.readiness_percent <= 100);
                }
            }
            other => panic!("expected career payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chat_reply_is_trimmed_success() {
        let result = run(reply("  Take a breath, you're on track.  "), ContentKind::ChatReply)
            .await
            .unwrap();
        assert_eq!(result.status, GenerationStatus::Success);
        match &result.payload {
            GeneratedPayload::ChatReply(text) => {
                assert_eq!(text, "Take a breath, you're on track.")
            }
            other => panic!("expected chat payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chat_throttled_surfaces_model_busy() {
        let err = run(Script::Throttled, ContentKind::ChatReply)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ModelBusy));
    }

    #[tokio::test]
    async fn test_chat_transport_failure_surfaces_model_busy() {
        let err = run(Script::Transport, ContentKind::ChatReply)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ModelBusy));
    }
}
