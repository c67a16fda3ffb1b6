//! Result validator — parses sanitized candidates and enforces the shape
//! contract of each structured content kind. Model output is never trusted
//! on structural luck: anything non-conforming is rejected here and the
//! request falls through to the fallback pool.

use thiserror::Error;

use crate::generation::{ContentKind, GeneratedPayload};
use crate::models::career::CareerReport;
use crate::models::quiz::{QuizQuestion, OPTION_COUNT, QUIZ_LENGTH};
use crate::models::roadmap::RoadmapStep;

const READINESS_MAX: u8 = 100;
const LOAD_MIN: u8 = 1;
const LOAD_MAX: u8 = 10;

/// Parse or shape failure. Absorbed by the generator — never propagated to
/// API callers as-is.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("candidate is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("shape mismatch: {0}")]
    Shape(String),
}

/// Validates a candidate against the shape contract of the requested kind.
/// Chat replies are free text and pass through untouched.
pub fn validate(kind: ContentKind, candidate: &str) -> Result<GeneratedPayload, ValidationError> {
    match kind {
        ContentKind::Quiz => validate_quiz(candidate).map(GeneratedPayload::Quiz),
        ContentKind::Roadmap => validate_roadmap(candidate).map(GeneratedPayload::Roadmap),
        ContentKind::CareerSimulation => {
            validate_career(candidate).map(GeneratedPayload::CareerSimulation)
        }
        ContentKind::ChatReply => Ok(GeneratedPayload::ChatReply(candidate.to_string())),
    }
}

fn validate_quiz(candidate: &str) -> Result<Vec<QuizQuestion>, ValidationError> {
    let questions: Vec<QuizQuestion> = serde_json::from_str(candidate)?;

    if questions.len() != QUIZ_LENGTH {
        return Err(ValidationError::Shape(format!(
            "expected exactly {QUIZ_LENGTH} questions, got {}",
            questions.len()
        )));
    }

    for (i, question) in questions.iter().enumerate() {
        if question.question.trim().is_empty() {
            return Err(ValidationError::Shape(format!("question {i} has empty text")));
        }
        if question.correct_answer_index >= OPTION_COUNT {
            return Err(ValidationError::Shape(format!(
                "question {i} has correctAnswerIndex {} out of range",
                question.correct_answer_index
            )));
        }
        if question.options.iter().any(|o| o.trim().is_empty()) {
            return Err(ValidationError::Shape(format!("question {i} has an empty option")));
        }
    }

    Ok(questions)
}

fn validate_roadmap(candidate: &str) -> Result<Vec<RoadmapStep>, ValidationError> {
    let steps: Vec<RoadmapStep> = serde_json::from_str(candidate)?;

    if steps.is_empty() {
        return Err(ValidationError::Shape("roadmap has no steps".to_string()));
    }

    for (i, step) in steps.iter().enumerate() {
        if step.title.trim().is_empty() {
            return Err(ValidationError::Shape(format!("step {i} has empty title")));
        }
        if step.sub_modules.iter().any(|m| m.title.trim().is_empty()) {
            return Err(ValidationError::Shape(format!(
                "step {i} has a sub-module with empty title"
            )));
        }
    }

    Ok(steps)
}

fn validate_career(candidate: &str) -> Result<CareerReport, ValidationError> {
    let report: CareerReport = serde_json::from_str(candidate)?;

    if report.candidates.is_empty() {
        return Err(ValidationError::Shape("report has no candidates".to_string()));
    }

    for candidate in &report.candidates {
        let name = &candidate.career_name;
        if name.trim().is_empty() {
            return Err(ValidationError::Shape("candidate has empty careerName".to_string()));
        }
        if candidate.readiness_percent > READINESS_MAX {
            return Err(ValidationError::Shape(format!(
                "{name}: readinessPercent {} out of range",
                candidate.readiness_percent
            )));
        }
        if !(LOAD_MIN..=LOAD_MAX).contains(&candidate.predicted_stress_load) {
            return Err(ValidationError::Shape(format!(
                "{name}: predictedStressLoad {} out of range",
                candidate.predicted_stress_load
            )));
        }
        if !(LOAD_MIN..=LOAD_MAX).contains(&candidate.market_demand_score) {
            return Err(ValidationError::Shape(format!(
                "{name}: marketDemandScore {} out of range",
                candidate.market_demand_score
            )));
        }
    }

    Ok(report)
}
