//! Quiz domain types shared by the generation pipeline and the scoring engine.

use serde::{Deserialize, Serialize};

/// Number of questions in every quiz, generated or fallback.
pub const QUIZ_LENGTH: usize = 5;

/// Number of options on every question.
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question.
///
/// The `[String; 4]` option array makes the four-option invariant
/// unrepresentable to violate once a payload has parsed: model output with
/// three or five options fails deserialization outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; OPTION_COUNT],
    /// Index into `options`, 0–3. Range-checked by the validator.
    pub correct_answer_index: usize,
    pub explanation: String,
}
