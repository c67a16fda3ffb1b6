//! Quiz scoring — answer-index matching against stored questions.

use serde::Serialize;

use crate::models::quiz::QuizQuestion;

/// Pass mark as a fraction of total questions. Inclusive: 3/5 passes.
pub const PASS_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
    /// round(100 × score / total)
    pub percentage: u8,
    pub is_passed: bool,
}

/// Scores a submission: one point per position where the submitted index
/// equals the stored correct index.
pub fn score_quiz(answers: &[usize], questions: &[QuizQuestion]) -> QuizScore {
    let total = questions.len();
    let score = questions
        .iter()
        .zip(answers)
        .filter(|(question, &answer)| question.correct_answer_index == answer)
        .count();

    QuizScore {
        score,
        total,
        percentage: percentage(score, total),
        is_passed: total > 0 && score as f32 / total as f32 >= PASS_THRESHOLD,
    }
}

/// Integer percentage, 0 for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((score as f32 / total as f32) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> QuizQuestion {
        QuizQuestion {
            question: "Q?".to_string(),
            options: ["a", "b", "c", "d"].map(str::to_string),
            correct_answer_index: correct,
            explanation: "because".to_string(),
        }
    }

    #[test]
    fn test_all_correct_scores_full_and_passes() {
        let questions: Vec<_> = [0, 1, 2, 3, 1].into_iter().map(question).collect();
        let answers = [0, 1, 2, 3, 1];
        let result = score_quiz(&answers, &questions);
        assert_eq!(result.score, 5);
        assert_eq!(result.total, 5);
        assert_eq!(result.percentage, 100);
        assert!(result.is_passed);
    }

    #[test]
    fn test_three_of_five_passes_inclusive() {
        let questions: Vec<_> = [0, 0, 0, 0, 0].into_iter().map(question).collect();
        let answers = [0, 0, 0, 1, 1];
        let result = score_quiz(&answers, &questions);
        assert_eq!(result.score, 3);
        assert!(result.is_passed, "0.6 exactly must pass");
    }

    #[test]
    fn test_two_of_five_fails() {
        let questions: Vec<_> = [0, 0, 0, 0, 0].into_iter().map(question).collect();
        let answers = [0, 0, 1, 1, 1];
        let result = score_quiz(&answers, &questions);
        assert_eq!(result.score, 2);
        assert!(!result.is_passed);
    }

    #[test]
    fn test_empty_quiz_never_passes() {
        let result = score_quiz(&[], &[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.percentage, 0);
        assert!(!result.is_passed);
    }

    #[test]
    fn test_extra_answers_are_ignored() {
        let questions: Vec<_> = [2, 2].into_iter().map(question).collect();
        let answers = [2, 2, 2, 2];
        let result = score_quiz(&answers, &questions);
        assert_eq!(result.score, 2);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 7), 0);
    }
}
