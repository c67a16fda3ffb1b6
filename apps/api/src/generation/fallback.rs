//! Fallback provider — deterministic, schema-valid substitute content served
//! when generation or validation fails. This layer is synchronous and always
//! succeeds: a structured-content request never fails outright.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::models::career::{CareerCandidate, CareerReasoning, CareerReport, ProfileSnapshot};
use crate::models::quiz::{QuizQuestion, QUIZ_LENGTH};
use crate::models::roadmap::{RoadmapStep, SubModule};
use crate::models::Level;

struct QuestionTemplate {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer_index: usize,
    explanation: &'static str,
}

impl QuestionTemplate {
    fn instantiate(&self, topic: &str, level: Level) -> QuizQuestion {
        let fill = |s: &str| s.replace("{topic}", topic).replace("{level}", level.as_str());
        QuizQuestion {
            question: fill(self.question),
            options: self.options.map(fill),
            correct_answer_index: self.correct_answer_index,
            explanation: fill(self.explanation),
        }
    }
}

/// Pool of quiz templates. Larger than one quiz so each draw varies;
/// correct indices deliberately spread across all four positions.
const QUIZ_POOL: &[QuestionTemplate] = &[
    QuestionTemplate {
        question: "In production, how should {topic} be optimized for {level} performance?",
        options: [
            "Measure first, then optimize the proven hot paths",
            "Rewrite everything from scratch on each release",
            "Disable all caching to keep behavior simple",
            "Optimize every function preemptively",
        ],
        correct_answer_index: 0,
        explanation: "Profiling before optimizing keeps effort on the code that actually dominates runtime.",
    },
    QuestionTemplate {
        question: "Which habit most improves the reliability of {topic} work?",
        options: [
            "Skipping reviews to ship faster",
            "Testing only after a failure is reported",
            "Writing automated tests alongside each change",
            "Keeping all logic in one large function",
        ],
        correct_answer_index: 2,
        explanation: "Tests written with the change catch regressions while the context is still fresh.",
    },
    QuestionTemplate {
        question: "A {level} student debugging a {topic} problem should start by doing what?",
        options: [
            "Changing several things at once to save time",
            "Reproducing the problem with the smallest possible case",
            "Deleting the failing code and rewriting it",
            "Searching for an identical error message only",
        ],
        correct_answer_index: 1,
        explanation: "A minimal reproduction isolates the cause and makes every later step cheaper.",
    },
    QuestionTemplate {
        question: "What is the best way to keep a growing {topic} project maintainable?",
        options: [
            "Avoid documentation so it never goes stale",
            "Duplicate code freely between modules",
            "Let each contributor pick their own conventions",
            "Split it into small modules with clear responsibilities",
        ],
        correct_answer_index: 3,
        explanation: "Small, well-named modules keep changes local and the structure learnable.",
    },
    QuestionTemplate {
        question: "When learning {topic} at a {level} level, which practice builds skill fastest?",
        options: [
            "Watching tutorials without writing anything",
            "Building small projects and reviewing the results",
            "Memorizing reference documentation cover to cover",
            "Only reading other people's finished code",
        ],
        correct_answer_index: 1,
        explanation: "Active practice with feedback outperforms passive consumption at every level.",
    },
    QuestionTemplate {
        question: "How should errors be handled in a well-built {topic} system?",
        options: [
            "Caught and ignored so users never see them",
            "Allowed to crash the process for visibility",
            "Reported with enough context to act on, then handled deliberately",
            "Logged once at startup only",
        ],
        correct_answer_index: 2,
        explanation: "Actionable context plus a deliberate handling decision beats both silence and crashes.",
    },
    QuestionTemplate {
        question: "Which sign suggests a {topic} design needs rework before adding features?",
        options: [
            "Every small change forces edits in many unrelated places",
            "The code has consistent formatting",
            "New tests keep passing on the first run",
            "The module has a single clear owner",
        ],
        correct_answer_index: 0,
        explanation: "Changes that ripple everywhere indicate tangled responsibilities.",
    },
    QuestionTemplate {
        question: "What should a {level} student do after completing a {topic} exercise?",
        options: [
            "Move on immediately to maximize coverage",
            "Delete the work to start each topic fresh",
            "Avoid comparing with reference solutions",
            "Review the solution against alternatives and note the trade-offs",
        ],
        correct_answer_index: 3,
        explanation: "Comparing approaches and recording trade-offs turns practice into transferable judgment.",
    },
];

/// Draws a full quiz from the pool without replacement.
pub fn fallback_quiz<R: Rng>(topic: &str, level: Level, rng: &mut R) -> Vec<QuizQuestion> {
    QUIZ_POOL
        .choose_multiple(rng, QUIZ_LENGTH)
        .map(|template| template.instantiate(topic, level))
        .collect()
}

const ROADMAP_OUTLINE: &[(&str, &[&str])] = &[
    (
        "{topic} fundamentals",
        &["Key terminology in {topic}", "Setting up a practice environment"],
    ),
    (
        "Core {topic} concepts",
        &["Common patterns in {topic}", "Guided hands-on exercises"],
    ),
    (
        "Applied {topic} practice",
        &["Building a small {topic} project", "Reading real-world {topic} examples"],
    ),
    (
        "{topic} beyond the basics",
        &["Debugging and troubleshooting {topic}", "Performance and best practices"],
    ),
];

/// Deterministic starter roadmap for a topic.
pub fn fallback_roadmap(topic: &str, level: Level) -> Vec<RoadmapStep> {
    ROADMAP_OUTLINE
        .iter()
        .map(|(title, sub_titles)| RoadmapStep {
            id: Uuid::new_v4(),
            title: title.replace("{topic}", topic),
            level,
            sub_modules: sub_titles
                .iter()
                .map(|sub| SubModule {
                    id: Uuid::new_v4(),
                    title: sub.replace("{topic}", topic),
                    is_completed: false,
                })
                .collect(),
            is_started: false,
            is_completed: false,
        })
        .collect()
}

/// Deterministic career report. References the student's first interest when
/// the profile carries one.
pub fn fallback_career(profile: Option<&ProfileSnapshot>) -> CareerReport {
    let focus = profile
        .and_then(|p| p.interests.first().cloned())
        .unwrap_or_else(|| "your stated interests".to_string());

    let candidate = |name: &str,
                     readiness: u8,
                     stress: u8,
                     demand: u8,
                     gaps: [&str; 3],
                     market: &str,
                     advice: &str| CareerCandidate {
        career_name: name.to_string(),
        readiness_percent: readiness,
        predicted_stress_load: stress,
        market_demand_score: demand,
        skill_gaps: gaps.map(str::to_string),
        reasoning: CareerReasoning {
            strengths_alignment: format!(
                "This path connects directly with {focus} and rewards steady, structured learning."
            ),
            market_context: market.to_string(),
            preparation_advice: advice.to_string(),
        },
    };

    CareerReport {
        candidates: vec![
            candidate(
                "Software Developer",
                62,
                6,
                9,
                ["Data structures practice", "Version control fluency", "Code review habits"],
                "Hiring for developers remains broad across industries and regions.",
                "Build two small end-to-end projects and publish them for feedback.",
            ),
            candidate(
                "Data Analyst",
                58,
                5,
                8,
                ["SQL fluency", "Statistics foundations", "Dashboard storytelling"],
                "Most teams now staff analysts alongside every product function.",
                "Analyze a public dataset and write up the findings as a short report.",
            ),
            candidate(
                "Product Designer",
                54,
                4,
                7,
                ["User research methods", "Prototyping tools", "Design critique practice"],
                "Design roles grow steadily with digital product investment.",
                "Redesign one app flow you use daily and document the decisions.",
            ),
        ],
    }
}
