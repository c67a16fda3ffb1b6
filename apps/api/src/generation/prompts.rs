#![allow(dead_code)]

// All prompt constants for the generation module.
// Cross-cutting fragments live in llm_client::prompts.

/// System prompt for quiz generation — enforces JSON-array-only output.
pub const QUIZ_SYSTEM: &str = "You are an expert educator writing multiple-choice quizzes \
    for students. \
    You MUST respond with valid JSON only — a JSON array of question objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies outside the question objects.";

/// Quiz prompt template.
/// Replace: {topic}, {level}, {variation_focus}, {seed}
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Create a multiple-choice quiz about {topic} for a {level} student.

Return a JSON ARRAY of exactly 5 question objects with this EXACT schema:
[
  {
    "question": "In production, how should {topic} be monitored?",
    "options": ["First option", "Second option", "Third option", "Fourth option"],
    "correctAnswerIndex": 2,
    "explanation": "Why the option at index 2 is correct."
  }
]

HARD RULES:
1. Return EXACTLY 5 questions — never more, never fewer
2. Every question has EXACTLY 4 options
3. "correctAnswerIndex" is an integer from 0 to 3 and must VARY across questions — do NOT always use 0
4. Every question carries a short "explanation"
5. Calibrate difficulty to a {level} student — no trick wording, no "all of the above"

VARIATION FOCUS for this run: lean the questions toward {variation_focus}.
Variation token: {seed} (uniqueness marker only — do not mention it)."#;

/// System prompt for roadmap generation — enforces JSON-array-only output.
pub const ROADMAP_SYSTEM: &str = "You are an expert curriculum designer building learning \
    roadmaps for students. \
    You MUST respond with valid JSON only — a JSON array of step objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Roadmap prompt template.
/// Replace: {topic}, {level}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a learning roadmap for {topic} starting at {level} level.

Return a JSON ARRAY of step objects with this EXACT schema:
[
  {
    "title": "Foundations of {topic}",
    "level": "Beginner",
    "subModules": [
      {"title": "Key terminology"},
      {"title": "First hands-on exercise"}
    ]
  }
]

HARD RULES:
1. Return 4 to 8 steps, ordered from fundamentals to advanced work
2. "level" is exactly one of "Beginner", "Intermediate", "Advanced"
3. Every step has at least 2 subModules with concrete, actionable titles
4. Do NOT include ids, completion flags, or progress fields — they are managed elsewhere"#;

/// System prompt for career simulation — enforces JSON-object-only output.
pub const CAREER_SYSTEM: &str = "You are a career counselor simulating realistic career paths \
    for students based on their verified profile. \
    You MUST respond with valid JSON only — a single JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT invent achievements the profile does not contain.";

/// Career simulation prompt template.
/// Replace: {domain}, {profile_json}
pub const CAREER_PROMPT_TEMPLATE: &str = r#"Simulate career paths in {domain} for the student below.

STUDENT PROFILE (source of truth — ground every claim in it):
{profile_json}

Return a JSON OBJECT with this EXACT schema:
{
  "candidates": [
    {
      "careerName": "Backend Engineer",
      "readinessPercent": 55,
      "predictedStressLoad": 6,
      "marketDemandScore": 8,
      "skillGaps": ["First gap", "Second gap", "Third gap"],
      "reasoning": {
        "strengthsAlignment": "How the profile supports this path.",
        "marketContext": "Current demand and outlook.",
        "preparationAdvice": "Concrete next steps."
      }
    }
  ]
}

HARD RULES:
1. Return 3 to 5 candidates ranked by fit
2. "readinessPercent" is an integer from 0 to 100
3. "predictedStressLoad" and "marketDemandScore" are integers from 1 to 10
4. "skillGaps" has EXACTLY 3 entries
5. All three "reasoning" fields are required and must reference the profile"#;

/// System prompt for the mentor chat — plain text, no structure.
pub const CHAT_SYSTEM: &str = "You are a supportive wellness and career mentor for students. \
    Reply with plain conversational text — no JSON, no markdown fences, no bullet spam. \
    Keep replies encouraging, practical, and under 200 words. \
    If a student appears to be in crisis, gently encourage them to contact a counselor \
    or a local support line.";

/// Chat prompt template.
/// Replace: {message}
pub const CHAT_PROMPT_TEMPLATE: &str = "STUDENT MESSAGE:\n{message}";
