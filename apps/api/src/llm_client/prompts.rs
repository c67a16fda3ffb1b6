#![allow(dead_code)]

// Shared prompt constants. Each feature module that calls the model defines
// its own prompts.rs alongside it; this file holds cross-cutting fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to prompts that embed a student profile.
pub const PROFILE_GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Base every statement on the student profile provided. \
    Do NOT invent achievements, grades, or experience the profile does not \
    contain. If the profile does not support a claim, omit it.";
