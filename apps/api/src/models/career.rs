//! Career simulation domain types.

use serde::{Deserialize, Serialize};

/// Snapshot of a student's profile, supplied by the caller and embedded in
/// the career simulation prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub academic_background: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
}

/// The three reasoning fields attached to every candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerReasoning {
    pub strengths_alignment: String,
    pub market_context: String,
    pub preparation_advice: String,
}

/// One simulated career path for a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerCandidate {
    pub career_name: String,
    /// 0–100. Range-checked by the validator.
    pub readiness_percent: u8,
    /// 1–10.
    pub predicted_stress_load: u8,
    /// 1–10.
    pub market_demand_score: u8,
    /// Exactly three gaps — the client renders a fixed three-row list.
    pub skill_gaps: [String; 3],
    pub reasoning: CareerReasoning,
}

/// Payload of a career simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerReport {
    pub candidates: Vec<CareerCandidate>,
}
