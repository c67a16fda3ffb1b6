//! Learning roadmap domain types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Level;

/// A sub-module under a roadmap step. Sub-module completion is tracked per
/// module but does not feed the roadmap's overall percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubModule {
    /// Assigned at parse time — model output carries no ids.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// A top-level roadmap step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub sub_modules: Vec<SubModule>,
    #[serde(default)]
    pub is_started: bool,
    #[serde(default)]
    pub is_completed: bool,
}

/// A roadmap as returned to the caller. `overall_progress` is derived from
/// the step list on every write, never set directly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub steps: Vec<RoadmapStep>,
    /// 0–100 integer share of completed top-level steps.
    pub overall_progress: u8,
}
