//! Roadmap progress — flips one completion flag and recomputes the overall
//! percentage from the full step list.
//!
//! The percentage is always derived fresh, never incremented or
//! decremented, so repeated toggles cannot drift from the true count.

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::roadmap::RoadmapStep;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("no step or sub-module with id {0}")]
    UnknownTarget(Uuid),
}

/// Which flag a toggle request addresses.
/// Wire form: `{"kind": "step", "id": "<uuid>"}`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum ToggleTarget {
    /// A top-level step's completion flag.
    Step(Uuid),
    /// A top-level step's started flag.
    StepStarted(Uuid),
    /// A sub-module's completion flag. Does not feed the overall percentage.
    SubModule(Uuid),
}

/// Flips exactly one flag, then returns the recomputed overall progress.
/// Only top-level completion counts toward the percentage.
pub fn toggle_completion(
    steps: &mut [RoadmapStep],
    target: ToggleTarget,
) -> Result<u8, ProgressError> {
    match target {
        ToggleTarget::Step(id) => {
            let step = steps
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(ProgressError::UnknownTarget(id))?;
            step.is_completed = !step.is_completed;
        }
        ToggleTarget::StepStarted(id) => {
            let step = steps
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(ProgressError::UnknownTarget(id))?;
            step.is_started = !step.is_started;
        }
        ToggleTarget::SubModule(id) => {
            let sub_module = steps
                .iter_mut()
                .flat_map(|s| s.sub_modules.iter_mut())
                .find(|m| m.id == id)
                .ok_or(ProgressError::UnknownTarget(id))?;
            sub_module.is_completed = !sub_module.is_completed;
        }
    }

    Ok(compute_overall_progress(steps))
}

/// round(100 × completed top-level steps / total top-level steps);
/// 0 for an empty list.
pub fn compute_overall_progress(steps: &[RoadmapStep]) -> u8 {
    if steps.is_empty() {
        return 0;
    }
    let completed = steps.iter().filter(|s| s.is_completed).count();
    ((completed as f32 / steps.len() as f32) * 100.0).round() as u8
}
