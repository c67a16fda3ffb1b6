pub mod career;
pub mod quiz;
pub mod roadmap;

use serde::{Deserialize, Serialize};

/// Difficulty level attached to generated content. Serialized capitalized
/// ("Beginner") — the form the web client sends and renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}
