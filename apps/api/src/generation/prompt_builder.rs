//! Prompt assembly — turns a `GenerationRequest` into a system + user prompt
//! pair.
//!
//! Text assembly only: user-supplied text is substituted verbatim, not
//! escaped. This step is not a security boundary.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::errors::AppError;
use crate::generation::prompts::{
    CAREER_PROMPT_TEMPLATE, CAREER_SYSTEM, CHAT_PROMPT_TEMPLATE, CHAT_SYSTEM,
    QUIZ_PROMPT_TEMPLATE, QUIZ_SYSTEM, ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM,
};
use crate::generation::{ContentKind, GenerationRequest};

/// Qualitative angles injected into quiz prompts so repeated requests for
/// the same topic/level are encouraged to diverge. A prompt-diversity
/// heuristic, not a security mechanism.
pub const VARIATION_FOCUSES: &[&str] = &[
    "security pitfalls",
    "performance trade-offs",
    "debugging scenarios",
    "architecture decisions",
    "edge cases and failure modes",
];

const SEED_TOKEN_LEN: usize = 6;

/// A fully assembled prompt ready for the generation client.
#[derive(Debug, Clone)]
pub struct BuiltPrompt {
    pub system: &'static str,
    pub user: String,
}

/// Builds the prompt for a request. All randomness flows through the
/// caller-supplied `rng` so tests can pin a seed and assert determinism.
pub fn build_prompt<R: Rng>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<BuiltPrompt, AppError> {
    match request.kind {
        ContentKind::Quiz => {
            let focus = VARIATION_FOCUSES[rng.gen_range(0..VARIATION_FOCUSES.len())];
            let seed = request
                .variation_seed
                .clone()
                .unwrap_or_else(|| seed_token(rng));
            Ok(BuiltPrompt {
                system: QUIZ_SYSTEM,
                user: QUIZ_PROMPT_TEMPLATE
                    .replace("{topic}", &request.topic)
                    .replace("{level}", request.level.as_str())
                    .replace("{variation_focus}", focus)
                    .replace("{seed}", &seed),
            })
        }
        ContentKind::Roadmap => Ok(BuiltPrompt {
            system: ROADMAP_SYSTEM,
            user: ROADMAP_PROMPT_TEMPLATE
                .replace("{topic}", &request.topic)
                .replace("{level}", request.level.as_str()),
        }),
        ContentKind::CareerSimulation => {
            let profile_json = match &request.profile {
                Some(profile) => serde_json::to_string_pretty(profile).map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}"))
                })?,
                None => "{}".to_string(),
            };
            Ok(BuiltPrompt {
                system: CAREER_SYSTEM,
                user: CAREER_PROMPT_TEMPLATE
                    .replace("{domain}", &request.topic)
                    .replace("{profile_json}", &profile_json),
            })
        }
        ContentKind::ChatReply => Ok(BuiltPrompt {
            system: CHAT_SYSTEM,
            user: CHAT_PROMPT_TEMPLATE.replace("{message}", &request.topic),
        }),
    }
}

/// Short random alphanumeric token embedded in quiz prompts.
fn seed_token<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(SEED_TOKEN_LEN)
        .map(char::from)
        .collect()
}
