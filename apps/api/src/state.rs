use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::llm_client::{GenerationOptions, TextGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Injected generation client: `HttpGenerationClient` in production,
    /// a canned double in tests.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}

impl AppState {
    /// Options applied to every upstream call; the deadline comes from config.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            deadline: Duration::from_secs(self.config.generation_timeout_secs),
            ..GenerationOptions::default()
        }
    }
}
