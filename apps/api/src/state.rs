use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompletions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream completion backend. `LlmClient` in production, stubs in tests.
    pub llm: Arc<dyn ChatCompletions>,
    /// Immutable after startup.
    pub config: Config,
}
