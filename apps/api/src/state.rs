use std::sync::Arc;

use crate::intake::session::SessionStore;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend, built once at startup. `LlmClient` in production.
    pub llm: Arc<dyn CompletionBackend>,
    pub sessions: SessionStore,
}
