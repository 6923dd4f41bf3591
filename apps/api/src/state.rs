use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no credential was configured at startup.
    pub completion: Option<Arc<dyn CompletionService>>,
    pub config: Config,
}

impl AppState {
    pub fn completion_configured(&self) -> bool {
        self.completion.is_some()
    }
}
