use crate::catalog::service::CatalogService;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Lessons and modules behind the configured key-value store.
    pub catalog: CatalogService,
    /// Absent when no API key is configured; generation endpoints answer 503.
    pub llm: Option<LlmClient>,
    pub config: Config,
}
