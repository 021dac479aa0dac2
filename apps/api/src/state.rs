use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::lenses::generator::SchemaMode;
use crate::lenses::store::ContentStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    /// Outbound generation backend. `LlmClient` in production.
    pub llm: Arc<dyn TextGenerator>,
    pub schema_mode: SchemaMode,
    /// Single permit: a second submission while one is running is turned away, not queued.
    pub generation_gate: Arc<Semaphore>,
}

impl AppState {
    pub fn new(store: ContentStore, llm: Arc<dyn TextGenerator>, schema_mode: SchemaMode) -> Self {
        Self {
            store: Arc::new(store),
            llm,
            schema_mode,
            generation_gate: Arc::new(Semaphore::new(1)),
        }
    }
}
