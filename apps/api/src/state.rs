use crate::config::Config;
use crate::retrieval::VerseRetriever;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub retriever: VerseRetriever,
    pub config: Config,
}
