use std::sync::Arc;

use crate::guidance::logger::SearchLogger;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Search log sink. Postgres in production, in-memory in tests.
    pub search_logger: Arc<dyn SearchLogger>,
}
