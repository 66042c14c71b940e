//! Search logging — best-effort telemetry, never part of the response.
//!
//! `AppState` holds an `Arc<dyn SearchLogger>`. Production uses
//! `PgSearchLogger`; writes run on a detached task so the response never
//! waits on them, and failures are only logged.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::guidance::models::{Category, SearchRequest};
use crate::models::search::SearchLogRow;

#[async_trait]
pub trait SearchLogger: Send + Sync {
    async fn record(&self, query: &str, category: Category) -> Result<(), AppError>;
}

/// Appends to the `searches` table. Never updates or deletes.
pub struct PgSearchLogger {
    pool: PgPool,
}

impl PgSearchLogger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchLogger for PgSearchLogger {
    async fn record(&self, query: &str, category: Category) -> Result<(), AppError> {
        let row: SearchLogRow = sqlx::query_as(
            "INSERT INTO searches (query, type) VALUES ($1, $2) RETURNING id, query, type, created_at",
        )
        .bind(query)
        .bind(category.as_str())
        .fetch_one(&self.pool)
        .await?;

        debug!(
            "Logged search {} ({}) at {}",
            row.id, row.category, row.created_at
        );
        Ok(())
    }
}

/// Fire-and-forget: records the search on a detached task.
pub fn spawn_search_log(logger: Arc<dyn SearchLogger>, request: &SearchRequest) {
    let query = request.query.clone();
    let category = request.category;
    tokio::spawn(async move {
        if let Err(e) = logger.record(&query, category).await {
            warn!("Failed to log {category} search: {e}");
        }
    });
}
