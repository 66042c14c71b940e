#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the append-only `searches` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchLogRow {
    pub id: i32,
    pub query: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category: String,
    pub created_at: DateTime<Utc>,
}
