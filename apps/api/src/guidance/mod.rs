// Guidance search: request validation, rule-table classification and
// best-effort search logging behind POST /api/guidance/search.

pub mod classifier;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod validation;
