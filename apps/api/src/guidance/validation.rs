//! Request validator for guidance searches.
//!
//! Works on the raw JSON body so the first offending field can be reported.
//! Fields are checked in order: `query`, then `type`.

use serde_json::{Map, Value};

use crate::errors::ValidationError;
use crate::guidance::models::{Category, SearchRequest};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a major or job title";

/// Validates a search body of the form `{ "query": string, "type": category }`.
/// Extra keys are ignored. The query is kept verbatim; trimming only decides
/// emptiness.
pub fn validate_search(body: &Value) -> Result<SearchRequest, ValidationError> {
    let object = body.as_object().ok_or_else(|| {
        ValidationError::new(format!("Expected object, received {}", kind_of(body)))
    })?;

    let query = validate_query(object)?;
    let category = validate_category(object)?;

    Ok(SearchRequest { query, category })
}

fn validate_query(object: &Map<String, Value>) -> Result<String, ValidationError> {
    match object.get("query") {
        None => Err(ValidationError::for_field("query", "Required")),
        Some(Value::String(q)) if q.trim().is_empty() => {
            Err(ValidationError::for_field("query", EMPTY_QUERY_MESSAGE))
        }
        Some(Value::String(q)) => Ok(q.clone()),
        Some(other) => Err(ValidationError::for_field(
            "query",
            format!("Expected string, received {}", kind_of(other)),
        )),
    }
}

fn validate_category(object: &Map<String, Value>) -> Result<Category, ValidationError> {
    match object.get("type") {
        None => Err(ValidationError::for_field("type", "Required")),
        Some(Value::String(s)) => Category::from_literal(s).ok_or_else(|| {
            ValidationError::for_field(
                "type",
                format!("Invalid enum value. Expected {}, received '{s}'", expected_literals()),
            )
        }),
        Some(other) => Err(ValidationError::for_field(
            "type",
            format!("Expected {}, received {}", expected_literals(), kind_of(other)),
        )),
    }
}

fn expected_literals() -> String {
    Category::ALL
        .iter()
        .map(|c| format!("'{}'", c.as_str()))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_valid_request() {
        let req = validate_search(&json!({ "query": "Nurse", "type": "suggest_major" })).unwrap();
        assert_eq!(req.query, "Nurse");
        assert_eq!(req.category, Category::SuggestMajor);
    }

    #[test]
    fn test_query_kept_verbatim() {
        let req = validate_search(&json!({ "query": "  Data Analyst ", "type": "job_apps" })).unwrap();
        assert_eq!(req.query, "  Data Analyst ");
    }

    #[test]
    fn test_ignores_extra_fields() {
        let body = json!({ "query": "Art", "type": "related_careers", "page": 2 });
        assert!(validate_search(&body).is_ok());
    }

    #[test]
    fn test_empty_query_rejected_with_field() {
        let err = validate_search(&json!({ "query": "", "type": "job_apps" })).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("query"));
        assert_eq!(err.message, EMPTY_QUERY_MESSAGE);
    }

    #[test]
    fn test_whitespace_query_rejected() {
        let err = validate_search(&json!({ "query": " \t\n", "type": "job_apps" })).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("query"));
    }

    #[test]
    fn test_missing_query_is_required() {
        let err = validate_search(&json!({ "type": "job_apps" })).unwrap_err();
        assert_eq!(err, ValidationError::for_field("query", "Required"));
    }

    #[test]
    fn test_non_string_query() {
        let err = validate_search(&json!({ "query": 42, "type": "job_apps" })).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("query"));
        assert_eq!(err.message, "Expected string, received number");
    }

    #[test]
    fn test_invalid_category_rejected() {
        let err = validate_search(&json!({ "query": "History", "type": "foo" })).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("type"));
        assert_eq!(
            err.message,
            "Invalid enum value. Expected 'job_apps' | 'related_careers' | 'suggest_major', received 'foo'"
        );
    }

    #[test]
    fn test_missing_category_is_required() {
        let err = validate_search(&json!({ "query": "History" })).unwrap_err();
        assert_eq!(err, ValidationError::for_field("type", "Required"));
    }

    #[test]
    fn test_query_checked_before_category() {
        let err = validate_search(&json!({ "query": "", "type": "foo" })).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("query"));
    }

    #[test]
    fn test_non_object_body_has_no_field() {
        let err = validate_search(&json!(["query"])).unwrap_err();
        assert_eq!(err.field, None);
        assert_eq!(err.message, "Expected object, received array");
    }
}
