use serde::{Deserialize, Serialize};

/// Which rule table a search is answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    JobApps,
    RelatedCareers,
    SuggestMajor,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::JobApps,
        Category::RelatedCareers,
        Category::SuggestMajor,
    ];

    /// Wire literal, also the value persisted in `searches.type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::JobApps => "job_apps",
            Category::RelatedCareers => "related_careers",
            Category::SuggestMajor => "suggest_major",
        }
    }

    pub fn from_literal(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated search. Only `validation::validate_search` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub category: Category,
}

/// One suggestion card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ResultItem>,
}
