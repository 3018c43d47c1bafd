use civic_lib::{Category, ListView, StatusCounters, ViewFilter};
use serde::Serialize;

/// Active filter as shown in list output.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

impl From<&ViewFilter> for FilterOutput {
    fn from(filter: &ViewFilter) -> Self {
        Self {
            category: filter.category,
            search: filter.query.trim().to_string(),
        }
    }
}

/// Result of `list`.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    pub counters: StatusCounters,
    pub filter: FilterOutput,
    pub list: ListView,
}

/// Result of `theme`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeOutput {
    pub dark: bool,
}

/// Result of `categories`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOutput {
    pub categories: Vec<Category>,
}
