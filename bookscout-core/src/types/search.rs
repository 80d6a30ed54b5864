//! Search input types

use serde::{Deserialize, Serialize};

/// Which record field the search term is scoped to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Subject,
    /// Unscoped full-text search
    Any,
}

impl SearchField {
    /// The query qualifier the API understands, e.g. `title:` for `Title`.
    /// `Any` has no qualifier.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            SearchField::Title => Some("title:"),
            SearchField::Author => Some("author:"),
            SearchField::Subject => Some("subject:"),
            SearchField::Any => None,
        }
    }
}

/// Input for one search: a scoped term plus optional filters.
///
/// `term` is expected to be non-empty and trimmed by the caller; the
/// filters treat `None` and the empty string the same way (unset).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    pub field: SearchField,
    pub term: String,
    pub language: Option<String>,
    pub publish_year: Option<String>,
    pub subject: Option<String>,
}

impl SearchQuery {
    /// Create a query with the given scope and term, no filters
    pub fn new(field: SearchField, term: impl Into<String>) -> Self {
        Self {
            field,
            term: term.into(),
            language: None,
            publish_year: None,
            subject: None,
        }
    }

    /// Filter by language code (passed to the API verbatim)
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Filter by first publish year. The value is forwarded unvalidated;
    /// the API rejects malformed years.
    pub fn with_publish_year(mut self, year: impl Into<String>) -> Self {
        self.publish_year = Some(year.into());
        self
    }

    /// Filter by subject tag
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}
