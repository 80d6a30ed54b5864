//! Book records: the raw upstream shape and the normalized form

use serde::{Deserialize, Serialize};

/// Placeholder title for records the API returns without one
pub const UNTITLED: &str = "Untitled";

/// `ebook_access` values that mean the book is readable online
const EBOOK_ACCESS_AVAILABLE: [&str; 2] = ["borrowable", "public"];

/// Top-level search response body
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<RawDoc>,
}

/// One raw document as the search API returns it.
///
/// The API guarantees nothing about which fields are present, so every
/// field is optional here and [`Book::from_raw`] fills in the defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawDoc {
    #[serde(default)]
    pub key: String,
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<i32>,
    pub publish_year: Option<Vec<i32>>,
    pub subject: Option<Vec<String>>,
    pub language: Option<Vec<String>>,
    pub cover_i: Option<i64>,
    pub isbn: Option<Vec<String>>,
    pub edition_count: Option<u32>,
    pub number_of_pages_median: Option<u32>,
    pub ebook_access: Option<String>,
    pub has_fulltext: Option<bool>,
}

/// A normalized book record.
///
/// After normalization `title` is never empty and `author_name` is always
/// present (possibly empty). `has_cover`, `is_ebook` and `page_count` are
/// computed here and never trusted from upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Stable opaque identifier, e.g. `/works/OL45883W`. Map key for favorites.
    pub key: String,

    pub title: String,

    pub author_name: Vec<String>,

    pub first_publish_year: Option<i32>,

    /// All known publish years, used for display only when
    /// `first_publish_year` is absent
    #[serde(default)]
    pub publish_year: Vec<i32>,

    #[serde(default)]
    pub subject: Vec<String>,

    /// ISO language codes of known editions
    #[serde(default)]
    pub language: Vec<String>,

    /// Numeric cover identifier in the covers service
    pub cover_i: Option<i64>,

    #[serde(default)]
    pub isbn: Vec<String>,

    pub edition_count: Option<u32>,

    pub number_of_pages_median: Option<u32>,

    pub ebook_access: Option<String>,

    #[serde(default)]
    pub has_fulltext: bool,

    /// Whether a cover id is present
    pub has_cover: bool,

    /// Whether the book can be read or borrowed online
    pub is_ebook: bool,

    /// Alias of `number_of_pages_median`
    pub page_count: Option<u32>,
}

impl Book {
    /// Normalize a raw API document into a `Book`.
    ///
    /// Total over any partial input: missing fields get defaults, computed
    /// fields are derived, nothing can fail.
    pub fn from_raw(raw: RawDoc) -> Self {
        let is_ebook = raw
            .ebook_access
            .as_deref()
            .map(|access| EBOOK_ACCESS_AVAILABLE.contains(&access))
            .unwrap_or(false);

        Self {
            key: raw.key,
            title: raw.title.unwrap_or_else(|| UNTITLED.to_string()),
            author_name: raw.author_name.unwrap_or_default(),
            first_publish_year: raw.first_publish_year,
            publish_year: raw.publish_year.unwrap_or_default(),
            subject: raw.subject.unwrap_or_default(),
            language: raw.language.unwrap_or_default(),
            cover_i: raw.cover_i,
            isbn: raw.isbn.unwrap_or_default(),
            edition_count: raw.edition_count,
            number_of_pages_median: raw.number_of_pages_median,
            ebook_access: raw.ebook_access,
            has_fulltext: raw.has_fulltext.unwrap_or(false),
            has_cover: raw.cover_i.is_some(),
            is_ebook,
            page_count: raw.number_of_pages_median,
        }
    }

    /// Comma-joined author line, or "Unknown Author"
    pub fn author_label(&self) -> String {
        if self.author_name.is_empty() {
            "Unknown Author".to_string()
        } else {
            self.author_name.join(", ")
        }
    }

    /// Best known publication year: `first_publish_year`, falling back to
    /// the earliest entry in `publish_year`
    pub fn year(&self) -> Option<i32> {
        self.first_publish_year
            .or_else(|| self.publish_year.first().copied())
    }

    /// Edition-count label, e.g. "3 editions", empty when the count is unknown
    pub fn edition_label(&self) -> String {
        match self.edition_count {
            Some(1) => "1 edition".to_string(),
            Some(n) => format!("{} editions", n),
            None => String::new(),
        }
    }
}

impl From<RawDoc> for Book {
    fn from(raw: RawDoc) -> Self {
        Book::from_raw(raw)
    }
}
