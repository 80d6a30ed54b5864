//! Cover image URL resolution

use crate::types::Book;

/// Base URL of the covers image service
pub const COVERS_BASE: &str = "https://covers.openlibrary.org/b";

/// Terminal fallback shown when no candidate resolves
pub const PLACEHOLDER_COVER: &str = "/placeholder-cover.svg";

/// Cover image sizes offered by the covers service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    Large,
    Medium,
    Small,
}

impl CoverSize {
    /// Size code used in cover URLs
    pub fn code(&self) -> &'static str {
        match self {
            CoverSize::Large => "L",
            CoverSize::Medium => "M",
            CoverSize::Small => "S",
        }
    }
}

/// All sizes in the order candidates are attempted
const SIZES: [CoverSize; 3] = [CoverSize::Large, CoverSize::Medium, CoverSize::Small];

/// URL for a single cover image by numeric cover id
pub fn cover_url(cover_id: i64, size: CoverSize) -> String {
    format!("{}/id/{}-{}.jpg", COVERS_BASE, cover_id, size.code())
}

/// Ordered candidate cover URLs for a book, first-wins.
///
/// Id-based URLs come first (all sizes), then ISBN-based URLs for the first
/// ISBN, and the placeholder terminates the list so it is never empty.
/// Whether any candidate actually renders is the caller's concern.
pub fn cover_candidates(book: &Book) -> Vec<String> {
    let mut urls = Vec::new();

    if let Some(cover_id) = book.cover_i {
        for size in SIZES {
            urls.push(cover_url(cover_id, size));
        }
    }

    if let Some(isbn) = book.isbn.first() {
        for size in SIZES {
            urls.push(format!("{}/isbn/{}-{}.jpg", COVERS_BASE, isbn, size.code()));
        }
    }

    urls.push(PLACEHOLDER_COVER.to_string());
    urls
}
