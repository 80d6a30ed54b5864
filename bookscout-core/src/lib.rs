//! Bookscout Core Library
//!
//! This crate provides the search, normalization, and favorites logic for
//! the Bookscout book discovery tool. Searches go to the Open Library API
//! and come back as normalized [`Book`] records; favorites persist locally
//! through a pluggable [`StorageProvider`].

pub mod client;
pub mod covers;
pub mod error;
pub mod favorites;
pub mod query;
pub mod sort;
pub mod storage;
pub mod types;

pub use client::{OpenLibraryClient, OPEN_LIBRARY_BASE, SEARCH_LIMIT};
pub use covers::{cover_candidates, cover_url, CoverSize, PLACEHOLDER_COVER};
pub use error::{Result, ScoutError, SearchError, StorageError};
pub use favorites::{FavoritesStore, FAVORITES_SLOT};
pub use query::build_query;
pub use sort::{sort_books, SortDirection, SortKey};
pub use storage::{LocalStorage, MemoryStorage, StorageProvider};
pub use types::{Book, RawDoc, SearchField, SearchQuery};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_construction() {
        let query = SearchQuery::new(SearchField::Title, "dune").with_language("en");
        assert_eq!(query.term, "dune");
        assert_eq!(build_query(&query), "title:dune&language=en");
    }
}
