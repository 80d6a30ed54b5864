//! End-to-end tests for the search pipeline short of the network:
//! response parsing, normalization, sorting, and favorites persistence.

use bookscout_core::types::SearchResponse;
use bookscout_core::{
    cover_candidates, sort_books, Book, FavoritesStore, LocalStorage, SortDirection, SortKey,
    StorageProvider, FAVORITES_SLOT, PLACEHOLDER_COVER,
};
use std::sync::Arc;

/// A trimmed but shape-accurate search response
const SAMPLE_RESPONSE: &str = r#"{
    "numFound": 3,
    "docs": [
        {
            "key": "/works/OL893415W",
            "title": "Dune",
            "author_name": ["Frank Herbert"],
            "first_publish_year": 1965,
            "cover_i": 11481354,
            "edition_count": 120,
            "language": ["eng", "fre"],
            "isbn": ["9780441013593"],
            "ebook_access": "borrowable",
            "number_of_pages_median": 658,
            "has_fulltext": true
        },
        {
            "key": "/works/OL46125W",
            "author_name": ["Isaac Asimov"],
            "first_publish_year": 1951,
            "ebook_access": "no-ebook"
        },
        {
            "key": "/works/OL17332W",
            "title": "The Dispossessed",
            "publish_year": [1974, 1999]
        }
    ]
}"#;

fn normalized_sample() -> Vec<Book> {
    let response: SearchResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
    response.docs.into_iter().map(Book::from_raw).collect()
}

#[test]
fn normalization_enforces_invariants_over_real_shapes() {
    let books = normalized_sample();
    assert_eq!(books.len(), 3);

    // Order preserved
    assert_eq!(books[0].key, "/works/OL893415W");
    assert_eq!(books[1].key, "/works/OL46125W");

    // No book escapes with a missing title or author list
    for book in &books {
        assert!(!book.title.is_empty());
    }
    assert_eq!(books[1].title, "Untitled");
    assert_eq!(books[2].author_name, Vec::<String>::new());

    // Computed fields
    assert!(books[0].has_cover);
    assert!(books[0].is_ebook);
    assert_eq!(books[0].page_count, Some(658));
    assert!(!books[1].is_ebook);
    assert!(!books[2].has_cover);

    // Display year falls back to the publish_year list
    assert_eq!(books[2].year(), Some(1974));
}

#[test]
fn sorting_projects_without_touching_the_base_set() {
    let books = normalized_sample();

    let by_year = sort_books(&books, SortKey::Year, SortDirection::Ascending);
    // The Dispossessed has no first_publish_year, so it sorts first as 0
    assert_eq!(by_year[0].key, "/works/OL17332W");
    assert_eq!(by_year[1].key, "/works/OL46125W");
    assert_eq!(by_year[2].key, "/works/OL893415W");

    let by_title = sort_books(&books, SortKey::Title, SortDirection::Descending);
    assert_eq!(by_title[0].title, "Untitled");

    // Base set unchanged after both projections
    assert_eq!(books[0].key, "/works/OL893415W");
}

#[test]
fn cover_candidates_cover_every_record() {
    for book in normalized_sample() {
        let urls = cover_candidates(&book);
        assert!(!urls.is_empty());
        assert_eq!(urls.last().map(String::as_str), Some(PLACEHOLDER_COVER));
    }
}

#[tokio::test]
async fn favorites_survive_a_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let books = normalized_sample();

    {
        let storage = Arc::new(LocalStorage::new(dir.path()));
        let mut favorites = FavoritesStore::load(storage).await;
        favorites.toggle(&books[0]).await;
        favorites.toggle(&books[2]).await;
        assert_eq!(favorites.len(), 2);
    }

    // Fresh store over the same directory sees the same map
    let storage = Arc::new(LocalStorage::new(dir.path()));
    let favorites = FavoritesStore::load(storage.clone()).await;
    assert_eq!(favorites.len(), 2);
    assert!(favorites.is_favorite("/works/OL893415W"));
    assert!(favorites.is_favorite("/works/OL17332W"));
    assert!(!favorites.is_favorite("/works/OL46125W"));

    // The durable slot itself is a JSON map keyed by book key
    let raw = storage.read(FAVORITES_SLOT).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.get("/works/OL893415W").is_some());
}
