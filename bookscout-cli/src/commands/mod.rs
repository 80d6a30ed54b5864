//! CLI command implementations

mod covers;
mod fav;
mod search;

pub use covers::covers;
pub use fav::{fav_list, fav_toggle};
pub use search::{search, SearchOptions};

use bookscout_core::{Book, LocalStorage, StorageProvider};
use std::sync::Arc;
use tracing::debug;

/// Storage slot holding the last search's normalized result set, so
/// favorites and covers commands can resolve a record by key
pub const RESULTS_SLOT: &str = "last-results.json";

/// Open the data directory as a storage port
fn open_storage(data_dir: &str) -> Arc<LocalStorage> {
    Arc::new(LocalStorage::new(data_dir))
}

/// Load the cached result set, degrading to empty when absent or stale
async fn cached_results(storage: &Arc<LocalStorage>) -> Vec<Book> {
    match storage.read(RESULTS_SLOT).await {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        Err(e) => {
            debug!("No cached results: {}", e);
            Vec::new()
        }
    }
}

/// Cache a result set for later key lookups; best-effort
async fn cache_results(storage: &Arc<LocalStorage>, books: &[Book]) {
    match serde_json::to_string(books) {
        Ok(serialized) => {
            if let Err(e) = storage.write(RESULTS_SLOT, &serialized).await {
                debug!("Failed to cache results: {}", e);
            }
        }
        Err(e) => debug!("Failed to serialize results: {}", e),
    }
}

/// One-line card for a book in text output
fn format_book_line(book: &Book) -> String {
    let year = book
        .year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Unknown Year".to_string());

    let mut line = format!("{} by {} ({})", book.title, book.author_label(), year);

    let editions = book.edition_label();
    if !editions.is_empty() {
        line.push_str(&format!(" · {}", editions));
    }
    if book.is_ebook {
        line.push_str(" · ebook");
    }

    line
}
