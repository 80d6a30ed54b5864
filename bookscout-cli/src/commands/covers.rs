//! Covers command implementation

use super::{cached_results, open_storage};
use anyhow::Result;
use bookscout_core::{cover_candidates, FavoritesStore};

/// Print the ordered candidate cover URLs for a book key
pub async fn covers(data_dir: &str, key: &str) -> Result<()> {
    let storage = open_storage(data_dir);

    // Resolve from cached results first, then favorites
    let book = match cached_results(&storage)
        .await
        .into_iter()
        .find(|book| book.key == key)
    {
        Some(book) => book,
        None => FavoritesStore::load(storage)
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No record for key '{}'; run a search that includes it first",
                    key
                )
            })?,
    };

    for url in cover_candidates(&book) {
        println!("{}", url);
    }

    Ok(())
}
