//! Favorites commands

use super::{cached_results, format_book_line, open_storage};
use anyhow::Result;
use bookscout_core::FavoritesStore;

/// List saved favorites
pub async fn fav_list(data_dir: &str, json: bool) -> Result<()> {
    let storage = open_storage(data_dir);
    let favorites = FavoritesStore::load(storage).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&favorites.books())?);
        return Ok(());
    }

    if favorites.is_empty() {
        println!("No favorites saved yet. Toggle one with: bookscout fav toggle <KEY>");
        return Ok(());
    }

    println!(
        "{} favorite{}",
        favorites.len(),
        if favorites.len() == 1 { "" } else { "s" }
    );
    println!();
    for book in favorites.books() {
        println!("  {}", format_book_line(book));
        println!("     {}", book.key);
    }

    Ok(())
}

/// Add or remove a favorite by book key.
///
/// The full record comes from the favorites map itself (removal) or from
/// the last search's cached results (addition).
pub async fn fav_toggle(data_dir: &str, key: &str) -> Result<()> {
    let storage = open_storage(data_dir);
    let mut favorites = FavoritesStore::load(storage.clone()).await;

    let book = match favorites.get(key).cloned() {
        Some(book) => book,
        None => cached_results(&storage)
            .await
            .into_iter()
            .find(|book| book.key == key)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No record for key '{}'; run a search that includes it first",
                    key
                )
            })?,
    };

    let now_favorite = favorites.toggle(&book).await;
    if now_favorite {
        println!("Added to favorites: {}", format_book_line(&book));
    } else {
        println!("Removed from favorites: {}", format_book_line(&book));
    }

    Ok(())
}
