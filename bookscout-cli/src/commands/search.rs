//! Search command implementation

use super::{cache_results, format_book_line, open_storage};
use anyhow::Result;
use bookscout_core::{
    sort_books, Book, OpenLibraryClient, SearchField, SearchQuery, SortDirection, SortKey,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

/// JSON output envelope
#[derive(Serialize)]
struct SearchOutput<'a> {
    count: usize,
    results: &'a [Book],
}

/// Parsed search arguments
pub struct SearchOptions {
    pub term: String,
    pub field: SearchField,
    pub language: Option<String>,
    pub year: Option<String>,
    pub subject: Option<String>,
    pub sort: SortKey,
    pub direction: SortDirection,
    pub json: bool,
}

/// Run one search and print the result set
pub async fn search(data_dir: &str, options: SearchOptions) -> Result<()> {
    let term = options.term.trim();
    if term.is_empty() {
        anyhow::bail!("Search term must not be empty");
    }

    let mut query = SearchQuery::new(options.field, term);
    if let Some(language) = options.language {
        query = query.with_language(language);
    }
    if let Some(year) = options.year {
        query = query.with_publish_year(year);
    }
    if let Some(subject) = options.subject {
        query = query.with_subject(subject);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Searching Open Library...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let client = OpenLibraryClient::new();
    let result = client.search(&query).await;
    spinner.finish_and_clear();

    let books = result?;

    // Cache the normalized set in upstream order so fav/covers commands can
    // resolve records by key later
    let storage = open_storage(data_dir);
    cache_results(&storage, &books).await;

    let sorted = sort_books(&books, options.sort, options.direction);

    if options.json {
        let output = SearchOutput {
            count: sorted.len(),
            results: &sorted,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} found",
            books.len(),
            if books.len() == 1 { "book" } else { "books" }
        );
        println!();
        for (index, book) in sorted.iter().enumerate() {
            println!("{:>3}. {}", index + 1, format_book_line(book));
            println!("     {}", book.key);
        }
    }

    Ok(())
}
