//! Sorted projections of a result set

use crate::types::Book;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// What to sort a result set by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Upstream order, which is the API's relevance ranking
    #[default]
    Relevance,
    Title,
    Author,
    Year,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Produce a sorted copy of `books`; the input is never mutated, so the
/// same base result set can be re-sorted repeatedly.
///
/// `Relevance` is a pass-through in both directions. Title and author
/// compare case-insensitively on the first value with missing values as
/// the empty string; year compares `first_publish_year` with missing as 0,
/// so unknown years sort first ascending and last descending. The sort is
/// stable: ties keep their upstream relevance order.
pub fn sort_books(books: &[Book], key: SortKey, direction: SortDirection) -> Vec<Book> {
    let mut sorted = books.to_vec();

    if key == SortKey::Relevance {
        return sorted;
    }

    sorted.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Relevance => Ordering::Equal,
            SortKey::Title => title_key(a).cmp(&title_key(b)),
            SortKey::Author => author_key(a).cmp(&author_key(b)),
            SortKey::Year => year_key(a).cmp(&year_key(b)),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    sorted
}

fn title_key(book: &Book) -> String {
    book.title.to_lowercase()
}

fn author_key(book: &Book) -> String {
    book.author_name
        .first()
        .map(|name| name.to_lowercase())
        .unwrap_or_default()
}

fn year_key(book: &Book) -> i32 {
    book.first_publish_year.unwrap_or(0)
}
