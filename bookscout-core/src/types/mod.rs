//! Core types for Bookscout book records and search input

mod book;
mod search;

pub use book::{Book, RawDoc, SearchResponse, UNTITLED};
pub use search::{SearchField, SearchQuery};
