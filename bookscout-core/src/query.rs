//! Search query construction

use crate::types::SearchQuery;

/// Build the `q=` value for one search.
///
/// The term is percent-encoded and prefixed with the field qualifier;
/// filters are appended as extra query parameters. Language codes are
/// appended raw, which is what the API expects for them. The result limit
/// and field projection are fixed by the client, not built here.
pub fn build_query(query: &SearchQuery) -> String {
    let encoded_term = urlencoding::encode(&query.term);

    let mut q = match query.field.prefix() {
        Some(prefix) => format!("{}{}", prefix, encoded_term),
        None => encoded_term.into_owned(),
    };

    if let Some(language) = non_empty(&query.language) {
        q.push_str("&language=");
        q.push_str(language);
    }

    if let Some(year) = non_empty(&query.publish_year) {
        q.push_str("&first_publish_year=");
        q.push_str(year);
    }

    if let Some(subject) = non_empty(&query.subject) {
        q.push_str("&subject=");
        q.push_str(&urlencoding::encode(subject));
    }

    q
}

/// Treat `None` and the empty string both as "filter unset"
fn non_empty(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|value| !value.is_empty())
}
