use crate::{
    config::Config,
    types::{
        cover::{cover_url, CoverSize, ImageSource},
        search_result::SearchResultItem,
        work::AuthorRef,
    },
};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_BOOKS: &str = "No books found.";
pub const NO_BOOKS_FOR_QUERY: &str = "No books found for your query.";

/// Large cover for `cover_id`, or the placeholder when there is none.
pub fn cover_image(cover_id: Option<impl std::fmt::Display>, config: &Config) -> ImageSource {
    match cover_id {
        Some(id) => ImageSource::new(
            cover_url(&config.covers_base, id, CoverSize::Large),
            &config.placeholder_image,
        ),
        None => ImageSource::placeholder(&config.placeholder_image),
    }
}

/// Cards only show the first author.
pub fn card_author(item: &SearchResultItem) -> String {
    item.authors
        .as_ref()
        .and_then(|authors| authors.first())
        .map(|a| a.name.clone())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

pub fn card_published(item: &SearchResultItem) -> String {
    item.first_publish_year
        .map(|year| format!("First Published: {year}"))
        .unwrap_or_default()
}

/// `/authors/OL34184A` -> `OL34184A`.
pub fn author_label(author: &AuthorRef) -> String {
    author
        .author_key
        .as_deref()
        .and_then(|key| key.split('/').nth(2))
        .filter(|segment| !segment.is_empty())
        .unwrap_or(UNKNOWN_AUTHOR)
        .to_string()
}

pub fn description(description: Option<&str>) -> String {
    description
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION)
        .to_string()
}

/// Treat a missing list and an empty one the same.
pub fn list_or_empty<T: Clone>(list: Option<&Vec<T>>) -> Vec<T> {
    list.cloned().unwrap_or_default()
}
