use crate::{
    openlib_schema::{search, subject},
    traits::ResultSet,
};

/// One card of the list view, regardless of whether it came from the subject
/// listing or from a search.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    /// Opaque key such as `/works/OL45804W`, leading slash included.
    pub identifier:         String,
    pub title:              String,
    pub authors:            Option<Vec<AuthorName>>,
    pub cover_id:           Option<u64>,
    pub first_publish_year: Option<i32>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct AuthorName {
    pub name: String,
}

impl From<subject::Work> for SearchResultItem {
    fn from(work: subject::Work) -> Self {
        let authors = work
            .authors
            .filter(|a| !a.is_empty())
            .map(|a| a.into_iter().map(|a| AuthorName { name: a.name }).collect());
        Self {
            identifier: work.key,
            title: work.title,
            authors,
            cover_id: work.cover_id,
            first_publish_year: work.first_publish_year,
        }
    }
}

impl From<search::Doc> for SearchResultItem {
    fn from(doc: search::Doc) -> Self {
        let authors = doc
            .author_name
            .filter(|a| !a.is_empty())
            .map(|a| a.into_iter().map(|name| AuthorName { name }).collect());
        Self {
            identifier: doc.key,
            title: doc.title,
            authors,
            cover_id: doc.cover_i,
            first_publish_year: doc.first_publish_year,
        }
    }
}

impl ResultSet for Vec<SearchResultItem> {
    fn is_empty_result(&self) -> bool {
        self.is_empty()
    }
}
