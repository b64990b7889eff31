use serde::{Deserialize, Serialize};

use super::text::TextValue;

/// Response of `/works/{id}.json`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    pub key:                String,
    pub title:              String,
    pub authors:            Option<Vec<Author>>,
    pub first_publish_date: Option<String>,
    pub description:        Option<TextValue>,
    pub covers:             Option<Vec<i64>>,
    pub subjects:           Option<Vec<String>>,
    pub subject_places:     Option<Vec<String>>,
    pub dewey_number:       Option<Vec<String>>,
    pub links:              Option<Vec<Link>>,
    pub excerpts:           Option<Vec<Excerpt>>,
}

/// Entries come in as `{"author": {"key": ...}, "type": ...}`, but either
/// level may be missing.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub author: Option<AuthorName>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorName {
    pub key: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub title: String,
    pub url:   String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excerpt {
    pub excerpt: TextValue,
}
