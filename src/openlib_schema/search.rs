use serde::{Deserialize, Serialize};

/// Response of `/search.json`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(rename = "numFound")]
    pub num_found: Option<u64>,
    #[serde(default)]
    pub docs:      Vec<Doc>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    pub key:                String,
    #[serde(default)]
    pub title:              String,
    pub author_name:        Option<Vec<String>>,
    pub author_key:         Option<Vec<String>>,
    pub cover_i:            Option<u64>,
    pub first_publish_year: Option<i32>,
}
