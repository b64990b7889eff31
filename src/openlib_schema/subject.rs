use serde::{Deserialize, Serialize};

/// Response of `/subjects/{subject}.json`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name:       Option<String>,
    pub work_count: Option<u64>,
    #[serde(default)]
    pub works:      Vec<Work>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    pub key:                String,
    #[serde(default)]
    pub title:              String,
    pub authors:            Option<Vec<Author>>,
    pub cover_id:           Option<u64>,
    pub first_publish_year: Option<i32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub key:  Option<String>,
    pub name: String,
}
