#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use folio::{
    error::{ErrorKind, FetchError},
    openlibrary::{Endpoints, Fetch, OpenLibrary},
};

pub const SUBJECT_FICTION: &str = include_str!("../data/subject_fiction.json");
pub const SEARCH_DUNE: &str = include_str!("../data/search_dune.json");
pub const SEARCH_AUSTEN: &str = include_str!("../data/search_austen.json");
pub const SEARCH_NOTHING: &str = include_str!("../data/search_nothing.json");
pub const WORK_FOX: &str = include_str!("../data/work_fox.json");

#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    NetworkError,
}

/// Answers requests from a url -> reply table and remembers every url asked
/// for. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    replies:  Arc<Mutex<HashMap<String, Reply>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockClient {
    pub fn reply(&self, url: impl Into<String>, reply: Reply) -> &Self {
        self.replies.lock().unwrap().insert(url.into(), reply);
        self
    }

    pub fn body(&self, url: impl Into<String>, body: &str) -> &Self {
        self.reply(url, Reply::Body(body.to_string()))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for MockClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.replies.lock().unwrap().get(url) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::NetworkError) => {
                Err(FetchError::new(ErrorKind::Request, "connection reset"))
            }
            None => Err(FetchError::new(ErrorKind::Status, "404 Not Found")),
        }
    }

    async fn probe(&self, url: &str) -> Result<(), FetchError> {
        match self.replies.lock().unwrap().get(url) {
            Some(Reply::Body(_)) => Ok(()),
            _ => Err(FetchError::new(ErrorKind::Status, "404 Not Found")),
        }
    }
}

pub fn endpoints() -> Endpoints {
    Endpoints::new("https://openlibrary.org", "fiction", 10)
}

pub fn api(client: &MockClient) -> OpenLibrary<MockClient> {
    OpenLibrary::new(client.clone(), endpoints())
}
