use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::Config,
    error::{ErrorKind, FetchError},
    navigation,
    openlib_schema::{search::SearchResults, subject::Subject, work::Work},
    types::{cover::ImageSource, search_result::SearchResultItem, work::WorkDetail},
};

/// The HTTP seam. Production code uses [`reqwest::Client`]; tests script their
/// own responses.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// GET `url` and return the body of a successful response.
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;

    /// Check that `url` can be loaded, without reading it.
    async fn probe(&self, url: &str) -> Result<(), FetchError>;
}

impl Fetch for reqwest::Client {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");
        let resp = self.get(url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }

    async fn probe(&self, url: &str) -> Result<(), FetchError> {
        debug!(url, "HEAD");
        self.head(url).send().await?.error_for_status()?;
        Ok(())
    }
}

pub fn build_client(config: &Config) -> Result<reqwest::Client, FetchError> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Parse a response body, keeping the JSON path of the first mismatch.
pub fn parse<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    let de = &mut serde_json::Deserializer::from_str(body);
    Ok(serde_path_to_error::deserialize(de)?)
}

/// Urls of the three endpoints we read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base:        String,
    default_subject: String,
    limit:           u32,
}

impl Endpoints {
    pub fn new(api_base: impl Into<String>, default_subject: impl Into<String>, limit: u32) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            default_subject: default_subject.into(),
            limit,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_base, &config.default_subject, config.result_limit)
    }

    pub fn default_listing(&self) -> String {
        format!(
            "{}/subjects/{}.json?limit={}",
            self.api_base, self.default_subject, self.limit
        )
    }

    pub fn search(&self, query: &str) -> Result<String, FetchError> {
        let base = format!("{}/search.json", self.api_base);
        let limit = self.limit.to_string();
        let url = reqwest::Url::parse_with_params(&base, &[("q", query), ("limit", limit.as_str())])
            .map_err(|e| FetchError::wrap(ErrorKind::Url, e))?;
        Ok(url.to_string())
    }

    /// Accepts a bare id or one that still carries its `/works/` segment.
    pub fn work(&self, identifier: &str) -> Result<String, FetchError> {
        let id = navigation::work_id(identifier).ok_or_else(|| {
            FetchError::new(ErrorKind::Url, format!("not a work id: {identifier}"))
        })?;
        Ok(format!("{}/works/{id}.json", self.api_base))
    }
}

#[derive(Debug, Clone)]
pub struct OpenLibrary<C> {
    client:    C,
    endpoints: Endpoints,
}

impl<C: Fetch> OpenLibrary<C> {
    pub fn new(client: C, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let body = self.client.get_text(url).await?;
        parse(&body)
    }

    /// Works of the configured default subject.
    pub async fn default_listing(&self) -> Result<Vec<SearchResultItem>, FetchError> {
        let subject: Subject = self.get_json(&self.endpoints.default_listing()).await?;
        debug!(count = subject.works.len(), "Fetched default listing");
        Ok(subject.works.into_iter().map(SearchResultItem::from).collect())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, FetchError> {
        let url = self.endpoints.search(query)?;
        let results: SearchResults = self.get_json(&url).await?;
        debug!(
            query,
            count = results.docs.len(),
            found = results.num_found,
            "Fetched search results"
        );
        Ok(results.docs.into_iter().map(SearchResultItem::from).collect())
    }

    pub async fn work(&self, identifier: &str) -> Result<WorkDetail, FetchError> {
        let work: Work = self.get_json(&self.endpoints.work(identifier)?).await?;
        Ok(WorkDetail::from(work))
    }

    /// Swap `image` to its fallback if it can't be loaded.
    pub async fn probe_cover(&self, image: &mut ImageSource) {
        if image.is_placeholder() {
            return;
        }
        if let Err(e) = self.client.probe(image.src()).await {
            debug!(src = image.src(), error = %e, "Cover failed to load, using placeholder");
            image.on_error();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("https://openlibrary.org/", "fiction", 10)
    }

    #[test]
    fn listing_url() {
        assert_eq!(
            endpoints().default_listing(),
            "https://openlibrary.org/subjects/fiction.json?limit=10"
        );
    }

    #[test]
    fn search_url_escapes_query() {
        assert_eq!(
            endpoints().search("harry potter & co").unwrap(),
            "https://openlibrary.org/search.json?q=harry+potter+%26+co&limit=10"
        );
    }

    #[test]
    fn work_url() {
        assert_eq!(
            endpoints().work("OL45804W").unwrap(),
            "https://openlibrary.org/works/OL45804W.json"
        );
        assert_eq!(
            endpoints().work("/works/OL45804W").unwrap(),
            "https://openlibrary.org/works/OL45804W.json"
        );
        assert_eq!(
            endpoints().work("OL1W/editions").unwrap_err().kind(),
            ErrorKind::Url
        );
    }

    #[derive(Default)]
    struct Canned(HashMap<String, String>);

    impl Fetch for Canned {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.0
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::new(ErrorKind::Status, "404 Not Found"))
        }

        async fn probe(&self, url: &str) -> Result<(), FetchError> {
            self.get_text(url).await.map(|_| ())
        }
    }

    #[tokio::test]
    async fn listing_is_parsed_in_order() {
        let mut canned = Canned::default();
        canned.0.insert(
            endpoints().default_listing(),
            r#"{"name": "fiction", "works": [
                {"key": "/works/OL1W", "title": "One", "cover_id": 1},
                {"key": "/works/OL2W", "title": "Two", "authors": [{"key": "/authors/OL9A", "name": "Nine"}]}
            ]}"#
            .into(),
        );
        let api = OpenLibrary::new(canned, endpoints());
        let items = api.default_listing().await.unwrap();
        assert_eq!(
            items.iter().map(|i| i.title.as_str()).collect::<Vec<_>>(),
            vec!["One", "Two"]
        );
        assert_eq!(items[1].authors.as_ref().unwrap()[0].name, "Nine");
    }

    #[tokio::test]
    async fn malformed_body_is_a_deserialize_error() {
        let mut canned = Canned::default();
        canned.0.insert(endpoints().work("OL1W").unwrap(), "<html>".into());
        let api = OpenLibrary::new(canned, endpoints());
        let err = api.work("OL1W").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialize);
    }

    #[tokio::test]
    async fn unreachable_cover_falls_back() {
        let api = OpenLibrary::new(Canned::default(), endpoints());
        let mut image = ImageSource::new(
            "https://covers.openlibrary.org/b/id/1-L.jpg",
            "https://via.placeholder.com/150",
        );
        api.probe_cover(&mut image).await;
        assert!(image.is_placeholder());
    }
}
