use tracing::debug;

use super::state::{Lifecycle, RacePolicy, Ticket, ViewState};
use crate::{
    error::FetchError,
    navigation,
    openlibrary::{Fetch, OpenLibrary},
    types::search_result::SearchResultItem,
};

pub const LIST_ERROR: &str = "An error occurred while fetching data.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    DefaultListing,
    Search(String),
}

/// A list fetch that has entered `Loading` but not completed yet.
#[must_use]
#[derive(Debug)]
pub struct PendingFetch {
    ticket:  Ticket,
    request: ListRequest,
}

/// Search box plus results grid.
#[derive(Debug)]
pub struct ListView<C> {
    api:       OpenLibrary<C>,
    lifecycle: Lifecycle<Vec<SearchResultItem>>,
    shown:     Option<ListRequest>,
    mounted:   bool,
}

impl<C: Fetch> ListView<C> {
    pub fn new(api: OpenLibrary<C>, policy: RacePolicy) -> Self {
        Self {
            api,
            lifecycle: Lifecycle::new(policy, LIST_ERROR),
            shown: None,
            mounted: false,
        }
    }

    pub fn state(&self) -> &ViewState<Vec<SearchResultItem>> {
        self.lifecycle.state()
    }

    pub fn api(&self) -> &OpenLibrary<C> {
        &self.api
    }

    /// The query whose outcome is currently displayed, if it was a search.
    pub fn query(&self) -> Option<&str> {
        match &self.shown {
            Some(ListRequest::Search(q)) => Some(q),
            _ => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Load the default listing. Only the first call after construction or
    /// [`ListView::unmount`] does anything.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let pending = self.begin(ListRequest::DefaultListing);
        let outcome = self.run(&pending).await;
        self.finish(pending, outcome);
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.shown = None;
        self.lifecycle.reset();
    }

    /// Start a search. Blank queries are ignored and leave the state as is.
    ///
    /// A search counts as mounting the view, so a later [`ListView::mount`]
    /// keeps the results instead of loading the default listing over them.
    pub fn begin_search(&mut self, query: &str) -> Option<PendingFetch> {
        if query.trim().is_empty() {
            debug!("Ignoring blank search");
            return None;
        }
        self.mounted = true;
        Some(self.begin(ListRequest::Search(query.to_string())))
    }

    fn begin(&mut self, request: ListRequest) -> PendingFetch {
        let ticket = self.lifecycle.begin();
        PendingFetch { ticket, request }
    }

    /// Perform the network call of a pending fetch. Does not touch view state.
    pub async fn run(&self, pending: &PendingFetch) -> Result<Vec<SearchResultItem>, FetchError> {
        match &pending.request {
            ListRequest::DefaultListing => self.api.default_listing().await,
            ListRequest::Search(query) => self.api.search(query).await,
        }
    }

    /// Hand the outcome of `pending` to the lifecycle. Returns whether it was
    /// applied.
    pub fn finish(
        &mut self,
        pending: PendingFetch,
        outcome: Result<Vec<SearchResultItem>, FetchError>,
    ) -> bool {
        let applied = self.lifecycle.resolve(pending.ticket, outcome);
        if applied {
            self.shown = Some(pending.request);
        }
        applied
    }

    pub async fn search(&mut self, query: &str) {
        if let Some(pending) = self.begin_search(query) {
            let outcome = self.run(&pending).await;
            self.finish(pending, outcome);
        }
    }

    /// Navigation target of the card at `index`.
    pub fn select(&self, index: usize) -> Option<String> {
        self.state()
            .data()
            .and_then(|items| items.get(index))
            .map(|item| navigation::card_target(&item.identifier))
    }
}
