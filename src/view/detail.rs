use super::state::{Lifecycle, RacePolicy, Ticket, ViewState};
use crate::{
    error::FetchError,
    navigation,
    openlibrary::{Fetch, OpenLibrary},
    types::work::WorkDetail,
};

pub const DETAIL_ERROR: &str = "An error occurred while fetching the book details.";

#[must_use]
#[derive(Debug)]
pub struct PendingWork {
    ticket:     Ticket,
    identifier: String,
}

/// Detail page of a single work, keyed by the id from its route.
#[derive(Debug)]
pub struct DetailView<C> {
    api:        OpenLibrary<C>,
    lifecycle:  Lifecycle<WorkDetail>,
    identifier: Option<String>,
}

impl<C: Fetch> DetailView<C> {
    pub fn new(api: OpenLibrary<C>, policy: RacePolicy) -> Self {
        Self {
            api,
            lifecycle: Lifecycle::new(policy, DETAIL_ERROR),
            identifier: None,
        }
    }

    pub fn state(&self) -> &ViewState<WorkDetail> {
        self.lifecycle.state()
    }

    pub fn api(&self) -> &OpenLibrary<C> {
        &self.api
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn begin(&mut self, identifier: &str) -> PendingWork {
        let identifier = navigation::work_id(identifier).unwrap_or(identifier);
        self.identifier = Some(identifier.to_string());
        PendingWork {
            ticket:     self.lifecycle.begin(),
            identifier: identifier.to_string(),
        }
    }

    pub async fn run(&self, pending: &PendingWork) -> Result<WorkDetail, FetchError> {
        self.api.work(&pending.identifier).await
    }

    pub fn finish(&mut self, pending: PendingWork, outcome: Result<WorkDetail, FetchError>) -> bool {
        self.lifecycle.resolve(pending.ticket, outcome)
    }

    /// Fetch `identifier` unconditionally.
    pub async fn mount(&mut self, identifier: &str) {
        let pending = self.begin(identifier);
        let outcome = self.run(&pending).await;
        self.finish(pending, outcome);
    }

    /// Fetch `identifier` unless it is already the current one.
    pub async fn navigate(&mut self, identifier: &str) {
        let identifier = navigation::work_id(identifier).unwrap_or(identifier);
        if self.identifier.as_deref() == Some(identifier) {
            return;
        }
        self.mount(identifier).await;
    }

    pub async fn refresh(&mut self) {
        if let Some(identifier) = self.identifier.clone() {
            self.mount(&identifier).await;
        }
    }

    pub fn unmount(&mut self) {
        self.identifier = None;
        self.lifecycle.reset();
    }
}
