use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{error::FetchError, traits::ResultSet};

/// What a view currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    /// The request went through but there was nothing to show.
    Empty,
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Which completion is allowed to write view state when fetches overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RacePolicy {
    /// Only the most recently issued fetch may set state; older completions
    /// are dropped.
    #[default]
    LastIssued,
    /// Every completion is applied, so whichever response arrives last wins.
    LastResolved,
}

/// Handed out when a fetch starts and given back when it completes.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// The Idle -> Loading -> Success/Empty/Error state machine of one view.
#[derive(Debug)]
pub struct Lifecycle<T> {
    state:         ViewState<T>,
    issued:        u64,
    /// Tickets up to this one were issued before the last reset.
    cancelled:     u64,
    policy:        RacePolicy,
    error_message: &'static str,
}

impl<T: ResultSet> Lifecycle<T> {
    pub fn new(policy: RacePolicy, error_message: &'static str) -> Self {
        Self {
            state: ViewState::Idle,
            issued: 0,
            cancelled: 0,
            policy,
            error_message,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Enter `Loading`, dropping whatever was shown before.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.state = ViewState::Loading;
        Ticket(self.issued)
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` if the outcome was discarded, either because the view
    /// was reset after the fetch began or because a newer fetch has been
    /// issued since.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T, FetchError>) -> bool {
        if ticket.0 <= self.cancelled {
            debug!(ticket = ticket.0, "Discarding fetch result from before reset");
            return false;
        }
        if self.policy == RacePolicy::LastIssued && ticket.0 != self.issued {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "Discarding stale fetch result"
            );
            return false;
        }
        self.state = match outcome {
            Ok(data) if data.is_empty_result() => ViewState::Empty,
            Ok(data) => ViewState::Success(data),
            Err(e) => {
                warn!(error = %e, "Fetch failed");
                ViewState::Error(self.error_message.to_string())
            }
        };
        true
    }

    /// Back to `Idle`. Fetches already in flight can no longer set state.
    pub fn reset(&mut self) {
        self.state = ViewState::Idle;
        self.cancelled = self.issued;
    }
}
