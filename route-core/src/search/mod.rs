//! Simulated route search.
//!
//! The UI's "search" is a collaborator that produces candidate routes
//! after a delay. This module wraps a [`RouteProvider`] with that
//! latency, makes the wait cancellable, and implements the two policies
//! for UI events that arrive while a search is in flight: cancel the
//! running search, or queue the newest query (last writer wins). The
//! choice of policy belongs to the UI.

mod cancel;
mod mock;

pub use cancel::CancelToken;
pub use mock::MockRouteProvider;

use std::time::Duration;

use tracing::debug;

use crate::domain::{Route, SearchQuery};

/// Error from a simulated search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The in-flight search was cancelled before it produced a result.
    /// Silent: no state was mutated.
    #[error("search cancelled")]
    Cancelled,
}

/// Produces candidate routes for a query.
///
/// This abstraction lets the core run against the mock provider today
/// and a real backend later without changing the planner.
pub trait RouteProvider {
    fn candidates(&self, query: &SearchQuery) -> Vec<Route>;
}

/// Wraps a provider with simulated latency and cancellation.
#[derive(Debug, Clone)]
pub struct SimulatedSearch<P> {
    provider: P,
    latency: Duration,
}

impl<P: RouteProvider> SimulatedSearch<P> {
    pub fn new(provider: P, latency: Duration) -> Self {
        Self { provider, latency }
    }

    /// Produce candidates after the configured delay.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Cancelled` if the token fires first. The
    /// pending result is discarded; nothing is mutated.
    pub async fn search(
        &self,
        query: &SearchQuery,
        token: &CancelToken,
    ) -> Result<Vec<Route>, SearchError> {
        tokio::select! {
            _ = token.cancelled() => {
                debug!(origin = query.origin(), destination = query.destination(),
                       "search cancelled before completion");
                Err(SearchError::Cancelled)
            }
            _ = tokio::time::sleep(self.latency) => {
                Ok(self.provider.candidates(query))
            }
        }
    }
}

/// What to do with a query submitted while a search is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InFlightPolicy {
    /// Cancel the running search; the new query starts immediately.
    CancelPrevious,
    /// Let the running search finish; hold the newest query (replacing
    /// any previously queued one) and start it afterwards.
    QueueLatest,
}

/// Tracks the in-flight search and applies the chosen policy.
///
/// The driver is a synchronous state machine: `submit` and `finish`
/// decide *what* should run; the caller awaits the actual
/// [`SimulatedSearch::search`] future with the token handed back.
#[derive(Debug)]
pub struct SearchDriver {
    policy: InFlightPolicy,
    in_flight: Option<CancelToken>,
    queued: Option<SearchQuery>,
}

impl SearchDriver {
    pub fn new(policy: InFlightPolicy) -> Self {
        Self {
            policy,
            in_flight: None,
            queued: None,
        }
    }

    /// Returns true while a search is running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Submit a query.
    ///
    /// Returns the query to start now together with its cancellation
    /// token, or `None` if the query was queued behind the running
    /// search (QueueLatest only; last writer wins).
    pub fn submit(&mut self, query: SearchQuery) -> Option<(SearchQuery, CancelToken)> {
        match self.policy {
            InFlightPolicy::CancelPrevious => {
                if let Some(token) = self.in_flight.take() {
                    debug!("cancelling in-flight search for newer query");
                    token.cancel();
                }
                Some((query, self.arm()))
            }
            InFlightPolicy::QueueLatest => {
                if self.in_flight.is_some() {
                    debug!("queueing query behind in-flight search");
                    self.queued = Some(query);
                    None
                } else {
                    Some((query, self.arm()))
                }
            }
        }
    }

    /// Mark the in-flight search finished (completed or cancelled).
    ///
    /// Returns the queued query to start next, if one is waiting.
    pub fn finish(&mut self) -> Option<(SearchQuery, CancelToken)> {
        self.in_flight = None;
        let queued = self.queued.take()?;
        Some((queued, self.arm()))
    }

    fn arm(&mut self) -> CancelToken {
        let token = CancelToken::new();
        self.in_flight = Some(token.clone());
        token
    }
}
