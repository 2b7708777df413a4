//! Selection state machine.
//!
//! Holds the current ranked set and at most one selected route id, and
//! emits an immutable snapshot with a monotonically increasing revision
//! on every state change. The UI subscribes to snapshots; nothing here
//! renders or fetches.
//!
//! # Invariants
//!
//! - A non-null selection always resolves to a route in the current
//!   ranked set.
//! - Replacing the ranked set never silently re-selects a different
//!   route; a selection that no longer resolves becomes null, observably.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Route, RouteId, SearchQuery};
use crate::planner::{RankedRoute, plan};

/// A `SELECT_ROUTE` event referenced an id absent from the ranked set.
///
/// Surfaced as a warning; the state is untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("route {id} is not in the current ranked set")]
pub struct SelectionMiss {
    pub id: RouteId,
}

/// An immutable view of ranked routes, selection, and revision.
///
/// Snapshots share the ranked list, so cloning one is cheap and two
/// snapshots with the same revision are interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub routes: Arc<Vec<RankedRoute>>,
    pub selected: Option<RouteId>,
    pub revision: u64,
}

impl Snapshot {
    /// Resolve the selected route, if any.
    pub fn selected_route(&self) -> Option<&RankedRoute> {
        let id = self.selected.as_ref()?;
        self.routes.iter().find(|r| r.route.id() == id)
    }
}

/// The planner's state machine.
///
/// Single-threaded by design: every operation is synchronous and the
/// caller owns the ordering of events.
#[derive(Debug)]
pub struct PlannerState {
    routes: Arc<Vec<RankedRoute>>,
    selected: Option<RouteId>,
    revision: u64,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerState {
    /// Empty state at revision 0.
    pub fn new() -> Self {
        Self {
            routes: Arc::new(Vec::new()),
            selected: None,
            revision: 0,
        }
    }

    /// The current snapshot, without changing state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            routes: Arc::clone(&self.routes),
            selected: self.selected.clone(),
            revision: self.revision,
        }
    }

    /// Replace the ranked set.
    ///
    /// A selection whose id survives into the new set is preserved;
    /// otherwise it is cleared (never re-pointed at a different route).
    pub fn set_routes(&mut self, routes: Vec<RankedRoute>) -> Snapshot {
        if let Some(id) = &self.selected {
            if !routes.iter().any(|r| r.route.id() == id) {
                debug!(%id, "selected route left the ranked set, clearing selection");
                self.selected = None;
            }
        }
        self.routes = Arc::new(routes);
        self.bump()
    }

    /// Set or clear the selection.
    ///
    /// # Errors
    ///
    /// Returns `SelectionMiss` (and leaves the state untouched) if `id`
    /// names a route absent from the current ranked set.
    pub fn select_route(&mut self, id: Option<RouteId>) -> Result<Snapshot, SelectionMiss> {
        if let Some(id) = &id {
            if !self.routes.iter().any(|r| r.route.id() == id) {
                warn!(%id, "selection references a route outside the ranked set");
                return Err(SelectionMiss { id: id.clone() });
            }
        }
        self.selected = id;
        Ok(self.bump())
    }

    /// Empty the ranked set and clear the selection.
    pub fn clear_routes(&mut self) -> Snapshot {
        self.routes = Arc::new(Vec::new());
        self.selected = None;
        self.bump()
    }

    /// Run the planning facade for `query` over `candidates` and apply
    /// the result as the new ranked set.
    pub fn plan(&mut self, query: &SearchQuery, candidates: &[Route]) -> Snapshot {
        let ranked = plan(query, candidates);
        self.set_routes(ranked)
    }

    fn bump(&mut self) -> Snapshot {
        self.revision += 1;
        self.snapshot()
    }
}
