//! Route planning core.
//!
//! The ranking and selection engine behind a multi-mode trip planner:
//! given candidate itineraries and the user's preferences, produce a
//! deterministic, badge-annotated ordering and keep the selection
//! coherent as modes and priorities change. Rendering, map tiles, and
//! authentication live in the UI collaborator; this crate never fetches
//! or draws.

pub mod domain;
pub mod ingress;
pub mod planner;
pub mod search;
pub mod state;
