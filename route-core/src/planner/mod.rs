//! The pure planning core.
//!
//! Candidates flow Filter -> Rank -> Badge; every stage is a pure
//! function over validated domain types and none of them can fail.
//! `plan` is the facade the UI (or the selection state machine) calls.

mod badge;
mod filter;
mod plan;
mod rank;
mod score;

pub use badge::{Badge, assign_badges};
pub use filter::filter_candidates;
pub use plan::plan;
pub use rank::{RankedRoute, rank_routes};
pub use score::Metric;
