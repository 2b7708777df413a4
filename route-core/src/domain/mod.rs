//! Domain types for the route planner.
//!
//! This module contains the core domain model types that represent
//! validated trip data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod location;
mod mode;
mod preferences;
mod query;
mod route;
mod segment;

pub use error::DomainError;
pub use location::{Coordinates, Location, LocationKind};
pub use mode::TransportMode;
pub use preferences::{Budget, Priority, TripPreferences};
pub use query::SearchQuery;
pub use route::{Route, RouteId, RouteTotals, TrafficCondition};
pub use segment::{RouteSegment, SegmentDetails};
