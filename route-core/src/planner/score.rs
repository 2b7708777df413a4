//! Per-route scoring.
//!
//! Scores are scalar, lower-is-better, and independent of the other
//! candidates. The validated domain guarantees every total is finite and
//! non-negative; `score` still maps anything missing to `+INFINITY` so a
//! malformed metric would sort last rather than panic.

use crate::domain::{Priority, Route};

/// A scoring dimension.
///
/// `FIXED_ORDER` is the tie-break sequence used by the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cost,
    Time,
    Eco,
}

impl Metric {
    /// The fixed tie-break order: cost, then time, then eco.
    pub const FIXED_ORDER: [Metric; 3] = [Metric::Cost, Metric::Time, Metric::Eco];

    /// The metric a priority sorts on first. Comfort has no dedicated
    /// metric and falls back to time.
    pub fn for_priority(priority: Priority) -> Self {
        match priority {
            Priority::Cost => Metric::Cost,
            Priority::Time | Priority::Comfort => Metric::Time,
            Priority::Environment => Metric::Eco,
        }
    }

    /// Score a route on this metric. Lower is better.
    pub fn score(&self, route: &Route) -> f64 {
        let score = match self {
            Metric::Time => route.total_duration_mins(),
            Metric::Cost => route.total_cost(),
            Metric::Eco => route
                .total_carbon_kg()
                .unwrap_or_else(|| f64::from(route.primary_mode().fallback_eco_rank())),
        };
        if score.is_finite() { score } else { f64::INFINITY }
    }
}
