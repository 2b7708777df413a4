//! Route types.
//!
//! A `Route` is one complete candidate itinerary from origin to
//! destination, made of one or more segments. Totals are an invariant:
//! a route whose declared totals disagree with its segment sums cannot
//! be constructed.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::segment::non_negative;
use super::{DomainError, RouteSegment, TransportMode};

/// Tolerance for comparing declared totals against segment sums.
const TOTALS_EPSILON: f64 = 1e-9;

/// A route identifier, trimmed and non-empty.
///
/// Ids are opaque strings chosen by the producer; their `Ord` is the
/// lexicographic order used as the final ranking tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Parse an id, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::EmptyField("route.id"));
        }
        Ok(RouteId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reported traffic on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficCondition {
    Good,
    Moderate,
    Heavy,
}

/// Declared totals for a route, checked against segment sums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteTotals {
    pub duration_mins: f64,
    pub distance_miles: f64,
    pub cost: f64,
    pub carbon_kg: Option<f64>,
}

/// A complete candidate itinerary.
///
/// # Invariants
///
/// - At least one segment
/// - Declared totals equal segment sums to within 1e-9
/// - Total carbon is `Some` iff every segment reports carbon
///
/// Routes are immutable once constructed; the planner only derives
/// ranked views from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    id: RouteId,
    segments: Vec<RouteSegment>,
    totals: RouteTotals,
    traffic: TrafficCondition,
}

impl Route {
    /// Construct a route from segments and declared totals.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the segment list is empty, any declared total is
    /// negative or non-finite, or a declared total differs from the
    /// corresponding segment sum by more than 1e-9.
    pub fn new(
        id: RouteId,
        segments: Vec<RouteSegment>,
        totals: RouteTotals,
        traffic: TrafficCondition,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptySegments);
        }

        non_negative("route.total_duration_mins", totals.duration_mins)?;
        non_negative("route.total_distance_miles", totals.distance_miles)?;
        non_negative("route.total_cost", totals.cost)?;
        if let Some(carbon) = totals.carbon_kg {
            non_negative("route.total_carbon_kg", carbon)?;
        }

        let computed = Self::sum_segments(&segments);
        check_total("duration_mins", totals.duration_mins, computed.duration_mins)?;
        check_total(
            "distance_miles",
            totals.distance_miles,
            computed.distance_miles,
        )?;
        check_total("cost", totals.cost, computed.cost)?;
        match (totals.carbon_kg, computed.carbon_kg) {
            (Some(declared), Some(sum)) => check_total("carbon_kg", declared, sum)?,
            (None, None) => {}
            (declared, sum) => {
                return Err(DomainError::TotalsMismatch {
                    field: "carbon_kg",
                    declared: declared.unwrap_or(f64::NAN),
                    computed: sum.unwrap_or(f64::NAN),
                });
            }
        }

        Ok(Self {
            id,
            segments,
            totals,
            traffic,
        })
    }

    /// Construct a route with totals computed from its segments.
    pub fn from_segments(
        id: RouteId,
        segments: Vec<RouteSegment>,
        traffic: TrafficCondition,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptySegments);
        }
        let totals = Self::sum_segments(&segments);
        Ok(Self {
            id,
            segments,
            totals,
            traffic,
        })
    }

    fn sum_segments(segments: &[RouteSegment]) -> RouteTotals {
        // Carbon is only meaningful when every segment reports it
        let carbon_kg = segments
            .iter()
            .map(|s| s.carbon_kg)
            .sum::<Option<f64>>();
        RouteTotals {
            duration_mins: segments.iter().map(|s| s.duration_mins).sum(),
            distance_miles: segments.iter().map(|s| s.distance_miles).sum(),
            cost: segments.iter().map(|s| s.cost).sum(),
            carbon_kg,
        }
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn totals(&self) -> &RouteTotals {
        &self.totals
    }

    pub fn total_duration_mins(&self) -> f64 {
        self.totals.duration_mins
    }

    pub fn total_distance_miles(&self) -> f64 {
        self.totals.distance_miles
    }

    pub fn total_cost(&self) -> f64 {
        self.totals.cost
    }

    pub fn total_carbon_kg(&self) -> Option<f64> {
        self.totals.carbon_kg
    }

    pub fn traffic(&self) -> TrafficCondition {
        self.traffic
    }

    /// The mode that covers the greatest distance; earliest segment wins
    /// ties. This is the mode the filter matches against preferences.
    pub fn primary_mode(&self) -> TransportMode {
        // Safe: validated non-empty at construction
        let mut best = &self.segments[0];
        for segment in &self.segments[1..] {
            if segment.distance_miles.total_cmp(&best.distance_miles).is_gt() {
                best = segment;
            }
        }
        best.mode
    }

    /// Environmental rating in 1..=5 (1 is greenest), derived from the
    /// primary mode's fallback rank so it is reproducible.
    pub fn eco_rating(&self) -> u8 {
        self.primary_mode().fallback_eco_rank()
    }

    /// Returns true if any segment uses a tolled road.
    pub fn uses_tolls(&self) -> bool {
        self.segments
            .iter()
            .any(|s| s.mode == TransportMode::DriveWithTolls)
    }
}

fn check_total(field: &'static str, declared: f64, computed: f64) -> Result<(), DomainError> {
    if (declared - computed).abs() <= TOTALS_EPSILON {
        Ok(())
    } else {
        Err(DomainError::TotalsMismatch {
            field,
            declared,
            computed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, Location};

    fn loc(id: &str) -> Location {
        Location::new(id, id, "", Coordinates::new(0.0, 0.0).unwrap(), None).unwrap()
    }

    fn seg(
        id: &str,
        mode: TransportMode,
        duration: f64,
        distance: f64,
        cost: f64,
        carbon: Option<f64>,
    ) -> RouteSegment {
        RouteSegment::new(
            id,
            loc("a"),
            loc("b"),
            mode,
            duration,
            distance,
            cost,
            carbon,
            None,
        )
        .unwrap()
    }

    fn rid(s: &str) -> RouteId {
        RouteId::parse(s).unwrap()
    }

    #[test]
    fn route_id_trims_and_rejects_blank() {
        assert_eq!(rid(" r1 ").as_str(), "r1");
        assert!(matches!(
            RouteId::parse("   "),
            Err(DomainError::EmptyField("route.id"))
        ));
    }

    #[test]
    fn totals_must_match_segment_sums() {
        let segments = vec![
            seg("s1", TransportMode::DriveWithTolls, 400.0, 390.0, 60.0, None),
            seg("s2", TransportMode::DriveWithTolls, 419.0, 402.24, 53.07, None),
        ];

        let ok = Route::new(
            rid("1"),
            segments.clone(),
            RouteTotals {
                duration_mins: 819.0,
                distance_miles: 792.24,
                cost: 113.07,
                carbon_kg: None,
            },
            TrafficCondition::Good,
        );
        assert!(ok.is_ok());

        let bad = Route::new(
            rid("1"),
            segments,
            RouteTotals {
                duration_mins: 820.0,
                distance_miles: 792.24,
                cost: 113.07,
                carbon_kg: None,
            },
            TrafficCondition::Good,
        );
        assert!(matches!(
            bad,
            Err(DomainError::TotalsMismatch {
                field: "duration_mins",
                ..
            })
        ));
    }

    #[test]
    fn carbon_total_requires_every_segment() {
        let segments = vec![
            seg("s1", TransportMode::Train, 60.0, 40.0, 10.0, Some(2.0)),
            seg("s2", TransportMode::Train, 30.0, 20.0, 5.0, None),
        ];
        // One segment missing carbon: declared total carbon is a mismatch
        let result = Route::new(
            rid("1"),
            segments,
            RouteTotals {
                duration_mins: 90.0,
                distance_miles: 60.0,
                cost: 15.0,
                carbon_kg: Some(2.0),
            },
            TrafficCondition::Good,
        );
        assert!(matches!(
            result,
            Err(DomainError::TotalsMismatch {
                field: "carbon_kg",
                ..
            })
        ));
    }

    #[test]
    fn from_segments_computes_totals() {
        let route = Route::from_segments(
            rid("r"),
            vec![
                seg("s1", TransportMode::Cta, 25.0, 8.0, 2.5, Some(0.4)),
                seg("s2", TransportMode::Walking, 10.0, 0.5, 0.0, Some(0.0)),
            ],
            TrafficCondition::Good,
        )
        .unwrap();

        assert_eq!(route.total_duration_mins(), 35.0);
        assert_eq!(route.total_distance_miles(), 8.5);
        assert_eq!(route.total_cost(), 2.5);
        assert_eq!(route.total_carbon_kg(), Some(0.4));
    }

    #[test]
    fn empty_segments_rejected() {
        assert!(matches!(
            Route::from_segments(rid("r"), vec![], TrafficCondition::Good),
            Err(DomainError::EmptySegments)
        ));
    }

    #[test]
    fn primary_mode_is_longest_distance_segment() {
        let route = Route::from_segments(
            rid("r"),
            vec![
                seg("s1", TransportMode::Walking, 10.0, 0.5, 0.0, None),
                seg("s2", TransportMode::Metra, 50.0, 30.0, 5.5, None),
                seg("s3", TransportMode::Walking, 5.0, 0.2, 0.0, None),
            ],
            TrafficCondition::Good,
        )
        .unwrap();
        assert_eq!(route.primary_mode(), TransportMode::Metra);
        assert_eq!(route.eco_rating(), 2);
    }

    #[test]
    fn primary_mode_tie_takes_earliest() {
        let route = Route::from_segments(
            rid("r"),
            vec![
                seg("s1", TransportMode::Bus, 20.0, 5.0, 2.0, None),
                seg("s2", TransportMode::Metro, 15.0, 5.0, 2.0, None),
            ],
            TrafficCondition::Good,
        )
        .unwrap();
        assert_eq!(route.primary_mode(), TransportMode::Bus);
    }

    #[test]
    fn uses_tolls() {
        let tolled = Route::from_segments(
            rid("r"),
            vec![
                seg("s1", TransportMode::DriveNoTolls, 30.0, 25.0, 4.0, None),
                seg("s2", TransportMode::DriveWithTolls, 20.0, 22.0, 7.5, None),
            ],
            TrafficCondition::Moderate,
        )
        .unwrap();
        assert!(tolled.uses_tolls());

        let free = Route::from_segments(
            rid("r"),
            vec![seg("s1", TransportMode::DriveNoTolls, 30.0, 25.0, 4.0, None)],
            TrafficCondition::Good,
        )
        .unwrap();
        assert!(!free.uses_tolls());
    }
}
