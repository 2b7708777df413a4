//! Mock route provider for development and testing.
//!
//! Fabricates one candidate route per mode the query asks for, from
//! fixed per-mode speed/cost/carbon profiles. Deterministic: the same
//! query always yields the same candidates. The mock deliberately does
//! NOT pre-filter by toll preference; filtering is the planning core's
//! job, so a tolled candidate must survive fabrication for the filter
//! to have anything to drop.

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::domain::{
    Coordinates, Location, LocationKind, Route, RouteId, RouteSegment, SearchQuery,
    SegmentDetails, TrafficCondition, TransportMode,
};

use super::RouteProvider;

/// Per-mode fabrication profile.
struct ModeProfile {
    speed_mph: f64,
    /// Fixed cost regardless of distance (fares, boarding)
    base_cost: f64,
    cost_per_mile: f64,
    /// Boarding/security/transfer overhead in minutes
    overhead_mins: f64,
    /// Measured carbon per mile, when the mode reports it
    carbon_per_mile: Option<f64>,
    /// Whether cost scales with the passenger count
    per_passenger: bool,
}

fn profile(mode: TransportMode) -> ModeProfile {
    match mode {
        TransportMode::DriveNoTolls => ModeProfile {
            speed_mph: 52.0,
            base_cost: 0.0,
            cost_per_mile: 0.14,
            overhead_mins: 0.0,
            carbon_per_mile: Some(0.77),
            per_passenger: false,
        },
        TransportMode::DriveWithTolls => ModeProfile {
            speed_mph: 58.0,
            base_cost: 9.5,
            cost_per_mile: 0.13,
            overhead_mins: 0.0,
            carbon_per_mile: Some(0.77),
            per_passenger: false,
        },
        TransportMode::Flight => ModeProfile {
            speed_mph: 460.0,
            base_cost: 120.0,
            cost_per_mile: 0.09,
            overhead_mins: 95.0,
            carbon_per_mile: Some(0.56),
            per_passenger: true,
        },
        TransportMode::Train => ModeProfile {
            speed_mph: 68.0,
            base_cost: 22.0,
            cost_per_mile: 0.11,
            overhead_mins: 20.0,
            carbon_per_mile: None,
            per_passenger: true,
        },
        TransportMode::Metra => ModeProfile {
            speed_mph: 36.0,
            base_cost: 5.5,
            cost_per_mile: 0.0,
            overhead_mins: 12.0,
            carbon_per_mile: None,
            per_passenger: true,
        },
        TransportMode::Metro => ModeProfile {
            speed_mph: 28.0,
            base_cost: 2.5,
            cost_per_mile: 0.0,
            overhead_mins: 8.0,
            carbon_per_mile: None,
            per_passenger: true,
        },
        TransportMode::Cta => ModeProfile {
            speed_mph: 25.0,
            base_cost: 2.5,
            cost_per_mile: 0.0,
            overhead_mins: 8.0,
            carbon_per_mile: None,
            per_passenger: true,
        },
        TransportMode::Bus => ModeProfile {
            speed_mph: 20.0,
            base_cost: 2.25,
            cost_per_mile: 0.02,
            overhead_mins: 10.0,
            carbon_per_mile: None,
            per_passenger: true,
        },
        TransportMode::Walking => ModeProfile {
            speed_mph: 3.1,
            base_cost: 0.0,
            cost_per_mile: 0.0,
            overhead_mins: 0.0,
            carbon_per_mile: Some(0.0),
            per_passenger: false,
        },
        TransportMode::Cycling => ModeProfile {
            speed_mph: 11.0,
            base_cost: 0.0,
            cost_per_mile: 0.0,
            overhead_mins: 5.0,
            carbon_per_mile: Some(0.0),
            per_passenger: false,
        },
    }
}

fn carrier_details(mode: TransportMode, seed: u64) -> Option<SegmentDetails> {
    match mode {
        TransportMode::Flight => Some(SegmentDetails::Flight {
            airline: "United".to_string(),
            flight_number: format!("UA{}", 100 + seed % 900),
        }),
        TransportMode::Train => Some(SegmentDetails::Rail {
            operator: "Amtrak".to_string(),
            service: Some(format!("{}", 300 + seed % 100)),
        }),
        TransportMode::Metra => Some(SegmentDetails::Rail {
            operator: "Metra".to_string(),
            service: Some("UP-NW".to_string()),
        }),
        TransportMode::Cta => Some(SegmentDetails::Transit {
            agency: "CTA".to_string(),
            line: "Blue".to_string(),
        }),
        TransportMode::Metro => Some(SegmentDetails::Transit {
            agency: "Metro".to_string(),
            line: format!("Line {}", 1 + seed % 6),
        }),
        TransportMode::Bus => Some(SegmentDetails::Transit {
            agency: "Greyhound".to_string(),
            line: format!("{}", 10 + seed % 90),
        }),
        _ => None,
    }
}

/// A provider that fabricates candidates instead of calling a backend.
#[derive(Debug, Clone, Default)]
pub struct MockRouteProvider;

impl MockRouteProvider {
    pub fn new() -> Self {
        Self
    }

    /// Stable seed derived from the origin/destination pair.
    fn seed(query: &SearchQuery) -> u64 {
        let mut hasher = DefaultHasher::new();
        query.origin().hash(&mut hasher);
        query.destination().hash(&mut hasher);
        hasher.finish()
    }

    fn endpoint(name: &str, seed: u64, kind: LocationKind) -> Location {
        // Spread fabricated endpoints over plausible coordinates
        let longitude = -125.0 + (seed % 580) as f64 / 10.0;
        let latitude = 25.0 + (seed / 580 % 240) as f64 / 10.0;
        // Safe: the ranges above stay inside valid lon/lat bounds
        let coordinates = Coordinates::new(longitude, latitude).unwrap();
        // Safe: name validated non-empty by SearchQuery
        Location::new(
            &name.to_lowercase().replace(' ', "-"),
            name,
            "",
            coordinates,
            Some(kind),
        )
        .unwrap()
    }

    fn fabricate(query: &SearchQuery, mode: TransportMode, seed: u64) -> Route {
        let profile = profile(mode);

        // Trip length keyed to the endpoint pair, 40..=1000 miles, with
        // short-haul modes compressed so walking 1000 miles doesn't happen
        let base_miles = 40.0 + (seed % 961) as f64;
        let distance_miles = match mode {
            TransportMode::Walking | TransportMode::Cycling => base_miles.min(18.0),
            TransportMode::Cta | TransportMode::Metro | TransportMode::Bus => base_miles.min(35.0),
            TransportMode::Metra => base_miles.min(60.0),
            _ => base_miles,
        };

        let duration_mins = distance_miles / profile.speed_mph * 60.0 + profile.overhead_mins;
        let mut cost = profile.base_cost + profile.cost_per_mile * distance_miles;
        if profile.per_passenger {
            cost *= f64::from(query.passengers());
        }
        let carbon_kg = profile.carbon_per_mile.map(|c| c * distance_miles);

        let kind = match mode {
            TransportMode::Flight => LocationKind::Airport,
            TransportMode::Train | TransportMode::Metra => LocationKind::Station,
            TransportMode::Cta | TransportMode::Metro | TransportMode::Bus => LocationKind::Stop,
            _ => LocationKind::Custom,
        };

        let from = Self::endpoint(query.origin(), seed, kind);
        let to = Self::endpoint(query.destination(), seed.rotate_left(17), kind);

        // Safe: every fabricated value is finite and non-negative
        let segment = RouteSegment::new(
            &format!("{mode}-leg"),
            from,
            to,
            mode,
            duration_mins,
            distance_miles,
            cost,
            carbon_kg,
            carrier_details(mode, seed),
        )
        .unwrap();

        let traffic = if mode.is_drive() {
            match seed % 3 {
                0 => TrafficCondition::Good,
                1 => TrafficCondition::Moderate,
                _ => TrafficCondition::Heavy,
            }
        } else {
            TrafficCondition::Good
        };

        Route::from_segments(RouteId::parse(mode.as_str()).unwrap(), vec![segment], traffic)
            .unwrap()
    }
}

impl RouteProvider for MockRouteProvider {
    /// One candidate per preferred mode, in the mode set's order.
    ///
    /// Toll and mode filtering happen downstream in the planner, so the
    /// fabricated set intentionally covers every requested mode.
    fn candidates(&self, query: &SearchQuery) -> Vec<Route> {
        let seed = Self::seed(query);
        query
            .preferences()
            .preferred_modes
            .iter()
            .map(|&mode| Self::fabricate(query, mode, seed))
            .collect()
    }
}
