//! Ingress boundary.
//!
//! Raw wire records (from the UI today, a real backend later) are
//! deserialized into loose serde structs and then converted into
//! validated domain types. Nothing invalid crosses this boundary into
//! the planner; failures come back as typed errors instead of
//! interrupting control flow.
//!
//! The wire shape mirrors the producer's camelCase records: coordinates
//! as `[lng, lat]` pairs, a flat optional `details` object on segments,
//! and declared route totals that must match the segment sums.

use serde::Deserialize;

use crate::domain::{
    Coordinates, DomainError, Location, LocationKind, Route, RouteId, RouteSegment, SearchQuery,
    SegmentDetails, TrafficCondition, TransportMode, TripPreferences,
};
use crate::domain::{Budget, Priority, RouteTotals};

/// Error from parsing or validating ingress records.
#[derive(Debug, thiserror::Error)]
pub enum IngressError {
    /// The payload was not well-formed JSON for the expected shape
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),

    /// The record parsed but failed domain validation
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLocation {
    id: String,
    name: String,
    #[serde(default)]
    address: String,
    /// Wire order is [lng, lat]
    coordinates: [f64; 2],
    #[serde(rename = "type")]
    kind: Option<LocationKind>,
}

impl RawLocation {
    fn into_domain(self) -> Result<Location, DomainError> {
        let coordinates = Coordinates::new(self.coordinates[0], self.coordinates[1])?;
        Location::new(&self.id, &self.name, &self.address, coordinates, self.kind)
    }
}

/// The producer's flat segment metadata object.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDetails {
    carrier: Option<String>,
    airline: Option<String>,
    flight_number: Option<String>,
    train_number: Option<String>,
    agency: Option<String>,
    line: Option<String>,
}

impl RawDetails {
    /// Pick the fields that make sense for `mode`; everything else is
    /// dropped rather than mis-attached.
    fn into_domain(self, mode: TransportMode) -> Option<SegmentDetails> {
        match mode {
            TransportMode::Flight => {
                let airline = self.airline.or(self.carrier)?;
                let flight_number = self.flight_number?;
                Some(SegmentDetails::Flight {
                    airline,
                    flight_number,
                })
            }
            TransportMode::Train | TransportMode::Metra => {
                let operator = self.carrier?;
                Some(SegmentDetails::Rail {
                    operator,
                    service: self.train_number,
                })
            }
            TransportMode::Cta | TransportMode::Metro | TransportMode::Bus => {
                let agency = self.agency.or(self.carrier)?;
                let line = self.line?;
                Some(SegmentDetails::Transit { agency, line })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSegment {
    id: String,
    from: RawLocation,
    to: RawLocation,
    mode: String,
    duration: f64,
    distance: f64,
    cost: f64,
    carbon_footprint: Option<f64>,
    details: Option<RawDetails>,
}

impl RawSegment {
    fn into_domain(self) -> Result<RouteSegment, DomainError> {
        let mode = TransportMode::parse(&self.mode)?;
        let details = self.details.and_then(|d| d.into_domain(mode));
        RouteSegment::new(
            &self.id,
            self.from.into_domain()?,
            self.to.into_domain()?,
            mode,
            self.duration,
            self.distance,
            self.cost,
            self.carbon_footprint,
            details,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoute {
    id: String,
    segments: Vec<RawSegment>,
    total_duration: f64,
    total_distance: f64,
    total_cost: f64,
    total_carbon_footprint: Option<f64>,
    traffic_condition: Option<TrafficCondition>,
}

impl RawRoute {
    fn into_domain(self) -> Result<Route, DomainError> {
        let id = RouteId::parse(&self.id)?;
        let segments = self
            .segments
            .into_iter()
            .map(RawSegment::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        let totals = RouteTotals {
            duration_mins: self.total_duration,
            distance_miles: self.total_distance,
            cost: self.total_cost,
            carbon_kg: self.total_carbon_footprint,
        };
        Route::new(
            id,
            segments,
            totals,
            self.traffic_condition.unwrap_or(TrafficCondition::Good),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPreferences {
    budget: Budget,
    priority: Priority,
    max_breaks: u32,
    preferred_modes: Vec<String>,
    #[serde(default)]
    avoid_tolls: bool,
    #[serde(default)]
    accessibility_needs: bool,
}

impl RawPreferences {
    fn into_domain(self) -> Result<TripPreferences, DomainError> {
        let preferred_modes = self
            .preferred_modes
            .iter()
            .map(|m| TransportMode::parse(m))
            .collect::<Result<_, _>>()?;
        Ok(TripPreferences {
            budget: self.budget,
            priority: self.priority,
            max_breaks: self.max_breaks,
            preferred_modes,
            avoid_tolls: self.avoid_tolls,
            accessibility_needs: self.accessibility_needs,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuery {
    from: String,
    to: String,
    departure_date: Option<chrono::NaiveDate>,
    passengers: u32,
    preferences: RawPreferences,
}

/// Parse and validate a search query record.
pub fn parse_query(json: &str) -> Result<SearchQuery, IngressError> {
    let raw: RawQuery = serde_json::from_str(json)?;
    let preferences = raw.preferences.into_domain()?;
    Ok(SearchQuery::new(
        &raw.from,
        &raw.to,
        raw.departure_date,
        raw.passengers,
        preferences,
    )?)
}

/// Parse and validate a batch of candidate route records.
///
/// The batch is all-or-nothing: one invalid record rejects the payload,
/// so nothing malformed can reach the ranked output.
pub fn parse_routes(json: &str) -> Result<Vec<Route>, IngressError> {
    let raw: Vec<RawRoute> = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|r| r.into_domain().map_err(IngressError::from))
        .collect()
}
