//! Route segments and carrier metadata.

use serde::Serialize;

use super::{DomainError, Location, TransportMode};

/// Validate that a numeric field is finite and non-negative.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidNumber { field, value })
    }
}

/// Mode-specific carrier metadata.
///
/// The producer's flat `details` object (airline, agency, line, ...) is
/// re-expressed as a discriminated variant so that, say, a flight number
/// can never appear on a bus segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentDetails {
    /// Scheduled flight
    Flight {
        airline: String,
        flight_number: String,
    },
    /// National or commuter rail (train, metra)
    Rail {
        operator: String,
        service: Option<String>,
    },
    /// Urban transit (cta, metro, bus)
    Transit { agency: String, line: String },
}

impl SegmentDetails {
    /// Returns true if this variant is permitted for `mode`.
    ///
    /// Drive, walking, and cycling segments carry no carrier metadata.
    pub fn matches_mode(&self, mode: TransportMode) -> bool {
        match self {
            SegmentDetails::Flight { .. } => mode == TransportMode::Flight,
            SegmentDetails::Rail { .. } => {
                matches!(mode, TransportMode::Train | TransportMode::Metra)
            }
            SegmentDetails::Transit { .. } => {
                matches!(
                    mode,
                    TransportMode::Cta | TransportMode::Metro | TransportMode::Bus
                )
            }
        }
    }
}

/// One leg of a route: a single mode between two locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub id: String,
    pub from: Location,
    pub to: Location,
    pub mode: TransportMode,
    /// Duration in minutes
    pub duration_mins: f64,
    /// Distance in miles
    pub distance_miles: f64,
    /// Cost in currency units
    pub cost: f64,
    /// Measured carbon footprint, if known
    pub carbon_kg: Option<f64>,
    /// Carrier metadata, if the mode has a carrier
    pub details: Option<SegmentDetails>,
}

impl RouteSegment {
    /// Create a validated segment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the id is blank, any numeric field is negative or
    /// non-finite, or `details` doesn't fit `mode`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        from: Location,
        to: Location,
        mode: TransportMode,
        duration_mins: f64,
        distance_miles: f64,
        cost: f64,
        carbon_kg: Option<f64>,
        details: Option<SegmentDetails>,
    ) -> Result<Self, DomainError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(DomainError::EmptyField("segment.id"));
        }
        let duration_mins = non_negative("segment.duration_mins", duration_mins)?;
        let distance_miles = non_negative("segment.distance_miles", distance_miles)?;
        let cost = non_negative("segment.cost", cost)?;
        let carbon_kg = carbon_kg
            .map(|c| non_negative("segment.carbon_kg", c))
            .transpose()?;

        if let Some(details) = &details {
            if !details.matches_mode(mode) {
                return Err(DomainError::DetailsMismatch {
                    mode: mode.as_str(),
                });
            }
        }

        Ok(Self {
            id: id.to_string(),
            from,
            to,
            mode,
            duration_mins,
            distance_miles,
            cost,
            carbon_kg,
            details,
        })
    }
}
