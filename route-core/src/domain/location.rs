//! Locations and coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A geographic coordinate pair.
///
/// Longitude comes first to match the wire order of the producer's
/// `[lng, lat]` tuples. Both components are validated finite and in range
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    /// Create a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either component is non-finite, or longitude is
    /// outside [-180, 180], or latitude is outside [-90, 90].
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, DomainError> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::CoordinateOutOfRange {
                field: "longitude",
                value: longitude,
            });
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::CoordinateOutOfRange {
                field: "latitude",
                value: latitude,
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }
}

/// What kind of place a location is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Airport,
    Station,
    Stop,
    Custom,
}

/// A named place with a stable id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub kind: Option<LocationKind>,
}

impl Location {
    /// Create a validated location. String fields are trimmed; id and name
    /// must be non-empty after trimming.
    pub fn new(
        id: &str,
        name: &str,
        address: &str,
        coordinates: Coordinates,
        kind: Option<LocationKind>,
    ) -> Result<Self, DomainError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(DomainError::EmptyField("location.id"));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyField("location.name"));
        }
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            address: address.trim().to_string(),
            coordinates,
            kind,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
