//! Search queries.

use chrono::NaiveDate;
use serde::Serialize;

use super::{DomainError, TripPreferences};

/// A validated route search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    origin: String,
    destination: String,
    departure_date: Option<NaiveDate>,
    passengers: u32,
    preferences: TripPreferences,
}

impl SearchQuery {
    /// Create a validated query. Origin and destination are trimmed and
    /// must be non-empty; at least one passenger is required.
    pub fn new(
        origin: &str,
        destination: &str,
        departure_date: Option<NaiveDate>,
        passengers: u32,
        preferences: TripPreferences,
    ) -> Result<Self, DomainError> {
        let origin = origin.trim();
        if origin.is_empty() {
            return Err(DomainError::EmptyField("query.origin"));
        }
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(DomainError::EmptyField("query.destination"));
        }
        if passengers < 1 {
            return Err(DomainError::TooFewPassengers(passengers));
        }
        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date,
            passengers,
            preferences,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.departure_date
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn preferences(&self) -> &TripPreferences {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_endpoints() {
        let q = SearchQuery::new("  Chicago ", " Denver", None, 1, TripPreferences::default())
            .unwrap();
        assert_eq!(q.origin(), "Chicago");
        assert_eq!(q.destination(), "Denver");
        assert_eq!(q.passengers(), 1);
    }

    #[test]
    fn rejects_blank_origin() {
        assert!(matches!(
            SearchQuery::new("   ", "Denver", None, 1, TripPreferences::default()),
            Err(DomainError::EmptyField("query.origin"))
        ));
        assert!(matches!(
            SearchQuery::new("Chicago", "", None, 1, TripPreferences::default()),
            Err(DomainError::EmptyField("query.destination"))
        ));
    }

    #[test]
    fn rejects_zero_passengers() {
        assert!(matches!(
            SearchQuery::new("Chicago", "Denver", None, 0, TripPreferences::default()),
            Err(DomainError::TooFewPassengers(0))
        ));
    }

    #[test]
    fn carries_departure_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let q = SearchQuery::new("A", "B", Some(date), 2, TripPreferences::default()).unwrap();
        assert_eq!(q.departure_date(), Some(date));
    }
}
