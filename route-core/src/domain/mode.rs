//! Transport mode enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// The closed set of transport modes the planner understands.
///
/// Unknown mode strings are rejected at the system boundary; nothing past
/// the boundary ever sees a mode outside this set.
///
/// # Examples
///
/// ```
/// use route_core::domain::TransportMode;
///
/// let mode = TransportMode::parse("drive_no_tolls").unwrap();
/// assert_eq!(mode, TransportMode::DriveNoTolls);
///
/// assert!(TransportMode::parse("hoverboard").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    DriveNoTolls,
    DriveWithTolls,
    Flight,
    Train,
    Metro,
    Bus,
    Cta,
    Metra,
    Walking,
    Cycling,
}

impl TransportMode {
    /// All modes, in declaration order.
    pub const ALL: [TransportMode; 10] = [
        TransportMode::DriveNoTolls,
        TransportMode::DriveWithTolls,
        TransportMode::Flight,
        TransportMode::Train,
        TransportMode::Metro,
        TransportMode::Bus,
        TransportMode::Cta,
        TransportMode::Metra,
        TransportMode::Walking,
        TransportMode::Cycling,
    ];

    /// Parse a wire-format mode string (snake_case).
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "drive_no_tolls" => Ok(TransportMode::DriveNoTolls),
            "drive_with_tolls" => Ok(TransportMode::DriveWithTolls),
            "flight" => Ok(TransportMode::Flight),
            "train" => Ok(TransportMode::Train),
            "metro" => Ok(TransportMode::Metro),
            "bus" => Ok(TransportMode::Bus),
            "cta" => Ok(TransportMode::Cta),
            "metra" => Ok(TransportMode::Metra),
            "walking" => Ok(TransportMode::Walking),
            "cycling" => Ok(TransportMode::Cycling),
            other => Err(DomainError::UnknownMode(other.to_string())),
        }
    }

    /// Returns the wire-format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::DriveNoTolls => "drive_no_tolls",
            TransportMode::DriveWithTolls => "drive_with_tolls",
            TransportMode::Flight => "flight",
            TransportMode::Train => "train",
            TransportMode::Metro => "metro",
            TransportMode::Bus => "bus",
            TransportMode::Cta => "cta",
            TransportMode::Metra => "metra",
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
        }
    }

    /// Environmental rank used when a route carries no measured carbon
    /// footprint. Lower is greener; range is 1..=5.
    pub fn fallback_eco_rank(&self) -> u8 {
        match self {
            TransportMode::Walking | TransportMode::Cycling => 1,
            TransportMode::Cta | TransportMode::Metro | TransportMode::Bus => 1,
            TransportMode::Metra | TransportMode::Train => 2,
            TransportMode::DriveNoTolls => 4,
            TransportMode::DriveWithTolls => 3,
            TransportMode::Flight => 5,
        }
    }

    /// Returns true for the two driving modes.
    pub fn is_drive(&self) -> bool {
        matches!(
            self,
            TransportMode::DriveNoTolls | TransportMode::DriveWithTolls
        )
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
