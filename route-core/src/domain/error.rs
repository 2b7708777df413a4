//! Domain error types.
//!
//! These errors represent validation failures at the boundary where raw
//! records become domain values. Pure planner stages never produce them.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A required string field was empty after trimming
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// A numeric field was negative, NaN, or infinite
    #[error("field `{field}` must be finite and non-negative, got {value}")]
    InvalidNumber { field: &'static str, value: f64 },

    /// A transport mode string was not one of the closed set
    #[error("unknown transport mode: {0:?}")]
    UnknownMode(String),

    /// A coordinate was outside the valid longitude/latitude range
    #[error("coordinate out of range: {field} = {value}")]
    CoordinateOutOfRange { field: &'static str, value: f64 },

    /// Route declared totals that disagree with its segment sums
    #[error("route total `{field}` is {declared} but segments sum to {computed}")]
    TotalsMismatch {
        field: &'static str,
        declared: f64,
        computed: f64,
    },

    /// Route has no segments
    #[error("route must have at least one segment")]
    EmptySegments,

    /// Segment carrier details don't fit the segment's mode
    #[error("details variant does not match mode {mode}")]
    DetailsMismatch { mode: &'static str },

    /// Query asked for fewer than one passenger
    #[error("passengers must be at least 1, got {0}")]
    TooFewPassengers(u32),
}
