//! Candidate filtering.
//!
//! Restricts candidates to the user's selected modes and toll preference.
//! Pure: never fails, never reorders survivors.

use std::collections::HashSet;

use crate::domain::{Route, TripPreferences};

/// Filter candidates by the user's preferences.
///
/// - A route survives only if its primary mode is one of
///   `preferred_modes`; an empty mode set matches nothing.
/// - With `avoid_tolls`, routes containing any tolled-driving segment are
///   dropped.
/// - Duplicate ids in the input collapse to the last occurrence, which
///   survives at its own position.
///
/// Input order is preserved.
pub fn filter_candidates(candidates: Vec<Route>, prefs: &TripPreferences) -> Vec<Route> {
    // Empty mode set means "match nothing", not "match all"
    if prefs.preferred_modes.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut keep_last = vec![false; candidates.len()];
    for (idx, route) in candidates.iter().enumerate().rev() {
        if seen.insert(route.id().clone()) {
            keep_last[idx] = true;
        }
    }

    // TODO: when producers start supplying accessibility metadata on
    // segments, exclude routes without it under `accessibility_needs`.
    // Until then accessibility is a pass-through.
    candidates
        .into_iter()
        .zip(keep_last)
        .filter(|(route, is_last)| {
            *is_last
                && prefs.preferred_modes.contains(&route.primary_mode())
                && !(prefs.avoid_tolls && route.uses_tolls())
        })
        .map(|(route, _)| route)
        .collect()
}
