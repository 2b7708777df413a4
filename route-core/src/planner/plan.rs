//! The planning facade.
//!
//! Single entry point composing filter, rank, and badge assignment.
//! Pure and deterministic: identical inputs produce byte-identical
//! serialized output.

use crate::domain::{Route, SearchQuery};

use super::badge::assign_badges;
use super::filter::filter_candidates;
use super::rank::{RankedRoute, rank_routes};

/// Produce the ordered, badge-annotated route list for a query.
pub fn plan(query: &SearchQuery, candidates: &[Route]) -> Vec<RankedRoute> {
    let prefs = query.preferences();
    let filtered = filter_candidates(candidates.to_vec(), prefs);
    let mut ranked = rank_routes(filtered, prefs.priority);
    assign_badges(&mut ranked);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Coordinates, Location, Priority, Route, RouteId, RouteSegment, TrafficCondition,
        TransportMode, TripPreferences,
    };
    use crate::planner::Badge;

    fn loc(id: &str) -> Location {
        Location::new(id, id, "", Coordinates::new(0.0, 0.0).unwrap(), None).unwrap()
    }

    fn route(id: &str, mode: TransportMode, duration: f64, cost: f64) -> Route {
        let seg = RouteSegment::new(
            "s1",
            loc("a"),
            loc("b"),
            mode,
            duration,
            duration,
            cost,
            None,
            None,
        )
        .unwrap();
        Route::from_segments(RouteId::parse(id).unwrap(), vec![seg], TrafficCondition::Good)
            .unwrap()
    }

    fn query(modes: &[TransportMode], priority: Priority) -> SearchQuery {
        let prefs = TripPreferences::default()
            .with_modes(modes.iter().copied())
            .with_priority(priority);
        SearchQuery::new("Chicago", "Denver", None, 1, prefs).unwrap()
    }

    fn drive_candidates() -> Vec<Route> {
        vec![
            route("no_tolls", TransportMode::DriveNoTolls, 904.8, 116.96),
            route("with_tolls", TransportMode::DriveWithTolls, 819.0, 113.07),
        ]
    }

    #[test]
    fn drive_scenario_cost_priority() {
        let q = query(
            &[TransportMode::DriveNoTolls, TransportMode::DriveWithTolls],
            Priority::Cost,
        );
        let ranked = plan(&q, &drive_candidates());

        let ids: Vec<_> = ranked.iter().map(|r| r.route.id().as_str()).collect();
        assert_eq!(ids, ["with_tolls", "no_tolls"]);
        assert!(ranked[0].badges.contains(&Badge::Cheapest));
        assert!(ranked[0].badges.contains(&Badge::Fastest));
        assert!(ranked[1].badges.contains(&Badge::BudgetFriendly));
    }

    #[test]
    fn drive_scenario_time_priority() {
        let q = query(
            &[TransportMode::DriveNoTolls, TransportMode::DriveWithTolls],
            Priority::Time,
        );
        let ranked = plan(&q, &drive_candidates());

        let ids: Vec<_> = ranked.iter().map(|r| r.route.id().as_str()).collect();
        assert_eq!(ids, ["with_tolls", "no_tolls"]);
        assert!(ranked[0].badges.contains(&Badge::Fastest));
    }

    #[test]
    fn environment_scenario() {
        let q = query(&[TransportMode::Flight, TransportMode::Cta], Priority::Environment);
        let candidates = vec![
            route("flight", TransportMode::Flight, 165.0, 180.0),
            route("cta", TransportMode::Cta, 55.0, 2.5),
        ];
        let ranked = plan(&q, &candidates);

        let ids: Vec<_> = ranked.iter().map(|r| r.route.id().as_str()).collect();
        assert_eq!(ids, ["cta", "flight"]);

        let cta = &ranked[0].badges;
        assert!(cta.contains(&Badge::Cheapest));
        assert!(cta.contains(&Badge::Fastest));
        assert!(cta.contains(&Badge::Eco));

        assert!(ranked[1].badges.is_empty());
    }

    #[test]
    fn empty_mode_set_plans_nothing() {
        let q = query(&[], Priority::Time);
        assert!(plan(&q, &drive_candidates()).is_empty());
    }

    #[test]
    fn modes_outside_selection_are_dropped() {
        let q = query(&[TransportMode::Cta], Priority::Time);
        let candidates = vec![
            route("flight", TransportMode::Flight, 165.0, 180.0),
            route("cta", TransportMode::Cta, 55.0, 2.5),
        ];
        let ranked = plan(&q, &candidates);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].route.id().as_str(), "cta");
    }

    #[test]
    fn deterministic_byte_for_byte() {
        let q = query(
            &[TransportMode::DriveNoTolls, TransportMode::DriveWithTolls],
            Priority::Cost,
        );
        let candidates = drive_candidates();

        let a = serde_json::to_vec(&plan(&q, &candidates)).unwrap();
        let b = serde_json::to_vec(&plan(&q, &candidates)).unwrap();
        assert_eq!(a, b);
    }
}
