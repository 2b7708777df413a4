//! Route ranking.
//!
//! Orders filtered candidates by the user's priority metric. The
//! comparator is a total order, so ranking the same multiset in any input
//! order yields the identical output.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{Priority, Route};

use super::badge::Badge;
use super::score::Metric;

/// A route with its position and badges in a ranked result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRoute {
    pub route: Route,
    /// 1-indexed position in the ranked list
    pub rank: usize,
    pub badges: BTreeSet<Badge>,
}

/// Rank routes by preference.
///
/// Routes are ordered by:
/// 1. The priority's metric (comfort falls back to time)
/// 2. The remaining metrics, in the fixed order cost, time, eco
/// 3. Route id, lexicographically
///
/// Returns routes best-first with 1-indexed ranks and empty badge sets;
/// badge assignment runs afterwards.
pub fn rank_routes(mut routes: Vec<Route>, priority: Priority) -> Vec<RankedRoute> {
    routes.sort_by(|a, b| compare(a, b, priority));

    routes
        .into_iter()
        .enumerate()
        .map(|(idx, route)| RankedRoute {
            route,
            rank: idx + 1,
            badges: BTreeSet::new(),
        })
        .collect()
}

/// Total-order comparator over routes for a given priority.
fn compare(a: &Route, b: &Route, priority: Priority) -> Ordering {
    let primary = Metric::for_priority(priority);

    let cmp = primary.score(a).total_cmp(&primary.score(b));
    if cmp != Ordering::Equal {
        return cmp;
    }

    for metric in Metric::FIXED_ORDER {
        if metric == primary {
            continue;
        }
        let cmp = metric.score(a).total_cmp(&metric.score(b));
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    // Routes equal on every metric: ids decide
    a.id().cmp(b.id())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{
        Coordinates, Location, RouteId, RouteSegment, TrafficCondition, TransportMode,
    };
    use proptest::prelude::*;

    fn loc(id: &str) -> Location {
        Location::new(id, id, "", Coordinates::new(0.0, 0.0).unwrap(), None).unwrap()
    }

    fn route_strategy() -> impl Strategy<Value = Route> {
        (
            0u32..50,
            // Coarse grids so ties actually happen
            0u8..4,
            0u8..4,
            prop::option::of(0u8..3),
        )
            .prop_map(|(id, dur_slot, cost_slot, carbon_slot)| {
                // Mode is a function of the id so routes that tie on every
                // metric and share an id are structurally identical
                let mode = TransportMode::ALL[(id as usize) % TransportMode::ALL.len()];
                let seg = RouteSegment::new(
                    "s1",
                    loc("a"),
                    loc("b"),
                    mode,
                    f64::from(dur_slot) * 30.0 + 10.0,
                    100.0,
                    f64::from(cost_slot) * 25.0,
                    carbon_slot.map(|c| f64::from(c) * 40.0),
                    None,
                )
                .unwrap();
                Route::from_segments(
                    RouteId::parse(&format!("r{id}")).unwrap(),
                    vec![seg],
                    TrafficCondition::Good,
                )
                .unwrap()
            })
    }

    fn priority_strategy() -> impl Strategy<Value = Priority> {
        prop::sample::select(
            [
                Priority::Time,
                Priority::Cost,
                Priority::Comfort,
                Priority::Environment,
            ]
            .as_slice(),
        )
    }

    proptest! {
        /// Ranking totality: any permutation of the input ranks to the
        /// identical output order.
        #[test]
        fn permutation_invariant(
            routes in prop::collection::vec(route_strategy(), 0..10),
            priority in priority_strategy(),
        ) {
            let forward = rank_routes(routes.clone(), priority);

            let mut reversed = routes;
            reversed.reverse();
            let backward = rank_routes(reversed, priority);

            prop_assert_eq!(forward, backward);
        }

        /// Ranks are 1-indexed, dense, and every input element survives.
        #[test]
        fn ranks_are_dense(
            routes in prop::collection::vec(route_strategy(), 0..10),
            priority in priority_strategy(),
        ) {
            let len = routes.len();
            let ranked = rank_routes(routes, priority);
            prop_assert_eq!(ranked.len(), len);
            for (idx, r) in ranked.iter().enumerate() {
                prop_assert_eq!(r.rank, idx + 1);
            }
        }
    }
}
