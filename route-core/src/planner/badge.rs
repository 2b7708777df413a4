//! Badge assignment across a ranked set.
//!
//! Runs after ranking. Category winners (fastest / cheapest / eco) each
//! go to exactly one route; budget-friendly marks every route close
//! enough to the cheapest and fastest.

use std::fmt;

use serde::Serialize;

use super::rank::RankedRoute;
use super::score::Metric;

/// Cost within 5% of the cheapest qualifies for budget-friendly...
const BUDGET_COST_FACTOR: f64 = 1.05;
/// ...provided duration is within 25% of the fastest.
const BUDGET_TIME_FACTOR: f64 = 1.25;

/// A label attached to a ranked route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Fastest,
    Cheapest,
    Eco,
    BudgetFriendly,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Badge::Fastest => "fastest",
            Badge::Cheapest => "cheapest",
            Badge::Eco => "eco",
            Badge::BudgetFriendly => "budget-friendly",
        };
        f.write_str(s)
    }
}

/// Assign badges across a ranked set.
///
/// - `Fastest` / `Cheapest` / `Eco` go to the single route with the
///   minimum score on that metric; ties break towards the better rank.
/// - `BudgetFriendly` goes to every route whose cost is within 5% of the
///   cheapest and whose duration is within 25% of the fastest.
///
/// Empty input assigns nothing. A route may carry several badges.
pub fn assign_badges(ranked: &mut [RankedRoute]) {
    let Some(cheapest_idx) = winner(ranked, Metric::Cost) else {
        return;
    };
    // Non-empty here, so the other winners exist too
    let fastest_idx = winner(ranked, Metric::Time).unwrap();
    let eco_idx = winner(ranked, Metric::Eco).unwrap();

    let cost_ceiling = Metric::Cost.score(&ranked[cheapest_idx].route) * BUDGET_COST_FACTOR;
    let time_ceiling = Metric::Time.score(&ranked[fastest_idx].route) * BUDGET_TIME_FACTOR;

    ranked[fastest_idx].badges.insert(Badge::Fastest);
    ranked[cheapest_idx].badges.insert(Badge::Cheapest);
    ranked[eco_idx].badges.insert(Badge::Eco);

    for entry in ranked.iter_mut() {
        let cost = Metric::Cost.score(&entry.route);
        let time = Metric::Time.score(&entry.route);
        if cost <= cost_ceiling && time <= time_ceiling {
            entry.badges.insert(Badge::BudgetFriendly);
        }
    }
}

/// Index of the route with the minimum score on `metric`. A strict
/// comparison keeps the first (best-ranked) of any tied group.
fn winner(ranked: &[RankedRoute], metric: Metric) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, entry) in ranked.iter().enumerate() {
        let score = metric.score(&entry.route);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
