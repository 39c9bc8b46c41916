//! Remaining-cost estimates for A*.
//!
//! [`Haversine`] is the default estimate: raw great-circle kilometres.
//! Edge costs only charge `DISTANCE_WEIGHT` per kilometre, so it can
//! overestimate and the search is then not guaranteed to return the
//! cheapest route.  [`ScaledHaversine`] multiplies by that weight and never
//! overestimates as long as no link carries a negative `delta_temp`; a
//! cooler-than-ambient link can make any non-zero estimate too high.  Both
//! are kept because switching changes which routes users see.

use cp_core::{GeoPoint, HeuristicKind};

use crate::DISTANCE_WEIGHT;

/// Estimate of the cost still to pay from `from` to `to`.
///
/// Implementations must be `Send + Sync` so a router can be shared across
/// threads.
pub trait Heuristic: Send + Sync {
    fn estimate(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Great-circle distance in kilometres (Earth radius 6371 km).
#[derive(Copy, Clone, Debug, Default)]
pub struct Haversine;

impl Heuristic for Haversine {
    #[inline]
    fn estimate(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        from.distance_km(to)
    }
}

/// Great-circle distance scaled to the cost blend.  Admissible.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScaledHaversine;

impl Heuristic for ScaledHaversine {
    #[inline]
    fn estimate(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        DISTANCE_WEIGHT * from.distance_km(to)
    }
}

/// Always zero: turns A* into Dijkstra.
#[derive(Copy, Clone, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: GeoPoint, _to: GeoPoint) -> f64 {
        0.0
    }
}

/// Configuration-driven dispatch.
impl Heuristic for HeuristicKind {
    #[inline]
    fn estimate(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        match self {
            HeuristicKind::Haversine       => Haversine.estimate(from, to),
            HeuristicKind::ScaledHaversine => ScaledHaversine.estimate(from, to),
            HeuristicKind::Zero            => Zero.estimate(from, to),
        }
    }
}
