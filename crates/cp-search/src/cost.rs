//! Composite edge cost.
//!
//! A route's cost blends physical length against thermal discomfort with
//! fixed weights.  The weights belong to the domain model, not to the
//! search, so they are constants rather than configuration.

use cp_graph::Edge;

/// Weight applied to `distance_km`.
pub const DISTANCE_WEIGHT: f64 = 0.4;

/// Weight applied to `delta_temp`.
pub const THERMAL_WEIGHT: f64 = 0.6;

/// Cost of traversing `edge`: `0.4 * distance + 0.6 * delta_temp`.
#[inline]
pub fn edge_cost(edge: &Edge) -> f64 {
    DISTANCE_WEIGHT * edge.distance_km + THERMAL_WEIGHT * edge.delta_temp
}
