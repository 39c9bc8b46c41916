//! Routing configuration.
//!
//! `RouteConfig::default()` is the classic cool-paths router: raw
//! haversine heuristic, no expansion cap, indexed snapping, vehicle mode.
//! Applications typically load it from a JSON file (feature `serde`) and
//! hand it to the engine builder.

use crate::{CoreError, CoreResult, TravelMode};

/// Which estimate the A* search uses for the remaining cost to the goal.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeuristicKind {
    /// Great-circle distance in km.  Not scaled to the edge-cost blend, so it
    /// can overestimate; routes favour heading straight at the goal.
    #[default]
    Haversine,
    /// Great-circle distance × the distance weight of the cost blend.  Never
    /// overestimates while every `delta_temp` is non-negative, and routes are
    /// then cost-optimal.  Cooler-than-ambient links void that guarantee.
    ScaledHaversine,
    /// No estimate at all (plain Dijkstra).
    Zero,
}

/// How query points are snapped to graph nodes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Snapping {
    /// Scan every node.  O(n) per query.
    Linear,
    /// Query the graph's R-tree.  Same answer as `Linear`.
    #[default]
    Indexed,
}

/// Top-level routing configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Traversal mode the engine starts in.
    pub mode: TravelMode,

    /// Remaining-cost estimate used by the search.
    pub heuristic: HeuristicKind,

    /// Snapping strategy for query points.
    pub snapping: Snapping,

    /// Give up after this many node expansions.  `None` means unbounded.
    /// Meant for untrusted or pathological graphs.
    pub max_expansions: Option<usize>,
}

impl RouteConfig {
    /// Reject settings that can never produce a route.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_expansions == Some(0) {
            return Err(CoreError::Config(
                "max_expansions must be at least 1 (use null for unbounded)".into(),
            ));
        }
        Ok(())
    }
}
