//! Traversal mode shared by the graph and engine crates.
//!
//! The mode decides which edge set a search runs against: the canonical
//! directed graph, or the canonical graph augmented with a reverse twin for
//! every arc.

/// How the road network may be traversed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// Edges may only be followed in their stored direction (one-way streets
    /// are honoured).
    #[default]
    Vehicle,
    /// Every edge may also be walked backwards at the same cost.
    Pedestrian,
}

impl TravelMode {
    /// `true` if the mode ignores edge direction.
    #[inline]
    pub fn is_undirected(self) -> bool {
        matches!(self, TravelMode::Pedestrian)
    }

    /// The other mode.
    #[inline]
    pub fn toggled(self) -> TravelMode {
        match self {
            TravelMode::Vehicle    => TravelMode::Pedestrian,
            TravelMode::Pedestrian => TravelMode::Vehicle,
        }
    }

    /// Lowercase label, as accepted by [`str::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Vehicle    => "vehicle",
            TravelMode::Pedestrian => "pedestrian",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vehicle" | "car" | "directed" => Ok(TravelMode::Vehicle),
            "pedestrian" | "walk" | "foot" => Ok(TravelMode::Pedestrian),
            _ => Err(crate::CoreError::InvalidMode(s.to_owned())),
        }
    }
}
