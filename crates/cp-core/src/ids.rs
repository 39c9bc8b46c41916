//! Strongly typed identifier wrappers.
//!
//! Two kinds of identifier exist:
//!
//! - [`NodeId`] is the **stable** identifier a node carries in the input
//!   dataset.  It is sparse (OSM ids run into the billions) and is what
//!   callers see in routes.
//! - [`NodeIdx`] / [`EdgeIdx`] are **dense** positions into a graph's
//!   node/edge arrays, assigned in dataset order at load time.  They are only
//!   meaningful for the graph that issued them.

use std::fmt;

/// Declare a `u32` position into one of a graph's arrays.  `$tag` prefixes
/// the `Display` form (`n#3`, `e#17`) so log lines can tell the two apart.
macro_rules! dense_index {
    ($(#[$attr:meta])* $name:ident, $tag:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Unset slot: an unreached node's predecessor, a fresh array entry.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `false` only for [`INVALID`](Self::INVALID).
            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($tag, "#{}"), self.0)
                } else {
                    f.write_str(concat!($tag, "#-"))
                }
            }
        }
    };
}

dense_index! {
    /// Position of a node in a graph's node array, in dataset order.
    NodeIdx, "n"
}

dense_index! {
    /// Position of a directed edge in a graph's edge array.  Edges of a
    /// derived graph keep the canonical positions and append after them.
    EdgeIdx, "e"
}

/// Stable node identifier as it appears in the input dataset.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

impl From<u64> for NodeId {
    #[inline]
    fn from(raw: u64) -> Self {
        NodeId(raw)
    }
}
