//! `cp-search` — edge costs, heuristics, A* search, and path reconstruction.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`cost`]      | `edge_cost` and the distance / thermal blend weights      |
//! | [`heuristic`] | `Heuristic` trait, `Haversine`, `ScaledHaversine`, `Zero` |
//! | [`state`]     | `SearchState`: open set, g-scores, predecessors, closed  |
//! | [`router`]    | `Router` trait, `AStarRouter`, `search`                   |
//! | [`path`]      | `Route`, `reconstruct`                                    |
//! | [`error`]     | `SearchError`, `SearchResult<T>`                          |

pub mod cost;
pub mod error;
pub mod heuristic;
pub mod path;
pub mod router;
pub mod state;


pub use cost::{DISTANCE_WEIGHT, THERMAL_WEIGHT, edge_cost};
pub use error::{SearchError, SearchResult};
pub use heuristic::{Haversine, Heuristic, ScaledHaversine, Zero};
pub use path::{Route, reconstruct};
pub use router::{AStarRouter, Router, search};
pub use state::SearchState;
