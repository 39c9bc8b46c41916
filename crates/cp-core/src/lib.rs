//! `cp-core` — foundational types for the `cool_paths` thermal-comfort router.
//!
//! This crate is a dependency of every other `cp-*` crate.  It has no `cp-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId` (dataset id), `NodeIdx`, `EdgeIdx`           |
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`mode`]        | `TravelMode` enum                                     |
//! | [`config`]      | `RouteConfig`, `HeuristicKind`, `Snapping`            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod mode;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{HeuristicKind, RouteConfig, Snapping};
pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint};
pub use ids::{EdgeIdx, NodeId, NodeIdx};
pub use mode::TravelMode;
