//! `cp-engine` — the owning object behind every routing query.
//!
//! # Query flow
//!
//! ```text
//! GraphStore::load(dataset)          canonical graph, immutable
//!   └─ EngineBuilder::build()        derive active graph for config.mode
//!        ├─ set_mode(m)              rebuild active graph from canonical
//!        └─ route(from, to)
//!             ① snap both points to their nearest nodes
//!             ② A* over the active graph
//!             ③ reconstruct start→goal coordinates
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs `route_many` on Rayon's thread pool.              |
//! | `serde`    | Serde derives on `cp-core` types.                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cp_core::{GeoPoint, RouteConfig, TravelMode};
//! use cp_engine::EngineBuilder;
//! use cp_graph::GraphStore;
//!
//! let store = GraphStore::open(Path::new("grafo_osm_limpio.json"))?;
//! let mut engine = EngineBuilder::new(store).config(RouteConfig::default()).build()?;
//! engine.set_mode(TravelMode::Pedestrian);
//! let trip = engine.route(GeoPoint::new(29.07, -110.96), GeoPoint::new(29.09, -110.94))?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::{RoutingEngine, SnappedRoute};
pub use error::{EngineError, EngineResult};
