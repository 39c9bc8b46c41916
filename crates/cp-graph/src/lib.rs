//! `cp-graph` — road graph, dataset loading, mode derivation, and snapping.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `Graph` (nodes + ordered edges + CSR + R-tree), `GraphBuilder` |
//! | [`loader`]  | `Dataset`, JSON and CSV loaders                             |
//! | [`store`]   | `GraphStore`, owner of the immutable canonical graph       |
//! | [`mode`]    | `derive_graph`: vehicle / pedestrian edge sets             |
//! | [`nearest`] | `Graph::snap`, linear and R-tree nearest-node search        |
//! | [`error`]   | `GraphError`, `IntegrityError`, `GraphResult<T>`            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `cp-core` types.        |

pub mod error;
pub mod graph;
pub mod loader;
pub mod mode;
pub mod nearest;
pub mod store;


pub use error::{GraphError, GraphResult, IntegrityError};
pub use graph::{Edge, Graph, GraphBuilder, Node};
pub use loader::{Dataset, LinkRecord, NodeRecord};
pub use mode::derive_graph;
pub use store::GraphStore;
