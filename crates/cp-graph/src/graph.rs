//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Nodes live in a dense array in dataset order and are addressed by
//! [`NodeIdx`]; a hash index maps the dataset's stable [`NodeId`] back to
//! its position.  Edges keep their insertion order in [`Graph::edges`], so
//! the edge set a caller loaded is the edge set they read back.
//!
//! Outgoing adjacency is a **Compressed Sparse Row** index over edge
//! positions.  Given a `NodeIdx n`, its outgoing edges are
//!
//! ```text
//! out_edges[ out_start[n] .. out_start[n+1] ]
//! ```
//!
//! built with a stable counting sort, so a node's edges are visited in the
//! order they were inserted.
//!
//! # Shared node storage
//!
//! Node arrays, the id index, and the R-tree never change once a canonical
//! graph is built.  They sit behind `Arc`s so a graph derived for another
//! travel mode shares them and only rebuilds its edge set.

use std::sync::Arc;

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use cp_core::{EdgeIdx, GeoPoint, NodeId, NodeIdx, TravelMode};

use crate::{GraphError, GraphResult, IntegrityError};

// ── Node / Edge ───────────────────────────────────────────────────────────────

/// A graph vertex: stable dataset id plus position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Node {
    pub id:  NodeId,
    pub pos: GeoPoint,
}

/// A directed arc between two nodes of the same graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub source:      NodeIdx,
    pub target:      NodeIdx,
    /// Physical length in kilometres.
    pub distance_km: f64,
    /// Thermal discomfort penalty accumulated along the arc.  Negative on
    /// links cooler than ambient.
    pub delta_temp:  f64,
}

impl Edge {
    /// The same arc walked the other way, with identical weights.
    #[inline]
    pub fn reversed(self) -> Edge {
        Edge { source: self.target, target: self.source, ..self }
    }
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: the node's position on the
/// unit sphere with its `NodeIdx`.
#[derive(Clone)]
pub(crate) struct NodeEntry {
    pub(crate) point: [f64; 3],
    pub(crate) idx:   NodeIdx,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared chord length.  Monotone in great-circle distance.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        (0..3).map(|i| (self.point[i] - point[i]).powi(2)).sum()
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Directed road graph: nodes, ordered edges, CSR adjacency, spatial index.
///
/// A `Graph` is immutable once built.  Construct canonical graphs with
/// [`GraphBuilder`] (or the loaders), and mode-specific graphs with
/// [`derive_graph`](crate::derive_graph).
#[derive(Clone)]
pub struct Graph {
    nodes:          Arc<[Node]>,
    id_index:       Arc<FxHashMap<NodeId, NodeIdx>>,
    pub(crate) spatial_idx: Arc<RTree<NodeEntry>>,

    edges:          Vec<Edge>,
    /// Number of leading entries of `edges` that came from the dataset.
    canonical_len:  usize,
    mode:           TravelMode,

    // CSR adjacency over positions in `edges`.
    out_start:      Vec<u32>,
    out_edges:      Vec<EdgeIdx>,
}

impl Graph {
    /// Assemble a graph around shared node storage and a fresh edge set.
    ///
    /// Callers guarantee every edge endpoint is a valid index into `nodes`.
    pub(crate) fn assemble(
        nodes:         Arc<[Node]>,
        id_index:      Arc<FxHashMap<NodeId, NodeIdx>>,
        spatial_idx:   Arc<RTree<NodeEntry>>,
        edges:         Vec<Edge>,
        canonical_len: usize,
        mode:          TravelMode,
    ) -> Graph {
        let (out_start, out_edges) = index_out_edges(nodes.len(), &edges);
        Graph {
            nodes,
            id_index,
            spatial_idx,
            edges,
            canonical_len,
            mode,
            out_start,
            out_edges,
        }
    }

    /// Same nodes, new edge set.
    pub(crate) fn with_edges(&self, edges: Vec<Edge>, mode: TravelMode) -> Graph {
        Graph::assemble(
            Arc::clone(&self.nodes),
            Arc::clone(&self.id_index),
            Arc::clone(&self.spatial_idx),
            edges,
            self.canonical_len,
            mode,
        )
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Travel mode this edge set was derived for.  Canonical graphs report
    /// [`TravelMode::Vehicle`].
    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    // ── Node access ───────────────────────────────────────────────────────

    /// All nodes in dataset order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// # Panics
    /// Panics if `idx` is out of range for this graph.
    #[inline]
    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }

    /// `true` if `idx` addresses a node of this graph.
    #[inline]
    pub fn contains(&self, idx: NodeIdx) -> bool {
        idx.index() < self.nodes.len()
    }

    /// Position of the node with dataset id `id`.
    pub fn idx_of(&self, id: NodeId) -> Option<NodeIdx> {
        self.id_index.get(&id).copied()
    }

    // ── Edge access ───────────────────────────────────────────────────────

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edges exactly as loaded, without any derived reverse arcs.
    pub fn canonical_edges(&self) -> &[Edge] {
        &self.edges[..self.canonical_len]
    }

    #[inline]
    pub fn edge(&self, idx: EdgeIdx) -> &Edge {
        &self.edges[idx.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeIdx`s of all outgoing edges from `node`, in
    /// insertion order.
    #[inline]
    pub fn out_edges(&self, node: NodeIdx) -> impl Iterator<Item = EdgeIdx> + '_ {
        let start = self.out_start[node.index()] as usize;
        let end   = self.out_start[node.index() + 1] as usize;
        self.out_edges[start..end].iter().copied()
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeIdx) -> usize {
        let start = self.out_start[node.index()] as usize;
        let end   = self.out_start[node.index() + 1] as usize;
        end - start
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("mode", &self.mode)
            .finish()
    }
}

/// Stable counting sort of edge positions by source node.
fn index_out_edges(node_count: usize, edges: &[Edge]) -> (Vec<u32>, Vec<EdgeIdx>) {
    let mut out_start = vec![0u32; node_count + 1];
    for e in edges {
        out_start[e.source.index() + 1] += 1;
    }
    for i in 1..=node_count {
        out_start[i] += out_start[i - 1];
    }
    debug_assert_eq!(out_start[node_count] as usize, edges.len());

    let mut cursor = out_start.clone();
    let mut out_edges = vec![EdgeIdx::INVALID; edges.len()];
    for (i, e) in edges.iter().enumerate() {
        let slot = &mut cursor[e.source.index()];
        out_edges[*slot as usize] = EdgeIdx(i as u32);
        *slot += 1;
    }
    (out_start, out_edges)
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a canonical [`Graph`] incrementally, then call
/// [`build`](Self::build).
///
/// Nodes must be added before the edges that reference them.  Every
/// insertion is validated, so a built graph always satisfies the integrity
/// invariants (unique ids, finite coordinates, known endpoints, finite
/// weights, non-negative lengths).
///
/// # Example
///
/// ```
/// use cp_core::{GeoPoint, NodeId};
/// use cp_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_node(NodeId(1), GeoPoint::new(29.07, -110.95)).unwrap();
/// b.add_node(NodeId(2), GeoPoint::new(29.08, -110.95)).unwrap();
/// b.add_edge(NodeId(1), NodeId(2), 1.1, 0.3).unwrap();
/// let g = b.build().unwrap();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1); // directed
/// ```
pub struct GraphBuilder {
    nodes:    Vec<Node>,
    id_index: FxHashMap<NodeId, NodeIdx>,
    edges:    Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes:    Vec::new(),
            id_index: FxHashMap::default(),
            edges:    Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:    Vec::with_capacity(nodes),
            id_index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            edges:    Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeIdx` (sequential from 0).
    pub fn add_node(&mut self, id: NodeId, pos: GeoPoint) -> GraphResult<NodeIdx> {
        if !pos.is_finite() {
            return Err(IntegrityError::NonFiniteCoordinate(id).into());
        }
        if self.id_index.contains_key(&id) {
            return Err(IntegrityError::DuplicateNode(id).into());
        }
        let idx = NodeIdx(self.nodes.len() as u32);
        self.id_index.insert(id, idx);
        self.nodes.push(Node { id, pos });
        Ok(idx)
    }

    /// Add a **directed** edge between two previously added nodes.
    ///
    /// - `distance_km`: physical length in kilometres.
    /// - `delta_temp`: thermal discomfort penalty; negative for links cooler
    ///   than ambient.
    pub fn add_edge(
        &mut self,
        source:      NodeId,
        target:      NodeId,
        distance_km: f64,
        delta_temp:  f64,
    ) -> GraphResult<EdgeIdx> {
        let link = self.edges.len();
        let lookup = |node: NodeId| {
            self.id_index
                .get(&node)
                .copied()
                .ok_or(IntegrityError::UnknownNode { link, node })
        };
        let source = lookup(source)?;
        let target = lookup(target)?;

        // A link may run cooler than ambient, so only length has a sign.
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(IntegrityError::InvalidWeight { link, field: "distance", value: distance_km }.into());
        }
        if !delta_temp.is_finite() {
            return Err(IntegrityError::InvalidWeight { link, field: "delta_temp", value: delta_temp }.into());
        }

        self.edges.push(Edge { source, target, distance_km, delta_temp });
        Ok(EdgeIdx(link as u32))
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a canonical [`Graph`].
    ///
    /// Fails with [`GraphError::EmptyGraph`] if no node was added.
    /// Time complexity: O(E) for the CSR index + O(N log N) for the R-tree
    /// bulk load.
    pub fn build(self) -> GraphResult<Graph> {
        if self.nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| NodeEntry {
                point: n.pos.to_unit_vector(),
                idx:   NodeIdx(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let canonical_len = self.edges.len();
        Ok(Graph::assemble(
            self.nodes.into(),
            Arc::new(self.id_index),
            Arc::new(spatial_idx),
            self.edges,
            canonical_len,
            TravelMode::Vehicle,
        ))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
