//! Per-query search state.
//!
//! One `SearchState` is allocated for each route computation and dropped
//! when it ends, so concurrent queries never share mutable state.
//!
//! The open set is a binary heap that may hold several entries for the same
//! node.  Improving a node's g-score pushes a new entry instead of updating
//! the old one; outdated entries are skipped when popped because their node
//! is already closed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use cp_core::{EdgeIdx, NodeIdx};

// ── Open-set entry ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct OpenEntry {
    /// f = g + h at push time.
    priority: f64,
    /// Push order; equal priorities pop first-in first-out.
    seq:      u64,
    node:     NodeIdx,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped on both keys to make BinaryHeap a min-heap.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

// ── SearchState ───────────────────────────────────────────────────────────────

/// Open set, g-scores, predecessors, and closed flags for one query.
///
/// Dense arrays indexed by `NodeIdx`:
///
/// - `g_score[v]`: best known cost from the start; `f64::INFINITY` means
///   "no recorded score".
/// - `came_from[v]`: the edge that produced `g_score[v]`;
///   `EdgeIdx::INVALID` for the start and unreached nodes.
/// - `closed[v]`: `v` has been expanded and its cost is final.
pub struct SearchState {
    open:       BinaryHeap<OpenEntry>,
    g_score:    Vec<f64>,
    came_from:  Vec<EdgeIdx>,
    closed:     Vec<bool>,
    next_seq:   u64,
    expansions: usize,
}

impl SearchState {
    /// Fresh state for a graph of `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            open:       BinaryHeap::new(),
            g_score:    vec![f64::INFINITY; node_count],
            came_from:  vec![EdgeIdx::INVALID; node_count],
            closed:     vec![false; node_count],
            next_seq:   0,
            expansions: 0,
        }
    }

    /// Record `start` at cost zero and put it in the open set.
    pub fn seed(&mut self, start: NodeIdx) {
        self.g_score[start.index()] = 0.0;
        self.push(start, 0.0);
    }

    fn push(&mut self, node: NodeIdx, priority: f64) {
        self.open.push(OpenEntry { priority, seq: self.next_seq, node });
        self.next_seq += 1;
    }

    /// Remove and return the open node with the lowest priority, skipping
    /// entries whose node is already closed.  `None` once the open set is
    /// exhausted.
    pub fn pop_open(&mut self) -> Option<NodeIdx> {
        while let Some(entry) = self.open.pop() {
            if !self.closed[entry.node.index()] {
                return Some(entry.node);
            }
        }
        None
    }

    /// Mark `node` as expanded.
    pub fn close(&mut self, node: NodeIdx) {
        self.closed[node.index()] = true;
        self.expansions += 1;
    }

    #[inline]
    pub fn is_closed(&self, node: NodeIdx) -> bool {
        self.closed[node.index()]
    }

    #[inline]
    pub fn g_score(&self, node: NodeIdx) -> f64 {
        self.g_score[node.index()]
    }

    /// Offer a path to `node` of cost `tentative` arriving over `via`.
    ///
    /// If it beats the recorded g-score, record it and push `node` with
    /// priority `tentative + h`.  Returns whether the offer was taken.
    pub fn relax(&mut self, node: NodeIdx, via: EdgeIdx, tentative: f64, h: f64) -> bool {
        if tentative < self.g_score[node.index()] {
            self.g_score[node.index()] = tentative;
            self.came_from[node.index()] = via;
            self.push(node, tentative + h);
            true
        } else {
            false
        }
    }

    /// Predecessor edges, indexed by `NodeIdx`.
    pub fn came_from(&self) -> &[EdgeIdx] {
        &self.came_from
    }

    /// Number of nodes expanded so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Entries currently in the open set, stale ones included.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }
}
