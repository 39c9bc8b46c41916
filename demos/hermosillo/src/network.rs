//! Built-in street grid used when no graph file is given.
//!
//! A 6 × 6 grid of blocks around downtown Hermosillo, Sonora.  East–west
//! streets are one-way and alternate direction by row; north–south avenues
//! are two-way.  `delta_temp` varies per block so that the coolest route is
//! not always the shortest.

use cp_core::GeoPoint;
use cp_graph::{Dataset, LinkRecord, NodeRecord};

const ROWS: u64 = 6;
const COLS: u64 = 6;
const ORIGIN: GeoPoint = GeoPoint { lat: 29.0650, lon: -110.9650 };
const STEP_DEG: f64 = 0.002;

fn id(row: u64, col: u64) -> u64 {
    row * COLS + col + 1
}

fn pos(row: u64, col: u64) -> GeoPoint {
    GeoPoint::new(
        ORIGIN.lat + row as f64 * STEP_DEG,
        ORIGIN.lon + col as f64 * STEP_DEG,
    )
}

/// Thermal penalty of the block starting at `(row, col)`.  Shaded avenues
/// on the west side, exposed streets in the middle.
fn heat(row: u64, col: u64) -> f64 {
    ((row * 7 + col * 3) % 5) as f64 * 0.15
}

/// Build the grid as a raw dataset, so it goes through the same validation
/// as a file on disk.
pub fn build_dataset() -> Dataset {
    let mut nodes = Vec::with_capacity((ROWS * COLS) as usize);
    for row in 0..ROWS {
        for col in 0..COLS {
            let p = pos(row, col);
            nodes.push(NodeRecord { id: id(row, col), lat: p.lat, lon: p.lon });
        }
    }

    let mut links = Vec::new();
    let mut arc = |a: (u64, u64), b: (u64, u64), delta_temp: f64| {
        links.push(LinkRecord {
            source:      id(a.0, a.1),
            target:      id(b.0, b.1),
            distance_km: pos(a.0, a.1).distance_km(pos(b.0, b.1)),
            delta_temp,
        });
    };

    // One-way streets: even rows run east, odd rows run west.
    for row in 0..ROWS {
        for col in 0..COLS - 1 {
            let t = heat(row, col);
            if row % 2 == 0 {
                arc((row, col), (row, col + 1), t);
            } else {
                arc((row, col + 1), (row, col), t);
            }
        }
    }

    // Two-way avenues; the return direction is a little cooler (shade side).
    for col in 0..COLS {
        for row in 0..ROWS - 1 {
            let t = heat(row, col);
            arc((row, col), (row + 1, col), t);
            arc((row + 1, col), (row, col), t * 0.5);
        }
    }

    Dataset { nodes, links }
}
