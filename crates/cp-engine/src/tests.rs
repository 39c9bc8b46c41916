//! Engine-level tests: end-to-end queries through snapping, mode switching,
//! and search.

#[cfg(test)]
mod helpers {
    use cp_core::RouteConfig;
    use cp_graph::{Dataset, GraphStore, LinkRecord, NodeRecord};

    use crate::{EngineBuilder, RoutingEngine};

    pub fn node(id: u64, lat: f64, lon: f64) -> NodeRecord {
        NodeRecord { id, lat, lon }
    }

    pub fn link(source: u64, target: u64, distance_km: f64, delta_temp: f64) -> LinkRecord {
        LinkRecord { source, target, distance_km, delta_temp }
    }

    /// A(1), B(2), C(3), D(4) with A→B→D (cost 0.8) and A→C→D (cost 2.0).
    pub fn diamond() -> Dataset {
        Dataset {
            nodes: vec![
                node(1, 29.0730, -110.9550),
                node(2, 29.0745, -110.9535),
                node(3, 29.0715, -110.9535),
                node(4, 29.0730, -110.9520),
            ],
            links: vec![
                link(1, 2, 1.0, 0.0),
                link(2, 4, 1.0, 0.0),
                link(1, 3, 5.0, 0.0),
                link(3, 4, 1.0, 0.0),
            ],
        }
    }

    /// A(1) → B(2), nothing leading back into A.
    pub fn one_way() -> Dataset {
        Dataset {
            nodes: vec![node(1, 29.0730, -110.9550), node(2, 29.0740, -110.9550)],
            links: vec![link(1, 2, 1.0, 0.0)],
        }
    }

    pub fn engine(dataset: Dataset, config: RouteConfig) -> RoutingEngine {
        let store = GraphStore::load(dataset).unwrap();
        EngineBuilder::new(store).config(config).build().unwrap()
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use cp_core::{GeoPoint, NodeId, RouteConfig, TravelMode};
    use cp_graph::GraphStore;

    use super::helpers::{diamond, engine, link, one_way};

    #[test]
    fn cheaper_branch_wins_in_vehicle_mode() {
        let e = engine(diamond(), RouteConfig::default());
        let trip = e
            .route(GeoPoint::new(29.0731, -110.9551), GeoPoint::new(29.0729, -110.9519))
            .unwrap();
        assert_eq!(trip.start.id, NodeId(1));
        assert_eq!(trip.goal.id, NodeId(4));
        assert_eq!(trip.mode, TravelMode::Vehicle);
        assert_eq!(
            trip.route.node_ids(e.active()),
            vec![NodeId(1), NodeId(2), NodeId(4)]
        );
        assert!((trip.route.cost - 0.8).abs() < 1e-9);
        assert_eq!(trip.route.coordinates.len(), 3);
    }

    #[test]
    fn reachability_depends_on_mode() {
        let mut e = engine(one_way(), RouteConfig::default());
        let a = GeoPoint::new(29.0730, -110.9550);
        let b = GeoPoint::new(29.0740, -110.9550);

        let err = e.route(b, a).unwrap_err();
        assert!(err.is_no_path());

        e.set_mode(TravelMode::Pedestrian);
        let trip = e.route(b, a).unwrap();
        assert_eq!(trip.mode, TravelMode::Pedestrian);
        assert_eq!(trip.route.node_ids(e.active()), vec![NodeId(2), NodeId(1)]);
    }

    #[test]
    fn dangling_link_fails_load() {
        let mut raw = diamond();
        raw.links.push(link(4, 42, 1.0, 0.0));
        let err = GraphStore::load(raw).unwrap_err();
        assert!(err.is_integrity());
    }

    #[test]
    fn same_snapped_node_is_trivial() {
        let e = engine(diamond(), RouteConfig::default());
        let trip = e
            .route(GeoPoint::new(29.07301, -110.95501), GeoPoint::new(29.07299, -110.95499))
            .unwrap();
        assert!(trip.route.is_trivial());
        assert_eq!(trip.route.nodes.len(), 1);
        assert_eq!(trip.route.cost, 0.0);
        assert_eq!(trip.route.expansions, 0);
    }
}

// ── Mode switching ────────────────────────────────────────────────────────────

#[cfg(test)]
mod modes {
    use cp_core::{RouteConfig, TravelMode};

    use super::helpers::{diamond, engine};

    #[test]
    fn starts_in_configured_mode() {
        let config = RouteConfig { mode: TravelMode::Pedestrian, ..RouteConfig::default() };
        let e = engine(diamond(), config);
        assert_eq!(e.mode(), TravelMode::Pedestrian);
        assert_eq!(e.active().edge_count(), 8);
        assert_eq!(e.canonical().edge_count(), 4);
    }

    #[test]
    fn toggling_never_accumulates_edges() {
        let mut e = engine(diamond(), RouteConfig::default());
        let canonical = e.canonical().edges().to_vec();
        for _ in 0..7 {
            e.toggle_mode();
        }
        assert_eq!(e.mode(), TravelMode::Pedestrian);
        assert_eq!(e.active().edge_count(), 2 * canonical.len());

        e.set_mode(TravelMode::Pedestrian);
        assert_eq!(e.active().edge_count(), 2 * canonical.len());

        e.set_mode(TravelMode::Vehicle);
        assert_eq!(e.active().edges(), &canonical[..]);
        assert_eq!(e.canonical().edges(), &canonical[..]);
    }

    #[test]
    fn snapshot_survives_mode_switch() {
        let mut e = engine(diamond(), RouteConfig::default());
        let before = e.snapshot();
        e.set_mode(TravelMode::Pedestrian);
        assert_eq!(before.mode(), TravelMode::Vehicle);
        assert_eq!(before.edge_count(), 4);
        assert_eq!(e.active().edge_count(), 8);
    }
}

// ── Configuration & batch ─────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use cp_core::{GeoPoint, HeuristicKind, NodeId, RouteConfig, Snapping};
    use cp_graph::{GraphError, GraphStore};
    use cp_search::{AStarRouter, Zero};

    use super::helpers::{diamond, engine, one_way};
    use crate::{EngineBuilder, EngineError};

    #[test]
    fn zero_expansion_cap_rejected_at_build() {
        let store = GraphStore::load(diamond()).unwrap();
        let config = RouteConfig { max_expansions: Some(0), ..RouteConfig::default() };
        let err = EngineBuilder::new(store).config(config).build().err().unwrap();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn expansion_cap_surfaces_as_no_path() {
        let config = RouteConfig { max_expansions: Some(1), ..RouteConfig::default() };
        let e = engine(diamond(), config);
        let err = e
            .route(GeoPoint::new(29.0730, -110.9550), GeoPoint::new(29.0730, -110.9520))
            .unwrap_err();
        assert!(err.is_no_path());
    }

    #[test]
    fn every_heuristic_and_snapping_agrees_on_diamond() {
        for heuristic in [HeuristicKind::Haversine, HeuristicKind::ScaledHaversine, HeuristicKind::Zero] {
            for snapping in [Snapping::Linear, Snapping::Indexed] {
                let config = RouteConfig { heuristic, snapping, ..RouteConfig::default() };
                let e = engine(diamond(), config);
                let trip = e
                    .route(GeoPoint::new(29.0730, -110.9550), GeoPoint::new(29.0730, -110.9520))
                    .unwrap();
                assert_eq!(
                    trip.route.node_ids(e.active()),
                    vec![NodeId(1), NodeId(2), NodeId(4)],
                    "{heuristic:?} / {snapping:?}"
                );
            }
        }
    }

    #[test]
    fn custom_router() {
        let store = GraphStore::load(diamond()).unwrap();
        let e = EngineBuilder::new(store).build_with(AStarRouter::new(Zero)).unwrap();
        let trip = e
            .route(GeoPoint::new(29.0730, -110.9550), GeoPoint::new(29.0730, -110.9520))
            .unwrap();
        assert!((trip.route.cost - 0.8).abs() < 1e-9);
    }

    #[test]
    fn batch_preserves_query_order() {
        let e = engine(one_way(), RouteConfig::default());
        let a = GeoPoint::new(29.0730, -110.9550);
        let b = GeoPoint::new(29.0740, -110.9550);
        let results = e.route_many(&[(a, b), (b, a), (a, a)]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].as_ref().err().is_some_and(|e| e.is_no_path()));
        assert!(results[2].as_ref().is_ok_and(|t| t.route.is_trivial()));
    }

    #[test]
    fn opens_sample_dataset_from_disk() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../demos/hermosillo/data/centro.json");
        let e = EngineBuilder::open(&path).unwrap().build().unwrap();
        assert_eq!(e.canonical().node_count(), 5);

        let trip = e
            .route(GeoPoint::new(29.0731, -110.9551), GeoPoint::new(29.0760, -110.9521))
            .unwrap();
        assert_eq!(
            trip.route.node_ids(e.active()),
            vec![NodeId(101), NodeId(103), NodeId(104), NodeId(105)]
        );
        assert!((trip.route.cost - 0.968).abs() < 1e-9);
    }

    #[test]
    fn missing_file_is_graph_error() {
        let err = EngineBuilder::open(std::path::Path::new("/nonexistent/graph.json")).err().unwrap();
        assert!(matches!(err, EngineError::Graph(_)));
        assert!(!err.is_no_path());
    }

    #[test]
    fn non_finite_query_is_a_graph_error() {
        for snapping in [Snapping::Linear, Snapping::Indexed] {
            let e = engine(diamond(), RouteConfig { snapping, ..RouteConfig::default() });
            let nan = GeoPoint::new(f64::NAN, -110.9550);
            let ok = GeoPoint::new(29.0730, -110.9520);

            let err = e.route(nan, ok).unwrap_err();
            assert!(matches!(err, EngineError::Graph(GraphError::InvalidQuery(_))));
            assert!(!err.is_no_path());
            assert!(e.route(ok, nan).is_err());
            assert!(e.snap(nan).is_err());
        }
    }

    #[test]
    fn snap_reports_node() {
        let e = engine(diamond(), RouteConfig::default());
        let n = e.snap(GeoPoint::new(29.0744, -110.9536)).unwrap();
        assert_eq!(n.id, NodeId(2));
    }
}
