mod common;

use pbfroute_lib::{load_road_map, Bounds, Error, MapNode, RoadMap, SearchOptions};

use common::fixtures_dir;

fn sample_map() -> RoadMap {
    load_road_map(&fixtures_dir().join("sample_map.json")).expect("fixture map loads")
}

#[test]
fn fixture_map_builds_bidirectional_edges() {
    let map = sample_map();

    assert_eq!(map.node_count(), 6);
    assert_eq!(map.way_count(), 3);
    assert_eq!(map.graph().edge_count(), 10);
    assert_eq!(map.node_id(101), Some(0));
    assert_eq!(map.external_id(4), Some(105));
}

#[test]
fn neighbours_follow_way_order() {
    let map = sample_map();

    let ids: Vec<_> = map
        .neighbours(103)
        .expect("known node")
        .iter()
        .map(|neighbour| neighbour.id)
        .collect();
    assert_eq!(ids, vec![102, 105, 104]);

    let from_start = map.neighbours(101).expect("known node");
    assert_eq!(from_start.len(), 2);
    assert!((from_start[0].distance - 1.112).abs() < 0.001);
}

#[test]
fn route_prefers_the_straight_road() {
    let map = sample_map();
    let result = map
        .route(101, 105, &SearchOptions::default())
        .expect("route succeeds");

    let ids: Vec<_> = result
        .path()
        .iter()
        .filter_map(|&node| map.external_id(node))
        .collect();
    assert_eq!(ids, vec![101, 102, 103, 105]);
    assert!((result.distance() - 3.3359).abs() < 0.001);
}

#[test]
fn unknown_way_references_split_the_way() {
    let map = sample_map();
    let result = map
        .route(101, 106, &SearchOptions::default())
        .expect("unreachable is not an error");

    assert!(!result.is_reachable());
    assert!(map.neighbours(106).expect("known node").is_empty());
}

#[test]
fn unknown_map_nodes_are_errors() {
    let map = sample_map();
    let err = map
        .route(101, 999, &SearchOptions::default())
        .expect_err("999 is not a map node");

    assert!(matches!(err, Error::UnknownMapNode { id: 999 }));
    assert!(map.neighbours(-5).is_err());
}

#[test]
fn bounding_box_search_respects_limit() {
    let map = sample_map();
    let bounds = Bounds {
        min_lat: 52.005,
        max_lat: 52.025,
        min_lon: 3.99,
        max_lon: 4.02,
    };

    let all: Vec<_> = map.nodes_within(&bounds, 10).iter().map(|n| n.id).collect();
    assert_eq!(all, vec![102, 103, 104]);

    let limited: Vec<_> = map.nodes_within(&bounds, 2).iter().map(|n| n.id).collect();
    assert_eq!(limited, vec![102, 103]);
}

#[test]
fn duplicate_node_ids_are_rejected() {
    let json = r#"{
        "nodes": [
            { "id": 1, "lat": 0.0, "lon": 0.0 },
            { "id": 1, "lat": 1.0, "lon": 1.0 }
        ],
        "ways": []
    }"#;

    let err = RoadMap::from_reader(json.as_bytes()).expect_err("duplicate ids");
    assert!(matches!(err, Error::InvalidDocument { .. }));
}

#[test]
fn map_without_ways_has_no_edges() {
    let json = r#"{ "nodes": [ { "id": 5, "lat": 10.0, "lon": 20.0 } ] }"#;
    let map = RoadMap::from_reader(json.as_bytes()).expect("map parses");

    assert_eq!(map.graph().edge_count(), 0);
    assert_eq!(
        map.node_by_id(5),
        Some(&MapNode {
            id: 5,
            lat: 10.0,
            lon: 20.0
        })
    );
}

#[test]
fn bounds_cover_every_node() {
    let map = sample_map();
    let bounds = map.bounds().expect("map has nodes");

    assert_eq!(
        bounds,
        Bounds {
            min_lat: 52.0,
            max_lat: 53.0,
            min_lon: 4.0,
            max_lon: 5.0,
        }
    );
    let centre = bounds.centre();
    assert!((centre.lat - 52.5).abs() < 1e-9);
    assert!((centre.lon - 4.5).abs() < 1e-9);

    let empty = RoadMap::from_reader(r#"{"nodes": []}"#.as_bytes()).expect("empty map");
    assert!(empty.bounds().is_none());
}

#[test]
fn way_geometries_skip_unknown_references() {
    let map = sample_map();
    let geometries = map.way_geometries(10);

    let shapes: Vec<(i64, usize)> = geometries
        .iter()
        .map(|geometry| (geometry.id, geometry.coords.len()))
        .collect();
    assert_eq!(shapes, vec![(1, 4), (2, 3), (3, 2)]);
    assert_eq!(geometries[2].coords, vec![[52.02, 4.0], [53.0, 5.0]]);

    assert_eq!(map.way_geometries(1).len(), 1);
}

#[test]
fn way_geometries_drop_ways_with_one_point() {
    let json = r#"{
        "nodes": [ { "id": 1, "lat": 0.0, "lon": 0.0 } ],
        "ways": [ { "id": 4, "nodes": [1, 77] } ]
    }"#;
    let map = RoadMap::from_reader(json.as_bytes()).expect("map parses");

    assert!(map.way_geometries(10).is_empty());
    assert_eq!(map.way_count(), 1);
}
