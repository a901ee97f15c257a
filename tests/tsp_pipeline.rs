// Integration test: TSPLIB text -> position set -> routes -> render sinks
use path_finder::utils::tsp_file::parse_tsp;
use path_finder::{JsonSink, PathFinder, PositionProvider, RenderSink, TspFile};

const SMALL_MAP: &str = "NAME : small
TYPE : TSP
DIMENSION : 6
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0 0
2 0 1000
3 1000 1000
4 1000 0
5 500 500
6 3000 3000
EOF
";

#[test]
fn test_set_route_from_tsp_text() {
    let data = parse_tsp(SMALL_MAP).unwrap();
    assert_eq!(data.positions.len(), 6);
    let finder = PathFinder::new(data.positions);

    // Position#1 with Position#2..4 (a unit square after scaling)
    let result = finder.find_route_for_set(0, [1, 2, 3]).unwrap();
    let order: Vec<_> = result
        .route
        .points
        .iter()
        .map(|p| p.position_number())
        .collect();
    assert_eq!(order, vec![1, 2, 3, 4, 1]);
    assert!((result.total_distance - 4.0).abs() < 1e-12);

    let markers = result.markers();
    assert_eq!(markers.len(), 4);
    assert_eq!(markers[3].info, "Position#4");
}

#[test]
fn test_budget_route_from_tsp_file() {
    let path = std::env::temp_dir().join(format!("path-finder-small-{}.tsp", std::process::id()));
    std::fs::write(&path, SMALL_MAP).unwrap();
    let provider = TspFile::new(&path);
    let finder = PathFinder::from_provider(&provider).unwrap();
    std::fs::remove_file(&path).unwrap();

    // Position#5 sits in the middle of the square; Position#6 is far out
    let result = finder.find_route_for_budget(4, 2.0, 2.0).unwrap();
    let visited: Vec<_> = result
        .route
        .interior()
        .iter()
        .map(|p| p.position_number())
        .collect();
    assert_eq!(visited.len(), 3);
    assert!(!visited.contains(&6));
    assert!(result.total_distance < 4.0);

    let mut sink = JsonSink::new(Vec::new());
    sink.render(&result).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
    assert_eq!(json["visited_count"], result.visited_count);
}

#[test]
fn test_sweep_over_tsp_positions() {
    let positions = parse_tsp(SMALL_MAP).unwrap().positions;
    let finder = PathFinder::from_provider(&positions).unwrap();

    let entries = finder.budget_sweep(1.0, 1.0).unwrap();
    let starts: Vec<_> = entries.iter().map(|e| e.start).collect();
    assert_eq!(starts, vec![0, 1, 2, 3, 4, 5]);
    // Position#6 cannot reach anything with a budget of 1.0
    assert!(entries[5].outcome.is_err());
    assert!(entries[4].outcome.is_err());
}
