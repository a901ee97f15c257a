// Integration tests for budget-limited routes
use path_finder::models::{Budget, Point, PositionSet};
use path_finder::{Error, PathFinder, RangeSelector, Selection, ValidationError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_positions(rng: &mut StdRng, n: usize) -> PositionSet {
    let points = (0..n)
        .map(|i| Point::new(i, rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0)))
        .collect();
    PositionSet::new(points).unwrap()
}

/// Replays the scan order and checks every acceptance against the budget
fn assert_within_budget(start: &Point, selection: &Selection) {
    let mut current = *start;
    let mut travelled = 0.0;
    for point in selection.accepted.iter() {
        travelled += current.distance_to(point);
        let return_leg = point.distance_to(start);
        assert!(
            travelled + return_leg < selection.max_distance,
            "Position#{} accepted beyond the budget",
            point.position_number()
        );
        current = *point;
    }
    assert_eq!(travelled, selection.distance_travelled);
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let finder = PathFinder::new(random_positions(&mut StdRng::seed_from_u64(1), 5));

    assert!(matches!(
        finder.find_route_for_budget(2, -1.0, 3.0),
        Err(Error::Validation(ValidationError::NonPositiveParameter {
            name: "time_interval",
            ..
        }))
    ));
    assert!(matches!(
        finder.find_route_for_budget(2, 1.0, 0.0),
        Err(Error::Validation(ValidationError::NonPositiveParameter {
            name: "travel_speed",
            ..
        }))
    ));
    assert!(finder.find_route_for_budget(2, f64::NAN, 1.0).is_err());
}

#[test]
fn test_remote_start_has_insufficient_budget() {
    let positions = PositionSet::new(vec![
        Point::new(0, 0.0, 0.0),
        Point::new(1, 0.0, 1.0),
        Point::new(2, 0.0, 100.0),
    ])
    .unwrap();
    let finder = PathFinder::new(positions);

    let err = finder.find_route_for_budget(2, 10.0, 1.0).unwrap_err();
    match err {
        Error::InsufficientBudget {
            time_interval,
            travel_speed,
            start,
        } => {
            assert_eq!(time_interval, 10.0);
            assert_eq!(travel_speed, 1.0);
            assert_eq!(start, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_acceptance_order_breaks_routing_ties() {
    // Scan accepts #4, #5, #2, #1 (0-based 3, 4, 1, 0). From the start, #2 and
    // #4 tie on score and #4 was accepted first.
    let positions =
        PositionSet::new((0..5).map(|i| Point::new(i, 0.0, i as f64)).collect()).unwrap();
    let finder = PathFinder::new(positions);

    let result = finder.find_route_for_budget(2, 5.0, 2.0).unwrap();
    let order: Vec<_> = result.route.points.iter().map(|p| p.index).collect();
    assert_eq!(order, vec![2, 3, 4, 1, 0, 2]);
    assert_eq!(result.total_distance, 8.0);
    assert_eq!(result.visited_count, 4);
}

#[test]
fn test_boundary_starts_scan_in_one_direction() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..30 {
        let n = rng.gen_range(3..50);
        let positions = random_positions(&mut rng, n);
        let budget = Budget::new(rng.gen_range(1.0..20.0), rng.gen_range(0.5..5.0)).unwrap();
        let selector = RangeSelector::new();

        let lowest = positions.points()[0];
        if let Ok(selection) = selector.select(&lowest, &positions, &budget) {
            let indices: Vec<_> = selection.accepted.indices().collect();
            assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");
            assert!(indices.iter().all(|&i| i > lowest.index));
            assert_within_budget(&lowest, &selection);
        }

        let highest = positions.points()[n - 1];
        if let Ok(selection) = selector.select(&highest, &positions, &budget) {
            let indices: Vec<_> = selection.accepted.indices().collect();
            assert!(indices.windows(2).all(|w| w[0] > w[1]), "{indices:?}");
            assert_within_budget(&highest, &selection);
        }
    }
}

#[test]
fn test_random_budget_routes() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..40 {
        let n = rng.gen_range(2..60);
        let positions = random_positions(&mut rng, n);
        let start = positions.points()[rng.gen_range(0..n)];
        let budget = Budget::new(rng.gen_range(0.5..30.0), rng.gen_range(0.5..3.0)).unwrap();
        let selector = RangeSelector::new();

        match selector.select(&start, &positions, &budget) {
            Ok(selection) => {
                assert_eq!(selection.max_distance, budget.travel_speed * budget.time_interval);
                assert!(!selection.accepted.contains(start.index));
                assert_within_budget(&start, &selection);

                let result = selector
                    .select_within_budget(&start, &positions, &budget)
                    .unwrap();
                assert_eq!(result.visited_count, selection.accepted.len());
                assert_eq!(result.route.points[0], start);
                assert_eq!(result.route.points[result.route.len() - 1], start);

                let mut interior: Vec<_> =
                    result.route.interior().iter().map(|p| p.index).collect();
                let mut accepted: Vec<_> = selection.accepted.indices().collect();
                interior.sort_unstable();
                accepted.sort_unstable();
                assert_eq!(interior, accepted);
            }
            Err(Error::InsufficientBudget { start: s, .. }) => assert_eq!(s, start.index),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_budget_routes_are_deterministic() {
    let positions = random_positions(&mut StdRng::seed_from_u64(5), 80);
    let finder = PathFinder::new(positions);

    let first = finder.find_route_for_budget(40, 40.0, 1.5).unwrap();
    let second = finder.find_route_for_budget(40, 40.0, 1.5).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.total_distance.to_bits(), second.total_distance.to_bits());
}
