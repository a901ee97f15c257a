use rayon::prelude::*;

use crate::algorithms::nearest_neighbor::NearestNeighborRouter;
use crate::algorithms::range_selector::RangeSelector;
use crate::algorithms::RouteBuilder;
use crate::error::{Result, ValidationError};
use crate::models::{Budget, Point, PointIndex, PositionSet, RequiredSet, RouteResult};
use crate::utils::tsp_file::PositionProvider;

/// Request API over a loaded position set.
///
/// Every request validates its input first and then runs one of the greedy
/// algorithms; nothing is kept between requests.
#[derive(Debug, Clone)]
pub struct PathFinder {
    positions: PositionSet,
    router: NearestNeighborRouter,
    selector: RangeSelector,
}

/// Outcome of one budget request inside a sweep
#[derive(Debug)]
pub struct SweepEntry {
    pub start: PointIndex,
    pub outcome: Result<RouteResult>,
}

impl PathFinder {
    pub fn new(positions: PositionSet) -> Self {
        Self {
            positions,
            router: NearestNeighborRouter::new(),
            selector: RangeSelector::new(),
        }
    }

    pub fn from_provider<P: PositionProvider + ?Sized>(provider: &P) -> Result<Self> {
        let positions = provider.positions()?;
        log::info!("loaded {} positions", positions.len());
        Ok(Self::new(positions))
    }

    pub fn positions(&self) -> &PositionSet {
        &self.positions
    }

    /// Closed route from `start` through every index in `required`.
    ///
    /// The required set is built in position order, so the order of
    /// `required` does not matter and duplicates collapse.
    pub fn find_route_for_set<I>(&self, start: PointIndex, required: I) -> Result<RouteResult>
    where
        I: IntoIterator<Item = PointIndex>,
    {
        let start_point = self.start_point(start)?;
        let mut indices: Vec<PointIndex> = required.into_iter().collect();
        if indices.is_empty() {
            return Err(ValidationError::EmptyRequiredSet.into());
        }
        indices.sort_unstable();
        indices.dedup();

        let mut required_set = RequiredSet::new();
        for index in indices {
            let point = self
                .positions
                .get(index)
                .ok_or(ValidationError::UnknownPosition(index))?;
            if index == start {
                return Err(ValidationError::StartInRequiredSet(start).into());
            }
            required_set.insert(*point);
        }

        let route = self.router.build_route(&start_point, required_set);
        let result = RouteResult::from_route(route);
        log::info!(
            "set route: start=Position#{} visited={} total_distance={}",
            start_point.position_number(),
            result.visited_count,
            result.total_distance
        );
        Ok(result)
    }

    /// Closed route over the points reachable within `time_interval` at `travel_speed`.
    pub fn find_route_for_budget(
        &self,
        start: PointIndex,
        time_interval: f64,
        travel_speed: f64,
    ) -> Result<RouteResult> {
        let start_point = self.start_point(start)?;
        let budget = Budget::new(time_interval, travel_speed)?;
        self.selector
            .select_within_budget(&start_point, &self.positions, &budget)
    }

    /// Runs the budget request from every position in parallel.
    ///
    /// Entries come back in position order. Invalid budget parameters fail the
    /// whole sweep; per-start failures (usually an insufficient budget) are
    /// reported in the entry.
    pub fn budget_sweep(&self, time_interval: f64, travel_speed: f64) -> Result<Vec<SweepEntry>> {
        let budget = Budget::new(time_interval, travel_speed)?;

        let entries: Vec<SweepEntry> = self
            .positions
            .points()
            .par_iter()
            .map(|start| SweepEntry {
                start: start.index,
                outcome: self
                    .selector
                    .select_within_budget(start, &self.positions, &budget),
            })
            .collect();

        let reachable = entries.iter().filter(|e| e.outcome.is_ok()).count();
        log::info!(
            "sweep: starts={} with_route={reachable} max_distance={}",
            entries.len(),
            budget.max_distance()
        );
        Ok(entries)
    }

    fn start_point(&self, start: PointIndex) -> Result<Point> {
        self.positions
            .get(start)
            .copied()
            .ok_or_else(|| ValidationError::UnknownStart(start).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn create_test_finder() -> PathFinder {
        let points = (0..5).map(|i| Point::new(i, 0.0, i as f64)).collect();
        PathFinder::new(PositionSet::new(points).unwrap())
    }

    #[test]
    fn test_set_route_ignores_input_order_and_duplicates() {
        let finder = create_test_finder();
        let a = finder.find_route_for_set(0, [4, 2, 2, 1]).unwrap();
        let b = finder.find_route_for_set(0, [1, 2, 4]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.visited_count, 3);
    }

    #[test]
    fn test_set_route_validation() {
        let finder = create_test_finder();
        assert!(matches!(
            finder.find_route_for_set(7, [1]),
            Err(Error::Validation(ValidationError::UnknownStart(7)))
        ));
        assert!(matches!(
            finder.find_route_for_set(0, Vec::<PointIndex>::new()),
            Err(Error::Validation(ValidationError::EmptyRequiredSet))
        ));
        assert!(matches!(
            finder.find_route_for_set(0, [1, 9]),
            Err(Error::Validation(ValidationError::UnknownPosition(9)))
        ));
        assert!(matches!(
            finder.find_route_for_set(2, [1, 2, 3]),
            Err(Error::Validation(ValidationError::StartInRequiredSet(2)))
        ));
    }

    #[test]
    fn test_budget_validation() {
        let finder = create_test_finder();
        assert!(matches!(
            finder.find_route_for_budget(0, -1.0, 1.0),
            Err(Error::Validation(ValidationError::NonPositiveParameter { .. }))
        ));
        assert!(matches!(
            finder.find_route_for_budget(0, 1.0, 0.0),
            Err(Error::Validation(ValidationError::NonPositiveParameter { .. }))
        ));
        assert!(matches!(
            finder.find_route_for_budget(11, 1.0, 1.0),
            Err(Error::Validation(ValidationError::UnknownStart(11)))
        ));
    }

    #[test]
    fn test_sweep_matches_single_requests() {
        let finder = create_test_finder();
        let entries = finder.budget_sweep(3.0, 1.5).unwrap();
        assert_eq!(entries.len(), 5);

        for entry in &entries {
            let single = finder.find_route_for_budget(entry.start, 3.0, 1.5);
            match (&entry.outcome, single) {
                (Ok(a), Ok(b)) => assert_eq!(a, &b),
                (Err(Error::InsufficientBudget { .. }), Err(Error::InsufficientBudget { .. })) => {}
                (a, b) => panic!("sweep and single request disagree: {a:?} vs {b:?}"),
            }
        }
    }

    #[test]
    fn test_sweep_rejects_invalid_budget() {
        assert!(create_test_finder().budget_sweep(0.0, 1.0).is_err());
    }
}
