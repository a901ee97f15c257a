use crate::algorithms::RouteBuilder;
use crate::models::{Point, RequiredSet, Route};
use crate::utils::distance::{argmin, look_ahead_score};

/// Greedy nearest-neighbour router with a return-to-start look-ahead.
///
/// At every step the next stop is the remaining point with the smallest
/// `distance(current, candidate) + distance(candidate, start)`. Ties go to the
/// point that comes first in the required set's order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborRouter;

impl NearestNeighborRouter {
    pub fn new() -> Self {
        Self
    }
}

impl RouteBuilder for NearestNeighborRouter {
    fn build_route(&self, start: &Point, mut required: RequiredSet) -> Route {
        let mut stops = Vec::with_capacity(required.len());
        let mut current = *start;

        while let Some(next) = argmin(
            required
                .iter()
                .map(|candidate| look_ahead_score(&current, candidate, start)),
        ) {
            let Some(point) = required.remove_at(next) else {
                break;
            };
            log::trace!(
                "route: Position#{} -> Position#{}",
                current.position_number(),
                point.position_number()
            );
            stops.push(point);
            current = point;
        }

        Route::closed(*start, stops)
    }
}
