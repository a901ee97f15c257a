pub mod nearest_neighbor;
pub mod range_selector;

// Common algorithm traits
use crate::models::{Point, RequiredSet, Route};

/// Orders a set of required points into a closed route
pub trait RouteBuilder {
    /// Build a route from `start` through every point of `required` and back.
    ///
    /// `start` must not be part of `required`; implementations may assume it.
    fn build_route(&self, start: &Point, required: RequiredSet) -> Route;
}
