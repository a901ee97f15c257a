// Route models: the closed visiting order and the result handed to rendering

use geo::{BoundingRect, LineString, Rect};
use serde::Serialize;

use crate::models::{Distance, Point};

/// A closed route: starts and ends at the same point, visiting every
/// interior point once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Points in visiting order, the start point repeated at the end
    pub points: Vec<Point>,
}

impl Route {
    /// Closes `stops` into a route from and back to `start`
    pub fn closed(start: Point, stops: Vec<Point>) -> Self {
        let mut points = Vec::with_capacity(stops.len() + 2);
        points.push(start);
        points.extend(stops);
        points.push(start);
        Self { points }
    }

    pub fn start(&self) -> &Point {
        &self.points[0]
    }

    /// Points strictly between the start and the return to start
    pub fn interior(&self) -> &[Point] {
        &self.points[1..self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A closed route always holds at least the start twice.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of the leg distances in visiting order
    pub fn total_distance(&self) -> Distance {
        self.points
            .windows(2)
            .map(|leg| leg[0].distance_to(&leg[1]))
            .sum()
    }
}

/// Output of a path-finding request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub route: Route,
    pub total_distance: Distance,
    /// Number of points visited besides the start
    pub visited_count: usize,
}

impl RouteResult {
    pub fn from_route(route: Route) -> Self {
        let total_distance = route.total_distance();
        let visited_count = route.len() - 2;
        Self {
            route,
            total_distance,
            visited_count,
        }
    }

    /// Markers in visiting order, without the closing return to start
    pub fn markers(&self) -> Vec<Marker> {
        let stops = &self.route.points[..self.route.len() - 1];
        stops
            .iter()
            .enumerate()
            .map(|(i, point)| Marker {
                label: (i + 1).to_string(),
                info: format!("Position#{}", point.position_number()),
                is_start: i == 0,
                latitude: point.latitude,
                longitude: point.longitude,
            })
            .collect()
    }

    /// Connecting path as a line string, x = longitude and y = latitude
    pub fn to_line_string(&self) -> LineString<f64> {
        self.route
            .points
            .iter()
            .map(|p| (p.longitude, p.latitude))
            .collect::<Vec<_>>()
            .into()
    }

    /// Area covered by the route, for zooming and centering a map
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.to_line_string().bounding_rect()
    }
}

/// A single stop as drawn by a render sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Visiting order, starting at "1" for the start point
    pub label: String,
    pub info: String,
    pub is_start: bool,
    pub latitude: f64,
    pub longitude: f64,
}
