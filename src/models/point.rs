// Point model representing a geographic position loaded from the point source

use serde::{Deserialize, Serialize};

use crate::models::{Distance, PointIndex};
use crate::utils::distance::euclidean_distance;

/// A position with a stable identifier and latitude/longitude-like coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Zero-based identifier assigned at load time (`id - 1` in the source file)
    pub index: PointIndex,
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    /// Creates a new point with the given index and coordinates
    pub fn new(index: PointIndex, latitude: f64, longitude: f64) -> Self {
        Self {
            index,
            latitude,
            longitude,
        }
    }

    /// Calculates the Euclidean distance between two points
    pub fn distance_to(&self, other: &Point) -> Distance {
        euclidean_distance(self, other)
    }

    /// 1-based number shown to users, e.g. `Position#3`
    pub fn position_number(&self) -> usize {
        self.index + 1
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}
