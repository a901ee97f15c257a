// Required set model: the points a route has to visit

use indexmap::IndexMap;

use crate::models::{Point, PointIndex};

/// Points that must be visited, keyed by index.
///
/// Iteration follows insertion order, and removal keeps the order of the
/// remaining points. The router breaks score ties on this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequiredSet {
    points: IndexMap<PointIndex, Point>,
}

impl RequiredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point; returns false if its index was already present
    pub fn insert(&mut self, point: Point) -> bool {
        if self.points.contains_key(&point.index) {
            return false;
        }
        self.points.insert(point.index, point);
        true
    }

    pub fn contains(&self, index: PointIndex) -> bool {
        self.points.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in their current order
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.values()
    }

    pub fn indices(&self) -> impl Iterator<Item = PointIndex> + '_ {
        self.points.keys().copied()
    }

    /// Removes the point at `position` (in iteration order), shifting later points down
    pub(crate) fn remove_at(&mut self, position: usize) -> Option<Point> {
        self.points
            .shift_remove_index(position)
            .map(|(_, point)| point)
    }
}

impl FromIterator<Point> for RequiredSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        let mut set = RequiredSet::new();
        for point in iter {
            set.insert(point);
        }
        set
    }
}
