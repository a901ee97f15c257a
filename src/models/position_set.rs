// Position set model: the read-only collection of every loaded point

use crate::error::{Error, Result};
use crate::models::{Point, PointIndex};

/// Every known point, ordered by index.
///
/// Built once from a [`PositionProvider`](crate::utils::tsp_file::PositionProvider)
/// and shared read-only by all requests. The first element carries the global
/// minimum index and the last one the global maximum index.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSet {
    points: Vec<Point>,
}

impl PositionSet {
    /// Creates a position set, sorting by index.
    ///
    /// Fails on an empty input, duplicate indices or non-finite coordinates.
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid_data("position set is empty"));
        }

        if let Some(point) = points.iter().find(|p| !p.is_finite()) {
            return Err(Error::invalid_data(format!(
                "Position#{} has non-finite coordinates",
                point.position_number()
            )));
        }

        points.sort_by_key(|p| p.index);
        if let Some(pair) = points.windows(2).find(|w| w[0].index == w[1].index) {
            return Err(Error::invalid_data(format!(
                "duplicate Position#{}",
                pair[0].position_number()
            )));
        }

        Ok(Self { points })
    }

    /// Looks up a point by its index
    pub fn get(&self, index: PointIndex) -> Option<&Point> {
        self.slot_of(index).map(|slot| &self.points[slot])
    }

    pub fn contains(&self, index: PointIndex) -> bool {
        self.slot_of(index).is_some()
    }

    pub fn min_index(&self) -> PointIndex {
        self.points[0].index
    }

    pub fn max_index(&self) -> PointIndex {
        self.points[self.points.len() - 1].index
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed set; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Position of `index` in load order; neighbouring slots hold the
    /// immediately smaller and greater indices.
    pub(crate) fn slot_of(&self, index: PointIndex) -> Option<usize> {
        self.points.binary_search_by_key(&index, |p| p.index).ok()
    }

    pub(crate) fn at(&self, slot: usize) -> Option<&Point> {
        self.points.get(slot)
    }
}

impl<'a> IntoIterator for &'a PositionSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
