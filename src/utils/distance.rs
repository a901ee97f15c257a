// Distance calculation utilities

use crate::models::{Distance, Point};

/// Calculate the Euclidean distance between two points
pub fn euclidean_distance(p1: &Point, p2: &Point) -> Distance {
    ((p1.longitude - p2.longitude).powi(2) + (p1.latitude - p2.latitude).powi(2)).sqrt()
}

/// Cost of moving to `candidate` next plus the eventual return leg to `start`.
///
/// Both the router and the budget scan rank candidates with this score.
pub fn look_ahead_score(current: &Point, candidate: &Point, start: &Point) -> Distance {
    euclidean_distance(current, candidate) + euclidean_distance(candidate, start)
}

/// Position of the smallest value; the first occurrence wins on ties.
///
/// Returns `None` for an empty input.
pub fn argmin<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.into_iter().enumerate() {
        match best {
            Some((_, min)) if value >= min => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}
