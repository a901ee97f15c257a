use crate::algorithms::nearest_neighbor::NearestNeighborRouter;
use crate::algorithms::RouteBuilder;
use crate::error::{Error, Result, ValidationError};
use crate::models::{Budget, Distance, Point, PositionSet, RequiredSet, RouteResult};
use crate::utils::distance::{euclidean_distance, look_ahead_score};

/// Direction the budget scan is currently allowed to move in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// Start is the lowest index: only ever move up
    Ascending,
    /// Start is the highest index: only ever move down
    Descending,
    /// Both neighbours are offered and the look-ahead score picks one
    Bidirectional,
    /// The lower end was reached during a bidirectional scan
    LockedUp,
    /// The upper end was reached during a bidirectional scan
    LockedDown,
}

/// Frontier cursors over position slots. Each cursor holds the last slot
/// offered on its side.
#[derive(Debug, Clone)]
struct Traversal {
    state: TraversalState,
    up: usize,
    down: usize,
    last_slot: usize,
}

impl Traversal {
    fn new(start_slot: usize, positions: &PositionSet) -> Self {
        let last_slot = positions.len() - 1;
        let state = if start_slot == 0 {
            TraversalState::Ascending
        } else if start_slot == last_slot {
            TraversalState::Descending
        } else {
            TraversalState::Bidirectional
        };

        Self {
            state,
            up: start_slot,
            down: start_slot,
            last_slot,
        }
    }

    fn step_up(&mut self) -> Option<usize> {
        (self.up < self.last_slot).then(|| {
            self.up += 1;
            self.up
        })
    }

    fn step_down(&mut self) -> Option<usize> {
        (self.down > 0).then(|| {
            self.down -= 1;
            self.down
        })
    }

    /// Slot of the next candidate, or `None` once the reachable direction is exhausted
    fn next_candidate(
        &mut self,
        positions: &PositionSet,
        current: &Point,
        start: &Point,
    ) -> Option<usize> {
        match self.state {
            TraversalState::Ascending | TraversalState::LockedUp => self.step_up(),
            TraversalState::Descending | TraversalState::LockedDown => self.step_down(),
            TraversalState::Bidirectional => {
                let up_point = positions.at(self.up + 1)?;
                let down_point = positions.at(self.down.checked_sub(1)?)?;

                let up_score = look_ahead_score(current, up_point, start);
                let down_score = look_ahead_score(current, down_point, start);
                log::trace!("scan: up score {up_score} vs down score {down_score}");

                // Exact ties go up
                if up_score <= down_score {
                    let slot = self.step_up()?;
                    if slot == self.last_slot {
                        self.state = TraversalState::LockedDown;
                        log::debug!("scan: upper end reached, continuing downwards");
                    }
                    Some(slot)
                } else {
                    let slot = self.step_down()?;
                    if slot == 0 {
                        self.state = TraversalState::LockedUp;
                        log::debug!("scan: lower end reached, continuing upwards");
                    }
                    Some(slot)
                }
            }
        }
    }
}

/// Outcome of the budget scan before the final ordering
#[derive(Debug, Clone)]
pub struct Selection {
    /// Accepted points in acceptance order
    pub accepted: RequiredSet,
    /// Distance along the scan order up to the last accepted point
    pub distance_travelled: Distance,
    pub max_distance: Distance,
    /// State the scan finished in
    pub final_state: TraversalState,
}

/// Selects the points reachable within a budget by walking outwards from the
/// start along the index order, then orders them with a [`RouteBuilder`].
#[derive(Debug, Clone, Default)]
pub struct RangeSelector<R = NearestNeighborRouter> {
    router: R,
}

impl RangeSelector<NearestNeighborRouter> {
    pub fn new() -> Self {
        Self::with_router(NearestNeighborRouter::new())
    }
}

impl<R: RouteBuilder> RangeSelector<R> {
    pub fn with_router(router: R) -> Self {
        Self { router }
    }

    /// Route over every point that fits in the budget.
    ///
    /// The scan order only decides which points fit; the visiting order is
    /// recomputed by the router over the accepted points.
    pub fn select_within_budget(
        &self,
        start: &Point,
        positions: &PositionSet,
        budget: &Budget,
    ) -> Result<RouteResult> {
        let selection = self.select(start, positions, budget)?;
        let route = self.router.build_route(start, selection.accepted);
        let result = RouteResult::from_route(route);

        log::info!(
            "budget route: start=Position#{} max_distance={} visited={} total_distance={}",
            start.position_number(),
            selection.max_distance,
            result.visited_count,
            result.total_distance
        );
        Ok(result)
    }

    /// Runs only the budget scan.
    ///
    /// Fails with [`Error::InsufficientBudget`] when not even the first
    /// candidate fits.
    pub fn select(
        &self,
        start: &Point,
        positions: &PositionSet,
        budget: &Budget,
    ) -> Result<Selection> {
        let start_slot = positions
            .slot_of(start.index)
            .ok_or(ValidationError::UnknownStart(start.index))?;
        let max_distance = budget.max_distance();

        let mut traversal = Traversal::new(start_slot, positions);
        log::debug!(
            "scan: start=Position#{} state={:?} max_distance={max_distance}",
            start.position_number(),
            traversal.state
        );

        let mut accepted = RequiredSet::new();
        let mut current = *start;
        let mut distance_travelled = 0.0;

        for _ in 0..positions.len() {
            let Some(slot) = traversal.next_candidate(positions, &current, start) else {
                break;
            };
            let Some(candidate) = positions.at(slot).copied() else {
                break;
            };

            let travelled = distance_travelled + euclidean_distance(&current, &candidate);
            let return_leg = euclidean_distance(&candidate, start);
            if travelled + return_leg < max_distance {
                log::trace!(
                    "scan: accepted Position#{} travelled={travelled} return_leg={return_leg}",
                    candidate.position_number()
                );
                distance_travelled = travelled;
                accepted.insert(candidate);
                current = candidate;
            } else {
                log::debug!(
                    "scan: Position#{} exceeds budget ({} >= {max_distance})",
                    candidate.position_number(),
                    travelled + return_leg
                );
                break;
            }
        }

        if accepted.is_empty() {
            return Err(Error::InsufficientBudget {
                time_interval: budget.time_interval,
                travel_speed: budget.travel_speed,
                start: start.index,
            });
        }

        Ok(Selection {
            accepted,
            distance_travelled,
            max_distance,
            final_state: traversal.state,
        })
    }
}
