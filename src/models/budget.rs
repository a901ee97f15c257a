// Budget model for range-limited route requests

use crate::error::ValidationError;
use crate::models::Distance;

/// Available time and travel speed for a budget request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    pub time_interval: f64,
    pub travel_speed: f64,
}

impl Budget {
    /// Creates a budget; both values must be finite and strictly positive
    pub fn new(time_interval: f64, travel_speed: f64) -> Result<Self, ValidationError> {
        check_positive("time_interval", time_interval)?;
        check_positive("travel_speed", travel_speed)?;
        Ok(Self {
            time_interval,
            travel_speed,
        })
    }

    /// Total distance the route may cover, start and return legs included
    pub fn max_distance(&self) -> Distance {
        self.travel_speed * self.time_interval
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ValidationError> {
    // NaN fails the comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveParameter { name, value })
    }
}
