// Error types shared by the request API, the algorithms and the adapters

use thiserror::Error as ThisError;

use crate::models::PointIndex;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(
        "Time Interval={time_interval} at Travel Speed={travel_speed} is not enough to visit a position from Position#{}",
        start + 1
    )]
    InsufficientBudget {
        time_interval: f64,
        travel_speed: f64,
        start: PointIndex,
    },
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// True for outcomes that are reported to the user rather than treated as faults.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InsufficientBudget { .. })
    }
}

/// Request problems detected before any route computation starts.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("Please select a start position (index {0} is not a known position).")]
    UnknownStart(PointIndex),
    #[error("Please select a set of positions.")]
    EmptyRequiredSet,
    #[error("Position index {0} is not a known position.")]
    UnknownPosition(PointIndex),
    #[error("Start Position#{} should not be included among the set of positions", .0 + 1)]
    StartInRequiredSet(PointIndex),
    #[error("Time Interval and Travel Speed should be a positive number ({name} = {value}).")]
    NonPositiveParameter { name: &'static str, value: f64 },
}
