// Models module - exports all model types

mod budget;
mod point;
mod position_set;
mod required_set;
mod route;

// Re-export model types
pub use self::budget::Budget;
pub use self::point::Point;
pub use self::position_set::PositionSet;
pub use self::required_set::RequiredSet;
pub use self::route::{Marker, Route, RouteResult};

// Common type aliases for improved code readability
pub type PointIndex = usize;
pub type Distance = f64;
