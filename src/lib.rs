//! Greedy closed-route construction over geographic point sets.
//! Routes either visit a chosen set of points or every point that fits a travel budget.

// Public modules
pub mod algorithms;
pub mod error;
pub mod finder;
pub mod logging;
pub mod models;
pub mod options;
pub mod utils;

// Re-exports for convenience
pub use algorithms::nearest_neighbor::NearestNeighborRouter;
pub use algorithms::range_selector::{RangeSelector, Selection, TraversalState};
pub use algorithms::RouteBuilder;
pub use error::{Error, Result, ValidationError};
pub use finder::{PathFinder, SweepEntry};
pub use models::{Budget, Marker, Point, PointIndex, PositionSet, RequiredSet, Route, RouteResult};
pub use options::LogOptions;
pub use utils::render::{JsonSink, LogSink, RenderSink, SvgSink};
pub use utils::tsp_file::{PositionProvider, TspFile};
