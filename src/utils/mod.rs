pub mod distance;
pub mod render;
pub mod tsp_file;
