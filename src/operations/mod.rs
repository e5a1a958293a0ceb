pub mod engine;
pub mod grid_snap;
