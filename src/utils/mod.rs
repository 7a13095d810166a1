//! Utility modules for curve_interpolation

pub mod visualization;

pub use visualization::{colors, PathStyle, PointStyle, Visualizer};
