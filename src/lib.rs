//! curve_interpolation - shortest Dubins and Reeds-Shepp curves
//!
//! Closed-form solvers for the shortest path between two oriented points
//! under a minimum turning radius, plus sampling of the solved path into a
//! polyline.

// Core modules
pub mod common;
pub mod config;
pub mod geometry;
pub mod utils;

// Algorithm modules
pub mod interpolate;

// Re-export common types for convenience
pub use common::{CurveError, CurveInterpolator, CurveResult, Path2D, Point2D, Pose2D};
pub use config::CurveConfig;
pub use interpolate::{Direction, Dubins, Path, ReedsShepp, Steering, WordClass};

/// Shortest forward-only path; `Ok(None)` when no word is feasible
pub fn shortest_dubins_path(
    start_point: Point2D,
    start_heading: f64,
    end_point: Point2D,
    end_heading: f64,
    radius: f64,
) -> CurveResult<Option<Path>> {
    Ok(Dubins::new(radius)?.shortest_path(start_point, start_heading, end_point, end_heading))
}

/// Shortest path allowing reverse segments; `Ok(None)` when no word is feasible
pub fn shortest_reeds_shepp_path(
    start_point: Point2D,
    start_heading: f64,
    end_point: Point2D,
    end_heading: f64,
    radius: f64,
) -> CurveResult<Option<Path>> {
    Ok(ReedsShepp::new(radius)?.shortest_path(start_point, start_heading, end_point, end_heading))
}

pub fn all_dubins_paths(
    start_point: Point2D,
    start_heading: f64,
    end_point: Point2D,
    end_heading: f64,
    radius: f64,
) -> CurveResult<Vec<Option<Path>>> {
    Ok(Dubins::new(radius)?.all_paths(start_point, start_heading, end_point, end_heading))
}

pub fn all_reeds_shepp_paths(
    start_point: Point2D,
    start_heading: f64,
    end_point: Point2D,
    end_heading: f64,
    radius: f64,
) -> CurveResult<Vec<Option<Path>>> {
    Ok(ReedsShepp::new(radius)?.all_paths(start_point, start_heading, end_point, end_heading))
}

/// Sample `path` into a polyline starting at the given pose
pub fn sample_curve(
    path: &Path,
    start_point: Point2D,
    start_heading: f64,
    step_size: f64,
) -> CurveResult<Path2D> {
    interpolate::sample_curve(path, start_point, start_heading, step_size)
}
