//! Common traits shared by the curve solvers

use crate::common::error::CurveResult;
use crate::common::types::{Path2D, Point2D};
use crate::interpolate::curve::sample_curve;
use crate::interpolate::path::{select_shortest, Path};

/// Trait for curve interpolators between two oriented points with a minimum
/// turning radius (Dubins, Reeds-Shepp)
pub trait CurveInterpolator {
    /// Minimum turning radius [m]
    fn radius(&self) -> f64;

    /// Evaluate every path word; infeasible words are `None`.
    ///
    /// The order of the returned candidates is fixed per implementation and
    /// decides ties in `shortest_path`.
    fn all_paths(
        &self,
        start_point: Point2D,
        start_heading: f64,
        end_point: Point2D,
        end_heading: f64,
    ) -> Vec<Option<Path>>;

    /// Shortest feasible path, the first candidate winning on equal length
    fn shortest_path(
        &self,
        start_point: Point2D,
        start_heading: f64,
        end_point: Point2D,
        end_heading: f64,
    ) -> Option<Path> {
        let best = select_shortest(self.all_paths(start_point, start_heading, end_point, end_heading));
        match &best {
            Some(path) => log::debug!("selected {}", path),
            None => log::warn!(
                "no feasible path from ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
                start_point.x,
                start_point.y,
                start_heading,
                end_point.x,
                end_point.y,
                end_heading
            ),
        }
        best
    }

    /// Shortest path together with its sampled polyline
    fn curve(
        &self,
        start_point: Point2D,
        start_heading: f64,
        end_point: Point2D,
        end_heading: f64,
        step_size: f64,
    ) -> CurveResult<Option<(Path, Path2D)>> {
        match self.shortest_path(start_point, start_heading, end_point, end_heading) {
            Some(path) => {
                let points = sample_curve(&path, start_point, start_heading, step_size)?;
                Ok(Some((path, points)))
            }
            None => Ok(None),
        }
    }
}
