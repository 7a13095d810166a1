//! Conversion of a solved path into sampled geometry.
//!
//! The walk carries an explicit running (point, heading) cursor: every segment
//! is anchored at the exact end pose of the previous one.

use std::f64::consts::FRAC_PI_2;

use itertools::izip;
use serde::{Deserialize, Serialize};

use crate::common::{validate_step_size, CurveResult, Path2D, Point2D, Pose2D};
use crate::config::CurveConfig;
use crate::geometry::{ArcSampler, Circle, LineSampler};
use crate::interpolate::path::{Direction, Path, Steering};

/// Sampled pose along a curve together with the travel direction there
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub pose: Pose2D,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy)]
struct Cursor {
    point: Point2D,
    heading: f64,
}

/// Concrete geometry of one segment anchored at a cursor
#[derive(Debug, Clone, Copy)]
enum SegmentGeometry {
    Arc {
        circle: Circle,
        start_angle: f64,
        turn_angle: f64,
        clockwise: bool,
    },
    Line {
        heading: f64,
        length: f64,
    },
}

impl SegmentGeometry {
    /// `magnitude` is normalized by `radius`; backward travel flips the arc's
    /// rotation sense and the straight's direction along the heading.
    fn anchor(
        cursor: Cursor,
        steering: Steering,
        magnitude: f64,
        direction: Direction,
        radius: f64,
    ) -> Self {
        match steering.turn_direction() {
            Some(turn) => {
                let circle = Circle::from_tangent(cursor.point, cursor.heading, radius, turn);
                let start_angle = cursor.heading - turn.sign() * FRAC_PI_2;
                let clockwise = turn.is_clockwise() != (direction == Direction::Backward);
                SegmentGeometry::Arc {
                    circle,
                    start_angle,
                    turn_angle: magnitude,
                    clockwise,
                }
            }
            None => SegmentGeometry::Line {
                heading: cursor.heading,
                length: magnitude * radius * direction.sign(),
            },
        }
    }

    /// +1 when the heading increases along the segment, -1 when it decreases
    fn rotation_sign(&self) -> f64 {
        match self {
            SegmentGeometry::Arc { clockwise: true, .. } => -1.0,
            SegmentGeometry::Arc { clockwise: false, .. } => 1.0,
            SegmentGeometry::Line { .. } => 0.0,
        }
    }

    fn end(&self, cursor: Cursor) -> Cursor {
        match *self {
            SegmentGeometry::Arc {
                circle,
                start_angle,
                turn_angle,
                ..
            } => {
                let swept = self.rotation_sign() * turn_angle;
                Cursor {
                    point: circle.point_at(start_angle + swept),
                    heading: cursor.heading + swept,
                }
            }
            SegmentGeometry::Line { heading, length } => Cursor {
                point: cursor.point.offset(heading, length),
                heading: cursor.heading,
            },
        }
    }

    /// Half-open samples of the segment with the vehicle heading at each
    fn samples(&self, cursor: Cursor, step_size: f64) -> CurveResult<Vec<Pose2D>> {
        let poses = match *self {
            SegmentGeometry::Arc {
                circle,
                start_angle,
                turn_angle,
                clockwise,
            } => {
                let heading_step = self.rotation_sign() * step_size / circle.radius;
                ArcSampler::new(circle, start_angle, turn_angle, clockwise, step_size)?
                    .enumerate()
                    .map(|(k, p)| Pose2D::from_position(p, cursor.heading + k as f64 * heading_step))
                    .collect()
            }
            SegmentGeometry::Line { heading, length } => {
                LineSampler::new(cursor.point, heading, length, step_size)?
                    .map(|p| Pose2D::from_position(p, heading))
                    .collect()
            }
        };
        Ok(poses)
    }
}

fn segment_geometries(
    path: &Path,
    start_point: Point2D,
    start_heading: f64,
) -> Vec<(Cursor, SegmentGeometry, Direction)> {
    let mut cursor = Cursor {
        point: start_point,
        heading: start_heading,
    };
    let mut geometries = Vec::with_capacity(path.num_segments());
    for (&steering, &magnitude, &direction) in
        izip!(&path.steering, &path.segments, &path.directions)
    {
        let geometry = SegmentGeometry::anchor(cursor, steering, magnitude, direction, path.radius);
        geometries.push((cursor, geometry, direction));
        cursor = geometry.end(cursor);
    }
    geometries
}

/// Exact pose at the end of `path` when driven from the given start
pub fn trace_end_pose(path: &Path, start_point: Point2D, start_heading: f64) -> Pose2D {
    let end = segment_geometries(path, start_point, start_heading)
        .last()
        .map(|(cursor, geometry, _)| geometry.end(*cursor))
        .unwrap_or(Cursor {
            point: start_point,
            heading: start_heading,
        });
    Pose2D::from_position(end.point, end.heading)
}

/// Sample `path` into oriented waypoints spaced `step_size` apart in arc length.
///
/// Every segment is sampled half-open and the exact end pose is appended, so
/// the result is never empty and always finishes on the path's end.
pub fn sample_waypoints(
    path: &Path,
    start_point: Point2D,
    start_heading: f64,
    step_size: f64,
) -> CurveResult<Vec<Waypoint>> {
    let step_size = validate_step_size(step_size)?;
    let mut waypoints = Vec::new();
    let mut last_direction = Direction::Forward;
    for (cursor, geometry, direction) in segment_geometries(path, start_point, start_heading) {
        waypoints.extend(
            geometry
                .samples(cursor, step_size)?
                .into_iter()
                .map(|pose| Waypoint { pose, direction }),
        );
        last_direction = direction;
    }
    waypoints.push(Waypoint {
        pose: trace_end_pose(path, start_point, start_heading),
        direction: last_direction,
    });
    Ok(waypoints)
}

/// Sample `path` into a polyline starting at `start_point` / `start_heading`
pub fn sample_curve(
    path: &Path,
    start_point: Point2D,
    start_heading: f64,
    step_size: f64,
) -> CurveResult<Path2D> {
    let waypoints = sample_waypoints(path, start_point, start_heading, step_size)?;
    Ok(Path2D::from_points(
        waypoints.iter().map(|w| w.pose.position()).collect(),
    ))
}

/// `sample_curve` with the step taken from a configuration
pub fn sample_curve_with(
    path: &Path,
    start_point: Point2D,
    start_heading: f64,
    config: &CurveConfig,
) -> CurveResult<Path2D> {
    sample_curve(path, start_point, start_heading, config.step_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CurveError;
    use crate::interpolate::path::{words, WordClass};
    use std::f64::consts::PI;

    #[test]
    fn test_straight_path_samples() {
        let path = Path::forward(vec![0.0, 2.0, 0.0], words::LSL, WordClass::CSC, 5.0);
        let curve = sample_curve(&path, Point2D::origin(), 0.0, 1.0).unwrap();
        // ten half-open samples plus the exact end point
        assert_eq!(curve.len(), 11);
        let last = curve.last().unwrap();
        assert!((last.x - 10.0).abs() < 1e-12);
        assert!(last.y.abs() < 1e-12);
        for (i, p) in curve.points.iter().enumerate() {
            assert!((p.x - i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_semicircle_end_pose() {
        let path = Path::forward(vec![PI, 0.0, 0.0], words::LSL, WordClass::CSC, 5.0);
        let end = path.end_pose(Point2D::origin(), 0.0);
        assert!(end.x.abs() < 1e-9);
        assert!((end.y - 10.0).abs() < 1e-9);
        assert!((end.yaw - PI).abs() < 1e-12);
    }

    #[test]
    fn test_backward_left_turn_reverses_rotation() {
        // backing up on a left circle: heading decreases, vehicle moves to -x
        let path = Path::from_signed(&[-PI / 2.0], &[Steering::Left], WordClass::CCC, 1.0);
        let end = path.end_pose(Point2D::origin(), 0.0);
        assert!((end.x + 1.0).abs() < 1e-12);
        assert!((end.y - 1.0).abs() < 1e-12);
        assert!((end.yaw + PI / 2.0).abs() < 1e-12);

        let waypoints = sample_waypoints(&path, Point2D::origin(), 0.0, 0.1).unwrap();
        assert!(waypoints.iter().all(|w| w.direction == Direction::Backward));
        assert!(waypoints[1].pose.x < 0.0);
        assert!(waypoints[1].pose.yaw < 0.0);
    }

    #[test]
    fn test_backward_straight() {
        let path = Path::from_signed(&[0.0, -2.0, 0.0], words::LSL, WordClass::CSC, 1.0);
        let curve = sample_curve(&path, Point2D::origin(), 0.0, 0.5).unwrap();
        assert!(curve.points.iter().all(|p| p.x <= 1e-12 && p.y.abs() < 1e-12));
        assert!((curve.last().unwrap().x + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_path_yields_single_point() {
        let path = Path::forward(vec![0.0, 0.0, 0.0], words::LSL, WordClass::CSC, 1.0);
        let curve = sample_curve(&path, Point2D::new(3.0, 4.0), 1.0, 0.1).unwrap();
        assert_eq!(curve.len(), 1);
        assert!(curve.points[0].distance(&Point2D::new(3.0, 4.0)) < 1e-12);
    }

    #[test]
    fn test_waypoint_headings_follow_arc() {
        let path = Path::forward(vec![PI / 2.0, 0.0, 0.0], words::RSR, WordClass::CSC, 2.0);
        let waypoints = sample_waypoints(&path, Point2D::origin(), 0.0, 0.1).unwrap();
        let circle_center = Point2D::new(0.0, -2.0);
        for w in &waypoints {
            assert!((w.pose.position().distance(&circle_center) - 2.0).abs() < 1e-9);
            // tangent heading is perpendicular to the radius vector
            let radial = circle_center.bearing_to(&w.pose.position());
            assert!(((radial - w.pose.yaw).cos()).abs() < 1e-9);
        }
        assert!((waypoints.last().unwrap().pose.yaw + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_step_size() {
        let path = Path::forward(vec![0.0, 1.0, 0.0], words::LSL, WordClass::CSC, 1.0);
        let result = sample_curve(&path, Point2D::origin(), 0.0, 0.0);
        assert!(matches!(result, Err(CurveError::InvalidStepSize(_))));
    }

    #[test]
    fn test_tiny_step_size_is_error() {
        let path = Path::forward(vec![PI / 2.0, 1.0, 0.0], words::LSL, WordClass::CSC, 1.0);
        let result = sample_curve(&path, Point2D::origin(), 0.0, 1e-300);
        assert!(matches!(result, Err(CurveError::TooManySamples { .. })));
    }

    #[test]
    fn test_sample_curve_with_config() {
        let path = Path::forward(vec![0.0, 1.0, 0.0], words::LSL, WordClass::CSC, 1.0);
        let config = CurveConfig::default().with_step_size(0.25);
        let curve = sample_curve_with(&path, Point2D::origin(), 0.0, &config).unwrap();
        assert_eq!(curve.len(), 5);
    }
}
