//! Common types used throughout curve_interpolation

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Point reached by moving `distance` along `heading`
    pub fn offset(&self, heading: f64, distance: f64) -> Point2D {
        Point2D::new(
            self.x + distance * heading.cos(),
            self.y + distance * heading.sin(),
        )
    }

    /// Bearing from this point to `other` [rad]
    pub fn bearing_to(&self, other: &Point2D) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 2D pose (position + orientation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn from_position(position: Point2D, yaw: f64) -> Self {
        Self { x: position.x, y: position.y, yaw }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, yaw: 0.0 }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Normalize yaw to [-pi, pi]
    pub fn normalize_yaw(&mut self) {
        self.yaw = crate::interpolate::angle::wrap_to_pi(self.yaw);
    }
}

/// Path represented as a sequence of 2D points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path2D {
    pub points: Vec<Point2D>,
}

impl Path2D {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&Point2D> {
        self.points.last()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Sum of the distances between consecutive points
    pub fn total_length(&self) -> f64 {
        self.points
            .iter()
            .tuple_windows()
            .map(|(a, b)| a.distance(b))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point2d_offset_and_bearing() {
        let p = Point2D::new(1.0, 1.0);
        let q = p.offset(PI / 2.0, 2.0);
        assert!((q.x - 1.0).abs() < 1e-10);
        assert!((q.y - 3.0).abs() < 1e-10);
        assert!((p.bearing_to(&q) - PI / 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_pose2d_normalize_yaw() {
        let mut pose = Pose2D::new(0.0, 0.0, 4.0);
        pose.normalize_yaw();
        assert!(pose.yaw >= -PI && pose.yaw <= PI);
        assert!((pose.yaw - (4.0 - 2.0 * PI)).abs() < 1e-10);
    }

    #[test]
    fn test_path2d_total_length() {
        let path = Path2D::from_points(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
        ]);
        assert!((path.total_length() - 2.0).abs() < 1e-10);
        assert_eq!(path.x_coords(), vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_path2d_empty_length() {
        let path = Path2D::new();
        assert!(path.is_empty());
        assert_eq!(path.total_length(), 0.0);
    }
}
