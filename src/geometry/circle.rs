//! Circle construction for arc segments.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::common::Point2D;

/// Below this sine of the angle at the first point, three points are treated
/// as collinear
pub const COLLINEAR_EPSILON: f64 = 1e-10;

/// Sense of rotation around a circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    /// Counter-clockwise, center on the left of the heading
    Left,
    /// Clockwise, center on the right of the heading
    Right,
}

impl TurnDirection {
    /// +1 for counter-clockwise, -1 for clockwise
    pub fn sign(self) -> f64 {
        match self {
            TurnDirection::Left => 1.0,
            TurnDirection::Right => -1.0,
        }
    }

    pub fn is_clockwise(self) -> bool {
        self == TurnDirection::Right
    }

    pub fn opposite(self) -> Self {
        match self {
            TurnDirection::Left => TurnDirection::Right,
            TurnDirection::Right => TurnDirection::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circumcircle of three points.
    ///
    /// Solves `x^2 + y^2 + D x + E y + F = 0` by Cramer's rule. Returns `None`
    /// when the points are (nearly) collinear or coincide.
    #[rustfmt::skip]
    pub fn from_three_points(p1: Point2D, p2: Point2D, p3: Point2D) -> Option<Circle> {
        let s1 = p1.x * p1.x + p1.y * p1.y;
        let s2 = p2.x * p2.x + p2.y * p2.y;
        let s3 = p3.x * p3.x + p3.y * p3.y;

        let det = Matrix3::new(
            p1.x, p1.y, 1.0,
            p2.x, p2.y, 1.0,
            p3.x, p3.y, 1.0,
        )
        .determinant();
        // det / (|p2 - p1| |p3 - p1|) is the sine of the angle at p1
        let sides = p1.distance(&p2) * p1.distance(&p3);
        if !det.is_finite() || sides == 0.0 || (det / sides).abs() < COLLINEAR_EPSILON {
            return None;
        }

        let d = -Matrix3::new(
            s1, p1.y, 1.0,
            s2, p2.y, 1.0,
            s3, p3.y, 1.0,
        )
        .determinant()
            / det;
        let e = Matrix3::new(
            s1, p1.x, 1.0,
            s2, p2.x, 1.0,
            s3, p3.x, 1.0,
        )
        .determinant()
            / det;

        let center = Point2D::new(-d / 2.0, -e / 2.0);
        let radius = p1.distance(&center);
        Some(Circle { center, radius })
    }

    /// Circle of `radius` tangent to `heading` at `point`, on the side of `turn`
    pub fn from_tangent(point: Point2D, heading: f64, radius: f64, turn: TurnDirection) -> Circle {
        let center = point.offset(heading + turn.sign() * FRAC_PI_2, radius);
        Circle { center, radius }
    }

    /// Point on the circle at polar `angle` around the center
    pub fn point_at(&self, angle: f64) -> Point2D {
        self.center.offset(angle, self.radius)
    }

    pub fn contains(&self, point: &Point2D, tolerance: f64) -> bool {
        (self.center.distance(point) - self.radius).abs() <= tolerance
    }
}
