//! Lazy samplers for circular arcs and straight segments.
//!
//! Both samplers are half-open: they start exactly at the segment start and
//! stop before the segment end, so consecutive segments can be chained without
//! duplicating the junction point. They are plain `Clone` iterators over their
//! inputs and can be restarted by cloning.

use crate::common::{validate_step_size, CurveError, CurveResult, Point2D};
use crate::geometry::circle::Circle;

/// Upper bound on the samples a single segment may produce
pub const MAX_SAMPLES: usize = 1_000_000;

/// Number of half-open steps of size `step` that fit in `extent`
fn step_count(extent: f64, step: f64) -> CurveResult<usize> {
    if !(extent.is_finite() && extent > 0.0) {
        return Ok(0);
    }
    let count = (extent / step).ceil();
    // also catches an infinite ratio from an underflowing step
    if count > MAX_SAMPLES as f64 {
        return Err(CurveError::TooManySamples {
            requested: count,
            limit: MAX_SAMPLES,
        });
    }
    Ok(count as usize)
}

/// Points along a circular arc at (approximately) uniform arc-length spacing
#[derive(Debug, Clone)]
pub struct ArcSampler {
    circle: Circle,
    start_angle: f64,
    angle_step: f64,
    count: usize,
    index: usize,
}

impl ArcSampler {
    /// # Arguments
    /// * `circle` - Circle the arc lies on
    /// * `start_angle` - Polar angle of the first point around the center [rad]
    /// * `turn_angle` - Total swept angle, >= 0 [rad]
    /// * `clockwise` - Rotation sense
    /// * `step_size` - Arc length between samples [m]
    pub fn new(
        circle: Circle,
        start_angle: f64,
        turn_angle: f64,
        clockwise: bool,
        step_size: f64,
    ) -> CurveResult<Self> {
        let step_size = validate_step_size(step_size)?;
        let angle_step = step_size / circle.radius;
        let count = step_count(turn_angle, angle_step)?;
        let angle_step = if clockwise { -angle_step } else { angle_step };
        Ok(Self {
            circle,
            start_angle,
            angle_step,
            count,
            index: 0,
        })
    }
}

impl Iterator for ArcSampler {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        if self.index >= self.count {
            return None;
        }
        let angle = self.start_angle + self.index as f64 * self.angle_step;
        self.index += 1;
        Some(self.circle.point_at(angle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArcSampler {}

/// Points along a straight segment, parameterized by arc length only
#[derive(Debug, Clone)]
pub struct LineSampler {
    start: Point2D,
    heading: f64,
    step: f64,
    count: usize,
    index: usize,
}

impl LineSampler {
    /// A negative `length` walks backward along `heading`.
    pub fn new(start: Point2D, heading: f64, length: f64, step_size: f64) -> CurveResult<Self> {
        let step_size = validate_step_size(step_size)?;
        let count = step_count(length.abs(), step_size)?;
        let step = if length < 0.0 { -step_size } else { step_size };
        Ok(Self {
            start,
            heading,
            step,
            count,
            index: 0,
        })
    }
}

impl Iterator for LineSampler {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        if self.index >= self.count {
            return None;
        }
        let s = self.index as f64 * self.step;
        self.index += 1;
        Some(self.start.offset(self.heading, s))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineSampler {}
