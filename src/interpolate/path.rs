//! Symbolic path description produced by the solvers.

use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::common::{Point2D, Pose2D};
use crate::geometry::TurnDirection;

/// Motion primitive of one path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Steering {
    Left,
    Straight,
    Right,
}

impl Steering {
    pub fn letter(self) -> char {
        match self {
            Steering::Left => 'L',
            Steering::Straight => 'S',
            Steering::Right => 'R',
        }
    }

    /// Turning sense of the primitive, `None` for straight segments
    pub fn turn_direction(self) -> Option<TurnDirection> {
        match self {
            Steering::Left => Some(TurnDirection::Left),
            Steering::Straight => None,
            Steering::Right => Some(TurnDirection::Right),
        }
    }

    /// Mirror image across the heading axis
    pub fn reflect(self) -> Self {
        match self {
            Steering::Left => Steering::Right,
            Steering::Straight => Steering::Straight,
            Steering::Right => Steering::Left,
        }
    }
}

/// Path words as steering sequences
pub mod words {
    use super::Steering::{self, Left as L, Right as R, Straight as S};

    pub const LSL: &[Steering] = &[L, S, L];
    pub const RSR: &[Steering] = &[R, S, R];
    pub const LSR: &[Steering] = &[L, S, R];
    pub const RSL: &[Steering] = &[R, S, L];
    pub const LRL: &[Steering] = &[L, R, L];
    pub const RLR: &[Steering] = &[R, L, R];
    pub const LRLR: &[Steering] = &[L, R, L, R];
    pub const RLRL: &[Steering] = &[R, L, R, L];
    pub const LRSL: &[Steering] = &[L, R, S, L];
    pub const RLSR: &[Steering] = &[R, L, S, R];
    pub const LRSR: &[Steering] = &[L, R, S, R];
    pub const RLSL: &[Steering] = &[R, L, S, L];
    pub const LSRL: &[Steering] = &[L, S, R, L];
    pub const RSLR: &[Steering] = &[R, S, L, R];
    pub const RSRL: &[Steering] = &[R, S, R, L];
    pub const LSLR: &[Steering] = &[L, S, L, R];
    pub const LRSLR: &[Steering] = &[L, R, S, L, R];
    pub const RLSRL: &[Steering] = &[R, L, S, R, L];
}

/// Travel direction of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a signed segment value; zero counts as forward
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Forward => '+',
            Direction::Backward => '-',
        }
    }
}

/// Structural family of a path word (C = circular arc, S = straight)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    CSC,
    CCC,
    CCCC,
    CCSC,
    CCSCC,
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordClass::CSC => "CSC",
            WordClass::CCC => "CCC",
            WordClass::CCCC => "CCCC",
            WordClass::CCSC => "CCSC",
            WordClass::CCSCC => "CCSCC",
        };
        f.write_str(name)
    }
}

/// A solved Dubins or Reeds-Shepp path.
///
/// `segments` are absolute magnitudes normalized by the turning radius
/// (radians for turns, length / radius for straights). Travel direction lives
/// in the parallel `directions` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub segments: Vec<f64>,
    pub steering: Vec<Steering>,
    pub directions: Vec<Direction>,
    pub class: WordClass,
    pub radius: f64,
    /// radius * sum(|segments|)
    pub length: f64,
}

impl Path {
    pub fn new(
        segments: Vec<f64>,
        steering: Vec<Steering>,
        directions: Vec<Direction>,
        class: WordClass,
        radius: f64,
    ) -> Self {
        debug_assert_eq!(segments.len(), steering.len());
        debug_assert_eq!(segments.len(), directions.len());
        let segments: Vec<f64> = segments.iter().map(|s| s.abs()).collect();
        let length = segments.iter().sum::<f64>() * radius;
        Self {
            segments,
            steering,
            directions,
            class,
            radius,
            length,
        }
    }

    /// Forward-only path, as produced by the Dubins solver
    pub fn forward(segments: Vec<f64>, steering: &[Steering], class: WordClass, radius: f64) -> Self {
        let directions = vec![Direction::Forward; segments.len()];
        Self::new(segments, steering.to_vec(), directions, class, radius)
    }

    /// Path from signed normalized values; negative values travel backward
    pub fn from_signed(signed: &[f64], steering: &[Steering], class: WordClass, radius: f64) -> Self {
        let directions = signed.iter().map(|&v| Direction::of(v)).collect();
        Self::new(signed.to_vec(), steering.to_vec(), directions, class, radius)
    }

    /// Word letters, e.g. "LSL"
    pub fn word(&self) -> String {
        self.steering.iter().map(|s| s.letter()).collect()
    }

    /// Segment lengths in physical units (arc length for turns)
    pub fn scaled_segments(&self) -> Vec<f64> {
        self.segments.iter().map(|s| s * self.radius).collect()
    }

    /// Normalized segment values, negative where the segment is driven backward
    pub fn signed_segments(&self) -> Vec<f64> {
        self.segments
            .iter()
            .zip(&self.directions)
            .map(|(s, d)| s * d.sign())
            .collect()
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn is_forward_only(&self) -> bool {
        self.directions.iter().all(|&d| d == Direction::Forward)
    }

    /// Pose reached after driving the whole path from the given start
    pub fn end_pose(&self, start_point: Point2D, start_heading: f64) -> Pose2D {
        crate::interpolate::curve::trace_end_pose(self, start_point, start_heading)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (steering, direction) in self.steering.iter().zip(&self.directions) {
            write!(f, "{}{}", steering.letter(), direction.symbol())?;
        }
        write!(f, " ({}, length {:.3})", self.class, self.length)
    }
}

/// Shortest feasible candidate; the first one wins on equal length
pub fn select_shortest<I>(candidates: I) -> Option<Path>
where
    I: IntoIterator<Item = Option<Path>>,
{
    candidates
        .into_iter()
        .flatten()
        .filter(|path| path.length.is_finite())
        .min_by_key(|path| OrderedFloat(path.length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_length_is_scaled_sum() {
        let path = Path::forward(vec![0.5, 2.0, 1.0], words::LSR, WordClass::CSC, 3.0);
        assert!((path.length - 10.5).abs() < 1e-12);
        assert_eq!(path.word(), "LSR");
        assert_eq!(path.scaled_segments(), vec![1.5, 6.0, 3.0]);
        assert!(path.is_forward_only());
    }

    #[test]
    fn test_path_from_signed() {
        let path = Path::from_signed(&[0.3, -1.0, -0.0], words::LRL, WordClass::CCC, 2.0);
        assert_eq!(path.segments, vec![0.3, 1.0, 0.0]);
        assert_eq!(
            path.directions,
            vec![Direction::Forward, Direction::Backward, Direction::Forward]
        );
        assert!((path.length - 2.6).abs() < 1e-12);
        assert_eq!(path.signed_segments(), vec![0.3, -1.0, 0.0]);
        assert_eq!(format!("{}", path), "L+R-L+ (CCC, length 2.600)");
    }

    #[test]
    fn test_select_shortest_first_wins() {
        let a = Path::forward(vec![1.0, 1.0, 0.0], words::LSL, WordClass::CSC, 1.0);
        let b = Path::forward(vec![0.0, 1.0, 1.0], words::RSR, WordClass::CSC, 1.0);
        let c = Path::forward(vec![3.0, 1.0, 1.0], words::LSR, WordClass::CSC, 1.0);
        let best = select_shortest(vec![None, Some(c), Some(a.clone()), None, Some(b)]).unwrap();
        assert_eq!(best, a);
    }

    #[test]
    fn test_select_shortest_all_infeasible() {
        assert!(select_shortest(vec![None, None]).is_none());
    }

    #[test]
    fn test_steering_reflect() {
        assert_eq!(Steering::Left.reflect(), Steering::Right);
        assert_eq!(Steering::Straight.reflect(), Steering::Straight);
        assert_eq!(Steering::Straight.turn_direction(), None);
    }
}
