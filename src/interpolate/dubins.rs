// Dubins Path Planner
//
// Shortest forward-only path between two oriented points with a minimum
// turning radius. Closed forms follow Shkel & Lumelsky, "Classification of the
// Dubins set" (2001).

use std::f64::consts::PI;

use crate::common::{validate_radius, CurveInterpolator, CurveResult, Point2D};
use crate::config::CurveConfig;
use crate::interpolate::angle::mod2pi;
use crate::interpolate::path::{words, Path, Steering, WordClass};

/// Start and goal expressed in the radius-scaled frame aligned with the
/// bearing from start to goal. Coincident points have no bearing; the start
/// heading is used instead.
#[derive(Debug, Clone, Copy)]
struct DubinsFrame {
    alpha: f64,
    beta: f64,
    d: f64,
    sa: f64,
    sb: f64,
    ca: f64,
    cb: f64,
    c_ab: f64,
}

impl DubinsFrame {
    fn new(
        start_point: Point2D,
        start_heading: f64,
        end_point: Point2D,
        end_heading: f64,
        radius: f64,
        tol: f64,
    ) -> Self {
        let d = start_point.distance(&end_point) / radius;
        let theta = if d > tol {
            start_point.bearing_to(&end_point)
        } else {
            start_heading
        };
        let alpha = mod2pi(start_heading - theta);
        let beta = mod2pi(end_heading - theta);
        Self {
            alpha,
            beta,
            d,
            sa: alpha.sin(),
            sb: beta.sin(),
            ca: alpha.cos(),
            cb: beta.cos(),
            c_ab: (alpha - beta).cos(),
        }
    }
}

type WordFormula = fn(&DubinsFrame, f64) -> Option<[f64; 3]>;

/// Angle reduced to [0, 2*pi), with values within `tol` of a full turn
/// snapped to zero
fn turn(x: f64, tol: f64) -> f64 {
    let v = mod2pi(x);
    if 2.0 * PI - v <= tol {
        0.0
    } else {
        v
    }
}

fn straight(p_sq: f64, tol: f64) -> Option<f64> {
    if p_sq < -tol {
        None
    } else {
        Some(p_sq.max(0.0).sqrt())
    }
}

fn middle_turn(cos_p: f64, tol: f64) -> Option<f64> {
    if cos_p.abs() > 1.0 + tol {
        None
    } else {
        Some(mod2pi(2.0 * PI - cos_p.clamp(-1.0, 1.0).acos()))
    }
}

fn left_straight_left(f: &DubinsFrame, tol: f64) -> Option<[f64; 3]> {
    let p = straight(2.0 + f.d * f.d - 2.0 * f.c_ab + 2.0 * f.d * (f.sa - f.sb), tol)?;
    let tmp = (f.cb - f.ca).atan2(f.d + f.sa - f.sb);
    Some([turn(tmp - f.alpha, tol), p, turn(f.beta - tmp, tol)])
}

fn right_straight_right(f: &DubinsFrame, tol: f64) -> Option<[f64; 3]> {
    let p = straight(2.0 + f.d * f.d - 2.0 * f.c_ab + 2.0 * f.d * (f.sb - f.sa), tol)?;
    let tmp = (f.ca - f.cb).atan2(f.d - f.sa + f.sb);
    Some([turn(f.alpha - tmp, tol), p, turn(tmp - f.beta, tol)])
}

fn left_straight_right(f: &DubinsFrame, tol: f64) -> Option<[f64; 3]> {
    let p = straight(-2.0 + f.d * f.d + 2.0 * f.c_ab + 2.0 * f.d * (f.sa + f.sb), tol)?;
    let tmp = (-f.ca - f.cb).atan2(f.d + f.sa + f.sb) - (-2.0_f64).atan2(p);
    Some([turn(tmp - f.alpha, tol), p, turn(tmp - f.beta, tol)])
}

fn right_straight_left(f: &DubinsFrame, tol: f64) -> Option<[f64; 3]> {
    let p = straight(-2.0 + f.d * f.d + 2.0 * f.c_ab - 2.0 * f.d * (f.sa + f.sb), tol)?;
    let tmp = (f.ca + f.cb).atan2(f.d - f.sa - f.sb) - (2.0_f64).atan2(p);
    Some([turn(f.alpha - tmp, tol), p, turn(f.beta - tmp, tol)])
}

fn right_left_right(f: &DubinsFrame, tol: f64) -> Option<[f64; 3]> {
    let p = middle_turn(
        (6.0 - f.d * f.d + 2.0 * f.c_ab + 2.0 * f.d * (f.sa - f.sb)) / 8.0,
        tol,
    )?;
    let tmp = (f.ca - f.cb).atan2(f.d - f.sa + f.sb);
    let t = turn(f.alpha - tmp + p / 2.0, tol);
    Some([t, p, turn(f.alpha - f.beta - t + p, tol)])
}

fn left_right_left(f: &DubinsFrame, tol: f64) -> Option<[f64; 3]> {
    let p = middle_turn(
        (6.0 - f.d * f.d + 2.0 * f.c_ab + 2.0 * f.d * (f.sb - f.sa)) / 8.0,
        tol,
    )?;
    let tmp = (f.ca - f.cb).atan2(f.d + f.sa - f.sb);
    let t = turn(-f.alpha - tmp + p / 2.0, tol);
    Some([t, p, turn(f.beta - f.alpha - t + p, tol)])
}

/// Evaluation order, which is also the tie-break order
const DUBINS_WORDS: [(&[Steering], WordClass, WordFormula); 6] = [
    (words::LSL, WordClass::CSC, left_straight_left),
    (words::RSR, WordClass::CSC, right_straight_right),
    (words::LSR, WordClass::CSC, left_straight_right),
    (words::RSL, WordClass::CSC, right_straight_left),
    (words::RLR, WordClass::CCC, right_left_right),
    (words::LRL, WordClass::CCC, left_right_left),
];

/// Dubins curve interpolator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dubins {
    radius: f64,
    tolerance: f64,
}

impl Dubins {
    /// Create a solver for the given minimum turning radius [m]
    pub fn new(radius: f64) -> CurveResult<Self> {
        Self::with_config(radius, &CurveConfig::default())
    }

    pub fn with_config(radius: f64, config: &CurveConfig) -> CurveResult<Self> {
        config.validate()?;
        Ok(Self {
            radius: validate_radius(radius)?,
            tolerance: config.tolerance,
        })
    }
}

impl CurveInterpolator for Dubins {
    fn radius(&self) -> f64 {
        self.radius
    }

    /// One entry per word in LSL, RSR, LSR, RSL, RLR, LRL order
    fn all_paths(
        &self,
        start_point: Point2D,
        start_heading: f64,
        end_point: Point2D,
        end_heading: f64,
    ) -> Vec<Option<Path>> {
        if !(start_point.is_finite()
            && end_point.is_finite()
            && start_heading.is_finite()
            && end_heading.is_finite())
        {
            log::warn!("Dubins query with non-finite pose, no path evaluated");
            return vec![None; DUBINS_WORDS.len()];
        }

        let frame = DubinsFrame::new(
            start_point,
            start_heading,
            end_point,
            end_heading,
            self.radius,
            self.tolerance,
        );
        DUBINS_WORDS
            .iter()
            .map(|&(word, class, formula)| {
                formula(&frame, self.tolerance).map(|segments| {
                    let path = Path::forward(segments.to_vec(), word, class, self.radius);
                    log::trace!("Dubins candidate {}", path);
                    path
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CurveError;
    use crate::interpolate::angle::wrap_to_pi;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_reaches(path: &Path, start: Point2D, start_heading: f64, end: Point2D, end_heading: f64) {
        let pose = path.end_pose(start, start_heading);
        assert!(
            pose.position().distance(&end) < 1e-6,
            "{} ends at ({}, {}) instead of ({}, {})",
            path,
            pose.x,
            pose.y,
            end.x,
            end.y
        );
        assert!(wrap_to_pi(pose.yaw - end_heading).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        assert_eq!(Dubins::new(0.0), Err(CurveError::InvalidRadius(0.0)));
        assert!(Dubins::new(-2.0).is_err());
        assert!(Dubins::new(1.0).is_ok());
    }

    #[test]
    fn test_straight_ahead() {
        let dubins = Dubins::new(5.0).unwrap();
        let path = dubins
            .shortest_path(Point2D::origin(), 0.0, Point2D::new(10.0, 0.0), 0.0)
            .unwrap();
        assert_eq!(path.word(), "LSL");
        assert!(path.segments[0].abs() < 1e-12);
        assert!((path.segments[1] - 2.0).abs() < 1e-12);
        assert!(path.segments[2].abs() < 1e-12);
        assert!((path.length - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_semicircle_u_turn() {
        let dubins = Dubins::new(5.0).unwrap();
        let end = Point2D::new(0.0, 10.0);
        let path = dubins.shortest_path(Point2D::origin(), 0.0, end, PI).unwrap();
        assert!((path.length - 5.0 * PI).abs() < 1e-9);
        assert_eq!(path.steering[0], Steering::Left);
        assert!((path.segments[0] - PI).abs() < 1e-9);
        assert_reaches(&path, Point2D::origin(), 0.0, end, PI);
    }

    #[test]
    fn test_same_pose_is_zero_length() {
        let dubins = Dubins::new(2.0).unwrap();
        let start = Point2D::new(1.0, -3.0);
        let path = dubins.shortest_path(start, 0.7, start, 0.7).unwrap();
        assert!(path.length.abs() < 1e-9);
        assert!(path.segments.iter().all(|s| s.abs() < 1e-9));
    }

    #[test]
    fn test_point_behind_needs_loop() {
        let dubins = Dubins::new(1.0).unwrap();
        let path = dubins
            .shortest_path(Point2D::origin(), 0.0, Point2D::new(-2.0, 0.0), 0.0)
            .unwrap();
        assert!((path.length - (2.0 * PI + 2.0)).abs() < 1e-9);
        assert!(path.is_forward_only());
    }

    #[test]
    fn test_all_paths_has_six_entries() {
        let dubins = Dubins::new(1.0).unwrap();
        let paths = dubins.all_paths(Point2D::origin(), 0.0, Point2D::new(0.0, 0.0), PI);
        assert_eq!(paths.len(), 6);
        // goal on top of the start with reversed heading rules out LSR and RSL
        assert!(paths[2].is_none());
        assert!(paths[3].is_none());
    }

    #[test]
    fn test_coincident_points_reach_goal() {
        let dubins = Dubins::new(1.5).unwrap();
        let start = Point2D::new(2.0, 2.0);
        for path in dubins.all_paths(start, 0.4, start, 2.9).iter().flatten() {
            assert_reaches(path, start, 0.4, start, 2.9);
        }
    }

    #[test]
    fn test_non_finite_input_returns_none() {
        let dubins = Dubins::new(1.0).unwrap();
        let path = dubins.shortest_path(Point2D::new(f64::NAN, 0.0), 0.0, Point2D::origin(), 0.0);
        assert!(path.is_none());
    }

    #[test]
    fn test_random_queries_reach_goal() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let radius = rng.gen_range(0.5..6.0);
            let dubins = Dubins::new(radius).unwrap();
            let start = Point2D::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
            let end = Point2D::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
            let (sh, eh) = (rng.gen_range(-7.0..7.0), rng.gen_range(-7.0..7.0));

            let candidates = dubins.all_paths(start, sh, end, eh);
            for path in candidates.iter().flatten() {
                assert_reaches(path, start, sh, end, eh);
                let expected: f64 = path.segments.iter().map(|s| s.abs()).sum::<f64>() * radius;
                assert!((path.length - expected).abs() < 1e-9);
                for (steering, &s) in path.steering.iter().zip(&path.segments) {
                    assert!(s >= 0.0);
                    if *steering != Steering::Straight {
                        assert!(s < 2.0 * PI);
                    }
                }
            }

            let shortest = dubins.shortest_path(start, sh, end, eh).unwrap();
            assert!(candidates.iter().flatten().all(|p| shortest.length <= p.length));
        }
    }
}
