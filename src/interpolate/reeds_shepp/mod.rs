// Reeds-Shepp Path Planner
//
// Shortest path between two oriented points for a car that drives both
// forward and backward with a minimum turning radius. Eight base formulas
// expand by symmetry into 44 candidate words.

pub mod formulas;
pub mod symmetry;

use crate::common::{validate_radius, CurveInterpolator, CurveResult, Point2D};
use crate::config::CurveConfig;
use crate::interpolate::path::Path;

pub use symmetry::{Frame, ParameterMatrix, Symmetry, WordFamily, FAMILIES};

/// Number of candidates returned by `all_paths`
pub const NUM_CANDIDATES: usize = FAMILIES.len() * Symmetry::ALL.len();

/// Goal pose relative to the start, rotated into the start heading and
/// scaled by `radius`
fn local_goal(
    start_point: Point2D,
    start_heading: f64,
    end_point: Point2D,
    end_heading: f64,
    radius: f64,
) -> (f64, f64, f64) {
    let dx = (end_point.x - start_point.x) / radius;
    let dy = (end_point.y - start_point.y) / radius;
    let (s, c) = start_heading.sin_cos();
    (c * dx + s * dy, -s * dx + c * dy, end_heading - start_heading)
}

/// Reeds-Shepp curve interpolator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReedsShepp {
    radius: f64,
    tolerance: f64,
}

impl ReedsShepp {
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

impl CurveInterpolator for ReedsShepp {
    fn radius(&self) -> f64 {
        self.radius
    }

    /// `NUM_CANDIDATES` entries, grouped by family in `FAMILIES` order and by
    /// `Symmetry::ALL` within a family
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
            log::warn!("Reeds-Shepp query with non-finite pose, no path evaluated");
            return vec![None; NUM_CANDIDATES];
        }

        let (x, y, phi) = local_goal(start_point, start_heading, end_point, end_heading, self.radius);
        let mut candidates = Vec::with_capacity(NUM_CANDIDATES);
        for family in FAMILIES.iter() {
            for &symmetry in Symmetry::ALL.iter() {
                let candidate = family
                    .solve(x, y, phi, symmetry, self.tolerance)
                    .map(|signed| Path::from_signed(&signed, family.word(symmetry), family.class, self.radius));
                if let Some(path) = &candidate {
                    log::trace!("Reeds-Shepp candidate {} ({:?})", path, symmetry);
                }
                candidates.push(candidate);
            }
        }
        candidates
    }
}
