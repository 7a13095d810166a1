//! Angle helpers shared by the path solvers.

use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;

/// Reduce an angle to [0, 2*pi)
pub fn mod2pi(x: f64) -> f64 {
    let v = x.rem_euclid(TWO_PI);
    // rem_euclid can round up to exactly 2*pi for tiny negative inputs
    if v >= TWO_PI {
        0.0
    } else {
        v
    }
}

/// Regulate an angle to [-pi, pi]
pub fn wrap_to_pi(x: f64) -> f64 {
    let v = x % TWO_PI;
    if v < -PI {
        v + TWO_PI
    } else if v > PI {
        v - TWO_PI
    } else {
        v
    }
}

/// Cartesian to polar coordinates, returned as (r, theta)
pub fn polar(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod2pi_range() {
        assert!((mod2pi(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert!((mod2pi(5.0 * PI) - PI).abs() < 1e-12);
        assert_eq!(mod2pi(0.0), 0.0);
        for i in -50..50 {
            let v = mod2pi(i as f64 * 0.37);
            assert!((0.0..TWO_PI).contains(&v));
        }
    }

    #[test]
    fn test_mod2pi_tiny_negative() {
        let v = mod2pi(-1e-18);
        assert!(v < TWO_PI);
    }

    #[test]
    fn test_wrap_to_pi() {
        assert!((wrap_to_pi(0.0) - 0.0).abs() < 1e-12);
        assert!((wrap_to_pi(3.0 * PI) - PI).abs() < 1e-12);
        assert!((wrap_to_pi(-3.0 * PI) + PI).abs() < 1e-12);
        assert!((wrap_to_pi(1.5 * PI) + 0.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_polar() {
        let (r, theta) = polar(0.0, 2.0);
        assert!((r - 2.0).abs() < 1e-12);
        assert!((theta - PI / 2.0).abs() < 1e-12);
    }
}
