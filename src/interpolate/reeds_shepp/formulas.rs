// Reeds-Shepp closed-form word formulas
//
// Each formula solves one base word for a goal (x, y, phi) given in the
// radius-normalized start frame and returns the signed parameters (t, u, v)
// in the word's own order. A negative parameter means the segment is driven
// backward. Formulas follow Reeds & Shepp, "Optimal paths for a car that goes
// both forwards and backwards" (1990), section 8.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::interpolate::angle::{polar, wrap_to_pi};

/// Base word formula: `(x, y, phi, tolerance) -> Some([t, u, v])` when feasible
pub type WordFormula = fn(f64, f64, f64, f64) -> Option<[f64; 3]>;

/// Outer arc angles of the C|C C|C style words that share a middle angle `u`
fn tau_omega(u: f64, v: f64, xi: f64, eta: f64, phi: f64) -> (f64, f64) {
    let delta = wrap_to_pi(u - v);
    let a = u.sin() - delta.sin();
    let b = u.cos() - delta.cos() - 1.0;
    let t1 = (eta * a - xi * b).atan2(xi * a + eta * b);
    let t2 = 2.0 * (delta.cos() - v.cos() - u.cos()) + 3.0;
    let tau = if t2 < 0.0 {
        wrap_to_pi(t1 + PI)
    } else {
        wrap_to_pi(t1)
    };
    let omega = wrap_to_pi(tau - u + v - phi);
    (tau, omega)
}

/// L+ S+ L+
pub fn left_straight_left(x: f64, y: f64, phi: f64, tol: f64) -> Option<[f64; 3]> {
    let (u, t) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if t < -tol {
        return None;
    }
    let v = wrap_to_pi(phi - t);
    (v >= -tol).then_some([t, u, v])
}

/// L+ S+ R+
pub fn left_straight_right(x: f64, y: f64, phi: f64, tol: f64) -> Option<[f64; 3]> {
    let (u1, t1) = polar(x + phi.sin(), y - 1.0 - phi.cos());
    let u1 = u1 * u1;
    if u1 < 4.0 {
        return None;
    }
    let u = (u1 - 4.0).sqrt();
    let t = wrap_to_pi(t1 + 2.0_f64.atan2(u));
    let v = wrap_to_pi(t - phi);
    (t >= -tol && v >= -tol).then_some([t, u, v])
}

/// L+ R- L
pub fn left_x_right_left(x: f64, y: f64, phi: f64, tol: f64) -> Option<[f64; 3]> {
    let (u1, theta) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if u1 > 4.0 {
        return None;
    }
    let u = -2.0 * (u1 / 4.0).asin();
    let t = wrap_to_pi(theta + u / 2.0 + PI);
    let v = wrap_to_pi(phi - t + u);
    (t >= -tol && u <= tol).then_some([t, u, v])
}

/// L+ R+ L- R-
pub fn left_right_x_left_right(x: f64, y: f64, phi: f64, tol: f64) -> Option<[f64; 3]> {
    let xi = x + phi.sin();
    let eta = y - 1.0 - phi.cos();
    let rho = (2.0 + xi.hypot(eta)) / 4.0;
    if rho > 1.0 {
        return None;
    }
    let u = rho.acos();
    let (t, v) = tau_omega(u, -u, xi, eta, phi);
    (t >= -tol && v <= tol).then_some([t, u, v])
}

/// L+ R- L- R+
pub fn left_x_right_left_x_right(x: f64, y: f64, phi: f64, tol: f64) -> Option<[f64; 3]> {
    let xi = x + phi.sin();
    let eta = y - 1.0 - phi.cos();
    let rho = (20.0 - xi * xi - eta * eta) / 16.0;
    if !(0.0..=1.0).contains(&rho) {
        return None;
    }
    let u = -rho.acos();
    if u < -FRAC_PI_2 {
        return None;
    }
    let (t, v) = tau_omega(u, u, xi, eta, phi);
    (t >= -tol && v >= -tol).then_some([t, u, v])
}

/// L+ R-(pi/2) S- L-
pub fn left_x_right90_straight_left(x: f64, y: f64, phi: f64, tol: f64) -> Option<[f64; 3]> {
    let (rho, theta) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if rho < 2.0 {
        return None;
    }
    let r = (rho * rho - 4.0).sqrt();
    let u = 2.0 - r;
    let t = wrap_to_pi(theta + r.atan2(-2.0));
    let v = wrap_to_pi(phi - FRAC_PI_2 - t);
    (t >= -tol && u <= tol && v <= tol).then_some([t, u, v])
}

/// L+ R-(pi/2) S- R-
pub fn left_x_right90_straight_right(x: f64, y: f64, phi: f64, tol: f64) -> Option<[f64; 3]> {
    let xi = x + phi.sin();
    let eta = y - 1.0 - phi.cos();
    let (rho, theta) = polar(-eta, xi);
    if rho < 2.0 {
        return None;
    }
    let t = theta;
    let u = 2.0 - rho;
    let v = wrap_to_pi(t + FRAC_PI_2 - phi);
    (t >= -tol && u <= tol && v <= tol).then_some([t, u, v])
}

/// L+ R-(pi/2) S- L-(pi/2) R+
pub fn left_x_right90_straight_left90_x_right(
    x: f64,
    y: f64,
    phi: f64,
    tol: f64,
) -> Option<[f64; 3]> {
    let xi = x + phi.sin();
    let eta = y - 1.0 - phi.cos();
    let (rho, _) = polar(xi, eta);
    if rho < 2.0 {
        return None;
    }
    let u = 4.0 - (rho * rho - 4.0).sqrt();
    if u > tol {
        return None;
    }
    let t = wrap_to_pi(((4.0 - u) * xi - 2.0 * eta).atan2(-2.0 * xi + (u - 4.0) * eta));
    let v = wrap_to_pi(t - phi);
    (t >= -tol && v >= -tol).then_some([t, u, v])
}
