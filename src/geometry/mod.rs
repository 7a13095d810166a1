//! Geometric primitives shared by the curve solvers
//!
//! - `circle`: circumcircle and tangent-circle construction
//! - `sampling`: lazy arc and straight-line samplers

pub mod circle;
pub mod sampling;

pub use circle::{Circle, TurnDirection, COLLINEAR_EPSILON};
pub use sampling::{ArcSampler, LineSampler, MAX_SAMPLES};
