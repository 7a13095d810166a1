//! Dubins and Reeds-Shepp path solvers and curve sampling

pub mod angle;
pub mod curve;
pub mod dubins;
pub mod path;
pub mod reeds_shepp;

pub use curve::{sample_curve, sample_curve_with, sample_waypoints, Waypoint};
pub use dubins::Dubins;
pub use path::{select_shortest, words, Direction, Path, Steering, WordClass};
pub use reeds_shepp::ReedsShepp;
