//! Common types, traits, and error definitions for curve_interpolation
//!
//! This module provides the building blocks shared by the Dubins and
//! Reeds-Shepp solvers.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
