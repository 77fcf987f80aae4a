//! Core math and geometry primitives for the annotation measurement toolbox.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Pt2`, ...),
//! - planar geometry used to measure annotations in the calibrated plane
//!   ([`distance`], [`vertex_angle_deg`]).

/// Linear algebra type aliases and helpers.
pub mod math;
/// Planar geometry for annotation measurements.
pub mod geometry;

pub use geometry::*;
pub use math::*;
