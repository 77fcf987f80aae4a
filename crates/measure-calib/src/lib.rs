//! Calibration contexts for the annotation measurement toolbox.
//!
//! A calibration context maps image-space coordinates (pixels on a video
//! frame) into calibrated real-world units, and converts raw calibrated
//! angles into the display convention the user picked. Two contexts are
//! provided:
//!
//! - [`LineCalibration`]: uniform scale derived from a marked segment of
//!   known real-world length,
//! - [`PlaneCalibration`]: perspective (homography) mapping derived from a
//!   marked quadrilateral of known real-world size.
//!
//! Angular annotations are read through [`AngleSource`]; [`VertexAngle`]
//! measures a three-point annotation in the calibrated plane.

/// The `Calibration` trait, angle conventions and calibration errors.
pub mod context;
/// Uniform-scale calibration from a segment of known length.
pub mod line;
/// Perspective calibration from a quadrilateral of known size.
pub mod plane;
/// Angle sources for angular annotations.
pub mod angle;

pub use angle::{AngleSource, VertexAngle};
pub use context::{AngleConvention, Calibration, CalibrationError};
pub use line::LineCalibration;
pub use plane::PlaneCalibration;
