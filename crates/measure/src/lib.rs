//! Calibrated, display-ready measurement records for annotation geometry.
//!
//! This crate is the public boundary of the annotation measurement toolbox.
//! It turns raw image-space measurements captured by an annotation overlay —
//! a point, a pair of points, an angle — into named records holding both the
//! calibrated numeric value and a locale-formatted display string, ready for
//! export or rendering.
//!
//! ```
//! use measure::{collect_distance, LineCalibration, NumberFormat, Pt2};
//!
//! # fn main() -> Result<(), measure::CalibrationError> {
//! let calib = LineCalibration::identity();
//! let fmt = NumberFormat::default();
//!
//! let d = collect_distance("D1", Pt2::new(0.0, 0.0), Pt2::new(3.0, 4.0), &calib, &fmt)?;
//! assert_eq!(d.value, 5.0);
//! assert_eq!(d.value_display, "5.00");
//! # Ok(())
//! # }
//! ```
//!
//! Calibration contexts and angle sources live in [`measure_calib`] and are
//! re-exported here; the collector itself defines no error kinds and
//! propagates calibration faults unchanged.

/// The three collector operations.
pub mod collect;
/// Locale-aware fixed-point number formatting.
pub mod format;
/// Measurement output records.
pub mod records;

pub use collect::{collect_angle, collect_distance, collect_position};
pub use format::NumberFormat;
pub use records::{MeasuredAngle, MeasuredDistance, MeasuredPosition};

// Collaborator contracts and implementations.
pub use measure_calib::{
    AngleConvention, AngleSource, Calibration, CalibrationError, LineCalibration,
    PlaneCalibration, VertexAngle,
};
pub use measure_core::{Pt2, Real};
