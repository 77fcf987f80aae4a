//! The calibration context contract.

use measure_core::{Pt2, Real};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalibrationError {
    #[error("calibration length must be positive, got {0}")]
    NonPositiveLength(Real),
    #[error("need at least {required} point correspondences, got {got}")]
    NotEnoughPoints { required: usize, got: usize },
    #[error("svd failed")]
    SvdFailed,
    #[error("degenerate correspondences: the fitted mapping does not reproduce the input points")]
    DegenerateCorrespondences,
    #[error("point ({x}, {y}) lies on the horizon and has no finite calibrated image")]
    UnmappablePoint { x: Real, y: Real },
}

/// Direction and range convention for displayed angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleConvention {
    /// Report angles in (-180, 180] when true, in [0, 360) otherwise.
    pub signed: bool,
    /// The positive rotation direction is counter-clockwise when true.
    pub counter_clockwise: bool,
}

impl Default for AngleConvention {
    fn default() -> Self {
        Self {
            signed: true,
            counter_clockwise: true,
        }
    }
}

impl AngleConvention {
    /// Convert a raw calibrated angle (degrees, CCW-positive) to this convention.
    pub fn apply(&self, angle_deg: Real) -> Real {
        let oriented = if self.counter_clockwise {
            angle_deg
        } else {
            -angle_deg
        };
        if self.signed {
            // wrap into (-180, 180]
            let mut a = oriented % 360.0;
            if a > 180.0 {
                a -= 360.0;
            } else if a <= -180.0 {
                a += 360.0;
            }
            a
        } else {
            oriented.rem_euclid(360.0)
        }
    }
}

/// Mapping from image space to calibrated real-world space.
///
/// Implementations must be deterministic given their current state, and must
/// not mutate the input point ([`Pt2`] is `Copy`, so this holds by
/// construction). Concurrent read access is safe for any `Sync`
/// implementation; no interior mutability is involved.
pub trait Calibration {
    /// Map an image-space point into calibrated real-world coordinates.
    fn map_point(&self, p: Pt2) -> Result<Pt2, CalibrationError>;

    /// Convert a raw calibrated angle (degrees, CCW-positive) into the
    /// display convention of this context. Pure numeric transform.
    fn convert_angle(&self, angle_deg: Real) -> Real;
}
