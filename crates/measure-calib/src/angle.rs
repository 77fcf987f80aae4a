//! Angle sources for angular annotations.

use measure_core::{vertex_angle_deg, Pt2, Real};

use crate::context::{Calibration, CalibrationError};

/// Provider of the current calibrated angle of an angular annotation.
///
/// Reading is an instantaneous, side-effect-free observation. The value is
/// the raw calibrated magnitude in degrees, CCW-positive; the final sign and
/// range convention is applied by [`Calibration::convert_angle`], not here.
pub trait AngleSource {
    /// Current calibrated angle reading, in degrees.
    fn calibrated_angle(&self) -> Real;
}

/// A fixed reading, useful for tests and for replaying stored values.
impl AngleSource for Real {
    fn calibrated_angle(&self) -> Real {
        *self
    }
}

/// The angle of a three-point angular annotation, measured in the calibrated
/// plane.
///
/// The origin and both legs are mapped through the calibration context before
/// the angle is taken, so the reading stays correct under perspective
/// calibrations. Mapping faults surface at construction; reads never fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAngle {
    angle_deg: Real,
}

impl VertexAngle {
    /// Measure the annotation with vertex `origin` and leg endpoints `a`, `b`
    /// (all in image space) under the given calibration.
    pub fn from_points<C: Calibration + ?Sized>(
        origin: Pt2,
        a: Pt2,
        b: Pt2,
        calibration: &C,
    ) -> Result<Self, CalibrationError> {
        let o = calibration.map_point(origin)?;
        let a = calibration.map_point(a)?;
        let b = calibration.map_point(b)?;
        Ok(Self {
            angle_deg: vertex_angle_deg(&o, &a, &b),
        })
    }
}

impl AngleSource for VertexAngle {
    fn calibrated_angle(&self) -> Real {
        self.angle_deg
    }
}
