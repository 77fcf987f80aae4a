//! Uniform-scale calibration from a marked segment of known length.

use measure_core::{Pt2, Real};

use crate::context::{AngleConvention, Calibration, CalibrationError};

/// Calibration derived from a single line annotation.
///
/// The user marks a segment spanning `pixel_length` pixels that is known to
/// cover `real_length` real-world units; every coordinate is then scaled
/// uniformly. Suitable when the motion plane is parallel to the image plane.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCalibration {
    scale: Real,
    origin: Pt2,
    convention: AngleConvention,
}

impl LineCalibration {
    /// Build from the pixel length of the marked segment and its known
    /// real-world length. Fails if either length is not positive.
    pub fn new(pixel_length: Real, real_length: Real) -> Result<Self, CalibrationError> {
        if pixel_length <= 0.0 {
            return Err(CalibrationError::NonPositiveLength(pixel_length));
        }
        if real_length <= 0.0 {
            return Err(CalibrationError::NonPositiveLength(real_length));
        }
        Ok(Self {
            scale: real_length / pixel_length,
            origin: Pt2::origin(),
            convention: AngleConvention::default(),
        })
    }

    /// The 1:1 mapping: one pixel is one real-world unit.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            origin: Pt2::origin(),
            convention: AngleConvention::default(),
        }
    }

    /// Place the calibrated origin at the given image-space point.
    pub fn with_origin(mut self, origin: Pt2) -> Self {
        self.origin = origin;
        self
    }

    /// Override the angle display convention.
    pub fn with_convention(mut self, convention: AngleConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Real-world units per pixel.
    pub fn scale(&self) -> Real {
        self.scale
    }
}

impl Calibration for LineCalibration {
    fn map_point(&self, p: Pt2) -> Result<Pt2, CalibrationError> {
        Ok(Pt2::new(
            self.scale * (p.x - self.origin.x),
            self.scale * (p.y - self.origin.y),
        ))
    }

    fn convert_angle(&self, angle_deg: Real) -> Real {
        self.convention.apply(angle_deg)
    }
}
