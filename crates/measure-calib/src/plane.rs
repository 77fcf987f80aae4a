//! Perspective calibration from a marked quadrilateral of known size.

use log::debug;
use measure_core::{from_homogeneous, to_homogeneous, Mat3, Pt2, Real};
use nalgebra::DMatrix;

use crate::context::{AngleConvention, Calibration, CalibrationError};

/// Guard against points mapping to the horizon (w ≈ 0 after projection).
const MIN_HOMOGENEOUS_W: Real = 1e-12;

/// Relative residual above which a fitted homography is considered not to
/// reproduce its input correspondences.
const MAX_FIT_RESIDUAL: Real = 1e-6;

/// Calibration derived from a plane annotation.
///
/// The user marks the four corners of a rectangle of known real-world size
/// lying in the motion plane; a homography is fitted mapping image space onto
/// that plane. Handles perspective, so distances stay correct anywhere on the
/// plane, not just where the calibration rectangle was marked.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneCalibration {
    homography: Mat3,
    convention: AngleConvention,
}

impl PlaneCalibration {
    /// Fit from the four marked image corners of a world rectangle of size
    /// `width` × `height`.
    ///
    /// Corner order: top-left, top-right, bottom-right, bottom-left. The
    /// calibrated frame is y-up with its origin at the bottom-left corner of
    /// the rectangle.
    pub fn from_quad(image: &[Pt2; 4], width: Real, height: Real) -> Result<Self, CalibrationError> {
        if width <= 0.0 {
            return Err(CalibrationError::NonPositiveLength(width));
        }
        if height <= 0.0 {
            return Err(CalibrationError::NonPositiveLength(height));
        }
        let world = [
            Pt2::new(0.0, height),
            Pt2::new(width, height),
            Pt2::new(width, 0.0),
            Pt2::new(0.0, 0.0),
        ];
        Self::from_correspondences(image, &world)
    }

    /// Fit from arbitrary image/world correspondences (at least four) using
    /// the DLT.
    ///
    /// The correspondences must be consistent with a single homography:
    /// construction fails for degenerate input (e.g. collinear points) where
    /// the fitted mapping cannot reproduce the given points.
    pub fn from_correspondences(image: &[Pt2], world: &[Pt2]) -> Result<Self, CalibrationError> {
        let homography = dlt(image, world)?;
        validate_fit(&homography, image, world)?;
        debug!("fitted image-to-world homography: {homography:?}");
        Ok(Self {
            homography,
            convention: AngleConvention::default(),
        })
    }

    /// Override the angle display convention.
    pub fn with_convention(mut self, convention: AngleConvention) -> Self {
        self.convention = convention;
        self
    }

    /// The fitted image-to-world homography.
    pub fn homography(&self) -> &Mat3 {
        &self.homography
    }
}

impl Calibration for PlaneCalibration {
    fn map_point(&self, p: Pt2) -> Result<Pt2, CalibrationError> {
        let v = self.homography * to_homogeneous(&p);
        if v.z.abs() < MIN_HOMOGENEOUS_W {
            return Err(CalibrationError::UnmappablePoint { x: p.x, y: p.y });
        }
        Ok(from_homogeneous(&v))
    }

    fn convert_angle(&self, angle_deg: Real) -> Real {
        self.convention.apply(angle_deg)
    }
}

/// Estimate H such that `dst ~ H src` from point correspondences.
fn dlt(src: &[Pt2], dst: &[Pt2]) -> Result<Mat3, CalibrationError> {
    let n = src.len();
    if n < 4 || dst.len() != n {
        return Err(CalibrationError::NotEnoughPoints {
            required: 4,
            got: n.min(dst.len()),
        });
    }

    // At least 9 rows, so that for the minimal 4-point case the nullspace
    // vector is present in v_t (nalgebra computes a thin SVD, and an 8x9
    // system would only yield row-space vectors). The padding rows stay zero
    // and do not constrain the solution.
    let mut a = DMatrix::<Real>::zeros((2 * n).max(9), 9);
    for (i, (ps, pd)) in src.iter().zip(dst.iter()).enumerate() {
        let (x, y) = (ps.x, ps.y);
        let (u, v) = (pd.x, pd.y);

        let r0 = 2 * i;
        a[(r0, 0)] = -x;
        a[(r0, 1)] = -y;
        a[(r0, 2)] = -1.0;
        a[(r0, 6)] = u * x;
        a[(r0, 7)] = u * y;
        a[(r0, 8)] = u;

        let r1 = r0 + 1;
        a[(r1, 3)] = -x;
        a[(r1, 4)] = -y;
        a[(r1, 5)] = -1.0;
        a[(r1, 6)] = v * x;
        a[(r1, 7)] = v * y;
        a[(r1, 8)] = v;
    }

    // Solve A h = 0 via SVD (smallest singular value)
    let svd = a.svd(true, true);
    let v_t = svd.v_t.ok_or(CalibrationError::SvdFailed)?;
    let h = v_t.row(v_t.nrows() - 1);

    let mut h_mat = Mat3::zeros();
    for r in 0..3 {
        for c in 0..3 {
            h_mat[(r, c)] = h[3 * r + c];
        }
    }

    // normalise such that H[2,2] = 1
    let scale = h_mat[(2, 2)];
    if scale.abs() > Real::EPSILON {
        h_mat /= scale;
    }

    Ok(h_mat)
}

/// Reject rank-deficient fits and fits that do not map the source points
/// back onto their destinations.
fn validate_fit(h: &Mat3, src: &[Pt2], dst: &[Pt2]) -> Result<(), CalibrationError> {
    if (h / h.norm()).determinant().abs() < 1e-9 {
        return Err(CalibrationError::DegenerateCorrespondences);
    }
    let span = dst.iter().map(|p| p.coords.norm()).fold(1.0, Real::max);
    for (ps, pd) in src.iter().zip(dst.iter()) {
        let v = h * to_homogeneous(ps);
        if v.z.abs() < MIN_HOMOGENEOUS_W {
            return Err(CalibrationError::DegenerateCorrespondences);
        }
        if (from_homogeneous(&v) - pd).norm() > MAX_FIT_RESIDUAL * span {
            return Err(CalibrationError::DegenerateCorrespondences);
        }
    }
    Ok(())
}
