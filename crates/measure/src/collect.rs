//! Measurement collection.
//!
//! The single translation boundary between image-space annotation geometry
//! and the calibrated, display-ready values a user sees or exports. Each
//! operation is a stateless, single-pass transformation: calibrate, measure,
//! format. Faults from the calibration context propagate unchanged; no
//! record is produced on failure.

use measure_calib::{AngleSource, Calibration, CalibrationError};
use measure_core::{geometry, Pt2};

use crate::format::NumberFormat;
use crate::records::{MeasuredAngle, MeasuredDistance, MeasuredPosition};

/// Collect a point annotation as a calibrated position record.
///
/// The image-space point is mapped through the calibration context; both
/// coordinates are stored numerically and formatted independently.
///
/// # Example
/// ```
/// use measure::{collect_position, LineCalibration, NumberFormat, Pt2};
///
/// let calib = LineCalibration::identity();
/// let record = collect_position("P1", Pt2::new(10.0, 20.0), &calib, &NumberFormat::default())?;
/// assert_eq!(record.x_display, "10.00");
/// # Ok::<(), measure::CalibrationError>(())
/// ```
pub fn collect_position<C: Calibration + ?Sized>(
    name: &str,
    p: Pt2,
    calibration: &C,
    format: &NumberFormat,
) -> Result<MeasuredPosition, CalibrationError> {
    let coords = calibration.map_point(p)?;
    Ok(MeasuredPosition {
        name: name.to_owned(),
        x: coords.x,
        y: coords.y,
        x_display: format.format_fixed(coords.x),
        y_display: format.format_fixed(coords.y),
    })
}

/// Collect a line annotation as a calibrated distance record.
///
/// Both endpoints are calibrated individually and the distance is measured
/// between the calibrated points. Calibration may be non-uniform (perspective
/// planes), so the distance must be taken in the calibrated plane rather than
/// scaled from a pixel-space length.
pub fn collect_distance<C: Calibration + ?Sized>(
    name: &str,
    p1: Pt2,
    p2: Pt2,
    calibration: &C,
    format: &NumberFormat,
) -> Result<MeasuredDistance, CalibrationError> {
    let a = calibration.map_point(p1)?;
    let b = calibration.map_point(p2)?;
    let value = geometry::distance(&a, &b);
    Ok(MeasuredDistance {
        name: name.to_owned(),
        value,
        value_display: format.format_fixed(value),
    })
}

/// Collect an angular annotation as a converted angle record.
///
/// Reads the source's raw calibrated angle and passes it through the
/// calibration context's display-convention conversion (sign, range).
pub fn collect_angle<C, S>(
    name: &str,
    source: &S,
    calibration: &C,
    format: &NumberFormat,
) -> MeasuredAngle
where
    C: Calibration + ?Sized,
    S: AngleSource + ?Sized,
{
    let value = calibration.convert_angle(source.calibrated_angle());
    MeasuredAngle {
        name: name.to_owned(),
        value,
        value_display: format.format_fixed(value),
    }
}
