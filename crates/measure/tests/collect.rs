//! End-to-end collection scenarios over the public API.

use measure::{
    collect_angle, collect_distance, collect_position, AngleConvention, Calibration,
    CalibrationError, LineCalibration, NumberFormat, PlaneCalibration, Pt2, Real, VertexAngle,
};

/// Calibration context whose mapping always fails, for fault propagation.
struct BrokenCalibration;

impl Calibration for BrokenCalibration {
    fn map_point(&self, p: Pt2) -> Result<Pt2, CalibrationError> {
        Err(CalibrationError::UnmappablePoint { x: p.x, y: p.y })
    }

    fn convert_angle(&self, angle_deg: Real) -> Real {
        angle_deg
    }
}

#[test]
fn position_under_identity_calibration() {
    let calib = LineCalibration::identity();
    let record =
        collect_position("P1", Pt2::new(10.0, 20.0), &calib, &NumberFormat::default()).unwrap();

    assert_eq!(record.name, "P1");
    assert_eq!(record.x, 10.0);
    assert_eq!(record.y, 20.0);
    assert_eq!(record.x_display, "10.00");
    assert_eq!(record.y_display, "20.00");
}

#[test]
fn position_numeric_fields_match_the_mapping_exactly() {
    let calib = LineCalibration::new(3.0, 1.0).unwrap();
    let p = Pt2::new(10.0, 20.0);
    let mapped = calib.map_point(p).unwrap();
    let record = collect_position("P", p, &calib, &NumberFormat::default()).unwrap();

    assert_eq!(record.x, mapped.x);
    assert_eq!(record.y, mapped.y);
}

#[test]
fn pythagorean_distance_under_identity_calibration() {
    let calib = LineCalibration::identity();
    let record = collect_distance(
        "D1",
        Pt2::new(0.0, 0.0),
        Pt2::new(3.0, 4.0),
        &calib,
        &NumberFormat::default(),
    )
    .unwrap();

    assert_eq!(record.name, "D1");
    assert_eq!(record.value, 5.0);
    assert_eq!(record.value_display, "5.00");
}

#[test]
fn distance_is_symmetric_and_non_negative() {
    let calib = LineCalibration::new(50.0, 2.0).unwrap();
    let fmt = NumberFormat::default();
    let a = Pt2::new(12.0, -7.0);
    let b = Pt2::new(-3.0, 41.0);

    let ab = collect_distance("d", a, b, &calib, &fmt).unwrap();
    let ba = collect_distance("d", b, a, &calib, &fmt).unwrap();

    assert_eq!(ab.value, ba.value);
    assert!(ab.value >= 0.0);
}

#[test]
fn distance_is_measured_in_the_calibrated_plane() {
    // Tilted view of a 4 x 3 rectangle: the diagonal of the rectangle must
    // come out as 5 even though the pixel-space diagonal says otherwise.
    let image = [
        Pt2::new(120.0, 80.0),
        Pt2::new(280.0, 80.0),
        Pt2::new(320.0, 220.0),
        Pt2::new(80.0, 220.0),
    ];
    let calib = PlaneCalibration::from_quad(&image, 4.0, 3.0).unwrap();
    let record =
        collect_distance("diag", image[0], image[2], &calib, &NumberFormat::default()).unwrap();

    assert!((record.value - 5.0).abs() < 1e-8);
    assert_eq!(record.value_display, "5.00");
}

#[test]
fn fixed_angle_reading_under_identity_conversion() {
    let calib = LineCalibration::identity();
    let source: Real = 45.0;
    let record = collect_angle("A1", &source, &calib, &NumberFormat::default());

    assert_eq!(record.name, "A1");
    assert_eq!(record.value, 45.0);
    assert_eq!(record.value_display, "45.00");
}

#[test]
fn angle_conversion_applies_the_display_convention() {
    let cw = LineCalibration::identity().with_convention(AngleConvention {
        signed: false,
        counter_clockwise: false,
    });
    let source: Real = 90.0;
    let record = collect_angle("A", &source, &cw, &NumberFormat::default());

    assert_eq!(record.value, 270.0);
    assert_eq!(record.value_display, "270.00");
}

#[test]
fn vertex_angle_annotation_end_to_end() {
    let calib = LineCalibration::identity();
    let angle = VertexAngle::from_points(
        Pt2::new(0.0, 0.0),
        Pt2::new(2.0, 0.0),
        Pt2::new(0.0, 3.0),
        &calib,
    )
    .unwrap();
    let record = collect_angle("knee", &angle, &calib, &NumberFormat::default());

    assert_eq!(record.value, 90.0);
    assert_eq!(record.value_display, "90.00");
}

#[test]
fn non_finite_angle_reading_is_reported_not_aborted() {
    let calib = LineCalibration::identity();
    let source: Real = Real::NAN;
    let record = collect_angle("A", &source, &calib, &NumberFormat::default());

    assert!(record.value.is_nan());
    assert_eq!(record.value_display, "NaN");
}

#[test]
fn name_is_passed_through_verbatim() {
    let calib = LineCalibration::identity();
    let fmt = NumberFormat::default();
    for name in ["", "P 1", "semi;colon", "näme", "12.34"] {
        let record = collect_position(name, Pt2::new(1.0, 1.0), &calib, &fmt).unwrap();
        assert_eq!(record.name, name);
    }
}

#[test]
fn locale_formatting_only_changes_separators() {
    let calib = LineCalibration::identity();
    let fmt = NumberFormat::new(',').with_grouping('.');
    let record = collect_position("P", Pt2::new(1234.5, 0.125), &calib, &fmt).unwrap();

    assert_eq!(record.x, 1234.5);
    assert_eq!(record.x_display, "1.234,50");
    assert_eq!(record.y_display, "0,12");
}

#[test]
fn mapping_fault_propagates_without_a_record() {
    let fmt = NumberFormat::default();
    let p = Pt2::new(1.0, 2.0);

    let err = collect_position("P", p, &BrokenCalibration, &fmt).unwrap_err();
    assert_eq!(err, CalibrationError::UnmappablePoint { x: 1.0, y: 2.0 });

    let err = collect_distance("D", p, Pt2::new(3.0, 4.0), &BrokenCalibration, &fmt).unwrap_err();
    assert_eq!(err, CalibrationError::UnmappablePoint { x: 1.0, y: 2.0 });

    let err = VertexAngle::from_points(p, p, p, &BrokenCalibration).unwrap_err();
    assert_eq!(err, CalibrationError::UnmappablePoint { x: 1.0, y: 2.0 });
}
