//! Measurement output records.
//!
//! Each record is an immutable value produced fresh per collection call,
//! holding both the calibrated numeric value and its display rendering. A
//! record carries no reference back to its inputs; it is a terminal value
//! owned by whoever requested it (typically a serializer).

use measure_core::Real;
use serde::{Deserialize, Serialize};

/// A named point measurement in calibrated coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredPosition {
    /// Annotation label, passed through verbatim.
    pub name: String,
    /// Calibrated x coordinate.
    pub x: Real,
    /// Calibrated y coordinate.
    pub y: Real,
    /// `x` rendered with two fractional digits in the configured locale.
    pub x_display: String,
    /// `y` rendered with two fractional digits in the configured locale.
    pub y_display: String,
}

/// A named distance measurement in calibrated units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredDistance {
    /// Annotation label, passed through verbatim.
    pub name: String,
    /// Calibrated distance, never negative.
    pub value: Real,
    /// `value` rendered with two fractional digits in the configured locale.
    pub value_display: String,
}

/// A named angle measurement in the display convention of the calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredAngle {
    /// Annotation label, passed through verbatim.
    pub name: String,
    /// Converted angle, in degrees.
    pub value: Real,
    /// `value` rendered with two fractional digits in the configured locale.
    pub value_display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_round_trip_through_json() {
        let record = MeasuredDistance {
            name: "stride".to_string(),
            value: 1.5,
            value_display: "1.50".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let restored: MeasuredDistance = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }
}
