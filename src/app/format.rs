//! Display strings for the numeric readouts.
//!
//! Only the text is rounded; the model keeps full precision.

use super::rotation::{AxisVector, Quaternion};

/// Fixed three-decimal rendering used by every quaternion/axis readout.
pub fn format_component(value: f64) -> String {
    format!("{:.3}", value)
}

/// Angle readout in whole degrees.
pub fn format_degrees(degrees: f64) -> String {
    format!("{}°", degrees.round())
}

/// Speed readout with one decimal.
pub fn format_speed(speed: f64) -> String {
    format!("{:.1}", speed)
}

/// Axis field text, one string per component.
pub fn format_axis(axis: AxisVector) -> [String; 3] {
    [axis.x, axis.y, axis.z].map(format_component)
}

/// Parse a numeric text field. Surrounding whitespace is ignored; anything
/// that is not a finite number is rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuaternionReadout {
    pub w: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub magnitude: String,
}

impl From<Quaternion> for QuaternionReadout {
    fn from(q: Quaternion) -> Self {
        Self {
            w: format_component(q.w),
            x: format_component(q.x),
            y: format_component(q.y),
            z: format_component(q.z),
            magnitude: format_component(q.magnitude()),
        }
    }
}

impl Default for QuaternionReadout {
    fn default() -> Self {
        Self::from(Quaternion::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::rotation::to_quaternion;

    #[test]
    fn three_decimals() {
        assert_eq!(format_component(1.0), "1.000");
        assert_eq!(format_component(0.70710678), "0.707");
        assert_eq!(format_component(-0.5), "-0.500");
        assert_eq!(format_component(0.0), "0.000");
    }

    #[test]
    fn half_turn_readout() {
        let readout = QuaternionReadout::from(to_quaternion(0.0, 1.0, 0.0, std::f64::consts::PI));
        assert_eq!(readout.w, "0.000");
        assert_eq!(readout.x, "0.000");
        assert_eq!(readout.y, "1.000");
        assert_eq!(readout.z, "0.000");
        assert_eq!(readout.magnitude, "1.000");
    }

    #[test]
    fn identity_readout_is_default() {
        let readout = QuaternionReadout::default();
        assert_eq!(
            [readout.w.as_str(), readout.x.as_str(), readout.y.as_str(), readout.z.as_str()],
            ["1.000", "0.000", "0.000", "0.000"]
        );
    }

    #[test]
    fn angle_and_speed_text() {
        assert_eq!(format_degrees(59.6), "60°");
        assert_eq!(format_degrees(0.0), "0°");
        assert_eq!(format_speed(1.0), "1.0");
        assert_eq!(format_speed(2.26), "2.3");
    }

    #[test]
    fn axis_text() {
        let inv_sqrt3 = 1.0 / 3.0_f64.sqrt();
        assert_eq!(
            format_axis(AxisVector::new(inv_sqrt3, 0.0, -1.0)),
            ["0.577".to_string(), "0.000".to_string(), "-1.000".to_string()]
        );
    }

    #[test]
    fn parses_numbers() {
        assert_eq!(parse_number(" 1.5 "), Some(1.5));
        assert_eq!(parse_number("-2"), Some(-2.0));
        assert_eq!(parse_number("1e-3"), Some(0.001));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
