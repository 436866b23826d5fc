//! Axis vectors, unit quaternions and the axis-angle → quaternion mapping.

use std::ops::Mul;

/// Rotation axis as entered by the user. Not necessarily unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AxisVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector with the same direction, or `None` for a zero-length axis.
    pub fn normalized(&self) -> Option<Self> {
        let length = self.length();
        if length > 0.0 {
            Some(Self::new(self.x / length, self.y / length, self.z / length))
        } else {
            None
        }
    }
}

impl Default for AxisVector {
    /// The x axis, which is what the visualizer starts with.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl Mul<f64> for AxisVector {
    type Output = AxisVector;

    fn mul(self, k: f64) -> AxisVector {
        AxisVector::new(self.x * k, self.y * k, self.z * k)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Closed-form axis-angle mapping. The axis is normalized internally; a
    /// zero-length axis maps to the identity instead of failing.
    pub fn from_axis_angle(axis: AxisVector, angle_radians: f64) -> Self {
        let Some(n) = axis.normalized() else {
            return Self::IDENTITY;
        };
        let (s, c) = (angle_radians / 2.0).sin_cos();
        Self { w: c, x: n.x * s, y: n.y * s, z: n.z * s }
    }

    pub fn magnitude(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Components in (w, x, y, z) order.
    pub fn as_wxyz(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }
}

impl Default for Quaternion {
    /// The identity quaternion (no rotation).
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Free-function form of [`Quaternion::from_axis_angle`] taking raw components.
pub fn to_quaternion(x: f64, y: f64, z: f64, angle_radians: f64) -> Quaternion {
    Quaternion::from_axis_angle(AxisVector::new(x, y, z), angle_radians)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    const TOL: f64 = 1e-9;

    fn assert_quat_close(actual: Quaternion, expected: [f64; 4]) {
        for (a, e) in actual.as_wxyz().iter().zip(expected.iter()) {
            assert!((a - e).abs() < TOL, "expected {:?}, got {:?}", expected, actual);
        }
    }

    fn sample_axes() -> Vec<AxisVector> {
        vec![
            AxisVector::new(1.0, 0.0, 0.0),
            AxisVector::new(0.0, -3.0, 0.0),
            AxisVector::new(0.0, 0.0, 1e-6),
            AxisVector::new(1.0, 1.0, 1.0),
            AxisVector::new(-2.5, 0.3, 7.0),
            AxisVector::new(1e6, -1e6, 42.0),
        ]
    }

    #[test]
    fn unit_magnitude_for_nonzero_axes() {
        let angles = [-720.0, -90.0, 0.0, 1.0, 45.0, 180.0, 359.0, 1000.0];
        for axis in sample_axes() {
            for degrees in angles {
                let q = Quaternion::from_axis_angle(axis, f64::to_radians(degrees));
                assert!(
                    (q.magnitude() - 1.0).abs() < TOL,
                    "axis {:?} angle {} gave |q| = {}",
                    axis,
                    degrees,
                    q.magnitude()
                );
            }
        }
    }

    #[test]
    fn zero_angle_is_identity() {
        for axis in sample_axes() {
            assert_quat_close(Quaternion::from_axis_angle(axis, 0.0), [1.0, 0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn zero_axis_is_identity() {
        for angle in [0.0, 1.0, PI, -7.5, 100.0] {
            assert_eq!(to_quaternion(0.0, 0.0, 0.0, angle), Quaternion::IDENTITY);
        }
    }

    #[test]
    fn axis_scale_does_not_change_result() {
        let angle = 1.234;
        for axis in sample_axes() {
            let reference = Quaternion::from_axis_angle(axis, angle);
            for k in [0.001, 0.5, 3.0, 1e4] {
                let scaled = Quaternion::from_axis_angle(axis * k, angle);
                assert_quat_close(scaled, reference.as_wxyz());
            }
        }
    }

    #[test]
    fn half_turn_about_y() {
        assert_quat_close(to_quaternion(0.0, 1.0, 0.0, PI), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn quarter_turn_about_diagonal() {
        let q = to_quaternion(1.0, 1.0, 0.0, PI / 2.0);
        let s = (PI / 4.0).sin();
        assert_quat_close(q, [FRAC_1_SQRT_2, FRAC_1_SQRT_2 * s, FRAC_1_SQRT_2 * s, 0.0]);
    }

    #[test]
    fn negative_scale_flips_vector_part() {
        let q = to_quaternion(0.0, 0.0, -1.0, PI / 3.0);
        let p = to_quaternion(0.0, 0.0, 1.0, PI / 3.0);
        assert_quat_close(q, [p.w, -p.x, -p.y, -p.z]);
    }

    #[test]
    fn normalized_axis() {
        assert_eq!(AxisVector::new(2.0, 0.0, 0.0).normalized(), Some(AxisVector::new(1.0, 0.0, 0.0)));
        assert_eq!(AxisVector::new(0.0, 0.0, 0.0).normalized(), None);
        let n = AxisVector::new(3.0, 4.0, 0.0).normalized().unwrap();
        assert!((n.x - 0.6).abs() < TOL && (n.y - 0.8).abs() < TOL && n.z == 0.0);
    }
}
