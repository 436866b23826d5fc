//! Rotation parameters and the model that turns them into a quaternion.

use super::rotation::{AxisVector, Quaternion};

/// Axis plus angle in degrees. The angle is deliberately unrestricted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationParams {
    pub axis: AxisVector,
    pub angle_degrees: f64,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self { axis: AxisVector::default(), angle_degrees: 0.0 }
    }
}

impl RotationParams {
    pub const fn new(axis: AxisVector, angle_degrees: f64) -> Self {
        Self { axis, angle_degrees }
    }

    /// Degrees are converted on every call, never cached.
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_axis_angle(self.axis, self.angle_degrees.to_radians())
    }
}

/// Everything a display needs after a recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationFrame {
    pub axis: AxisVector,
    pub angle_degrees: f64,
    pub quaternion: Quaternion,
}

/// Owns the current [`RotationParams`] and the quaternion derived from them.
/// Every mutation recomputes the quaternion exactly once.
#[derive(Debug, Clone)]
pub struct RotationModel {
    params: RotationParams,
    quaternion: Quaternion,
}

impl Default for RotationModel {
    fn default() -> Self {
        Self::new(RotationParams::default())
    }
}

impl RotationModel {
    pub fn new(params: RotationParams) -> Self {
        Self { params, quaternion: params.to_quaternion() }
    }

    pub fn params(&self) -> RotationParams {
        self.params
    }

    pub fn axis(&self) -> AxisVector {
        self.params.axis
    }

    pub fn angle_degrees(&self) -> f64 {
        self.params.angle_degrees
    }

    pub fn quaternion(&self) -> Quaternion {
        self.quaternion
    }

    pub fn frame(&self) -> RotationFrame {
        RotationFrame {
            axis: self.params.axis,
            angle_degrees: self.params.angle_degrees,
            quaternion: self.quaternion,
        }
    }

    /// Stores the raw components; no normalization.
    pub fn set_axis(&mut self, x: f64, y: f64, z: f64) {
        self.params.axis = AxisVector::new(x, y, z);
        self.recompute();
    }

    pub fn set_angle(&mut self, degrees: f64) {
        self.params.angle_degrees = degrees;
        self.recompute();
    }

    /// Replaces axis and angle together, then recomputes once.
    pub fn set_params(&mut self, params: RotationParams) {
        self.params = params;
        self.recompute();
    }

    /// Scales the stored axis to unit length. Returns `false` and leaves the
    /// model untouched when the axis has zero length.
    pub fn normalize_axis(&mut self) -> bool {
        match self.params.axis.normalized() {
            Some(unit) => {
                self.params.axis = unit;
                self.recompute();
                true
            }
            None => false,
        }
    }

    fn recompute(&mut self) {
        self.quaternion = self.params.to_quaternion();
        log::trace!("recomputed {:?} from {:?}", self.quaternion, self.params);
    }
}
