//! Named example rotations and their keyboard shortcuts.

use std::fmt;
use std::str::FromStr;

use super::model::RotationParams;
use super::rotation::AxisVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Example1,
    Example2,
    Example3,
    Example4,
    Example5,
    Example6,
    Example7,
    Example8,
    Reset,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Example1,
        Preset::Example2,
        Preset::Example3,
        Preset::Example4,
        Preset::Example5,
        Preset::Example6,
        Preset::Example7,
        Preset::Example8,
        Preset::Reset,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Preset::Example1 => "example1",
            Preset::Example2 => "example2",
            Preset::Example3 => "example3",
            Preset::Example4 => "example4",
            Preset::Example5 => "example5",
            Preset::Example6 => "example6",
            Preset::Example7 => "example7",
            Preset::Example8 => "example8",
            Preset::Reset => "reset",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Preset::Example1 => "X axis, 60°",
            Preset::Example2 => "Y axis, 180°",
            Preset::Example3 => "(1,1,0), 90°",
            Preset::Example4 => "Y axis, 90°",
            Preset::Example5 => "Z axis, 120°",
            Preset::Example6 => "(1,1,1), 120°",
            Preset::Example7 => "(1,0,1), 90°",
            Preset::Example8 => "X axis, 270°",
            Preset::Reset => "Reset",
        }
    }

    pub fn params(self) -> RotationParams {
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        let inv_sqrt3 = 1.0 / 3.0_f64.sqrt();
        let (axis, angle) = match self {
            Preset::Example1 => (AxisVector::new(1.0, 0.0, 0.0), 60.0),
            Preset::Example2 => (AxisVector::new(0.0, 1.0, 0.0), 180.0),
            Preset::Example3 => (AxisVector::new(inv_sqrt2, inv_sqrt2, 0.0), 90.0),
            Preset::Example4 => (AxisVector::new(0.0, 1.0, 0.0), 90.0),
            Preset::Example5 => (AxisVector::new(0.0, 0.0, 1.0), 120.0),
            Preset::Example6 => (AxisVector::new(inv_sqrt3, inv_sqrt3, inv_sqrt3), 120.0),
            Preset::Example7 => (AxisVector::new(inv_sqrt2, 0.0, inv_sqrt2), 90.0),
            Preset::Example8 => (AxisVector::new(1.0, 0.0, 0.0), 270.0),
            Preset::Reset => (AxisVector::new(1.0, 0.0, 0.0), 0.0),
        };
        RotationParams::new(axis, angle)
    }

    /// Digits `1`..`8` select the examples; `r`/`R` resets.
    pub fn from_key(key: &str) -> Option<Preset> {
        match key {
            "1" => Some(Preset::Example1),
            "2" => Some(Preset::Example2),
            "3" => Some(Preset::Example3),
            "4" => Some(Preset::Example4),
            "5" => Some(Preset::Example5),
            "6" => Some(Preset::Example6),
            "7" => Some(Preset::Example7),
            "8" => Some(Preset::Example8),
            "r" | "R" => Some(Preset::Reset),
            _ => None,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| format!("unknown preset '{}'", s))
    }
}
