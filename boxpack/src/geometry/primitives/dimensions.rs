use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Extents of an axis-aligned box along the x, y and z-axis.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Dimensions {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Dimensions {
    pub fn try_new(x: f32, y: f32, z: f32) -> Result<Self> {
        ensure!(
            [x, y, z].iter().all(|d| d.is_finite() && *d > 0.0),
            "invalid dimensions, all extents must be finite and strictly positive: ({x}, {y}, {z})"
        );
        Ok(Dimensions { x, y, z })
    }

    pub fn volume(&self) -> f32 {
        self.x * self.y * self.z
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Dimensions {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Dimensions { x, y, z }
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}
