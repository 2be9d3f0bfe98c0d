use anyhow::{Result, ensure};

use crate::geometry::primitives::{Cuboid, Dimensions};

/// The fixed-size box in which [`Item`](crate::entities::Item)s can be placed.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Container {
    pub dims: Dimensions,
    /// Minimum clearance required between any two placed items.
    /// Does not apply to the walls of the container: an item may still be placed flush against a wall,
    /// unlike margin checks that also keep the clearance from the container boundary.
    pub min_item_separation: Option<f32>,
}

impl Container {
    pub fn new(dims: Dimensions) -> Self {
        Container {
            dims,
            min_item_separation: None,
        }
    }

    pub fn with_item_separation(mut self, separation: Option<f32>) -> Result<Self> {
        if let Some(s) = separation {
            ensure!(
                s.is_finite() && s >= 0.0,
                "item separation must be finite and non-negative: {s}"
            );
        }
        self.min_item_separation = separation;
        Ok(self)
    }

    pub fn width(&self) -> f32 {
        self.dims.x
    }

    pub fn height(&self) -> f32 {
        self.dims.y
    }

    pub fn depth(&self) -> f32 {
        self.dims.z
    }

    pub fn volume(&self) -> f32 {
        self.dims.volume()
    }

    /// The region items have to be placed within
    pub fn bbox(&self) -> Cuboid {
        Cuboid::from_origin(self.dims)
    }
}
