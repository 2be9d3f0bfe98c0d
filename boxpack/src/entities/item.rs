use crate::geometry::Rotation;
use crate::geometry::primitives::Dimensions;

/// Box to be placed in a [`Layout`](crate::entities::Layout)
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Item {
    /// Index of the item in the [`Instance`](crate::entities::Instance)
    pub id: usize,
    /// Extents of the box in its original orientation
    pub dims: Dimensions,
    pub weight: f32,
}

impl Item {
    pub fn new(id: usize, dims: Dimensions, weight: f32) -> Item {
        Item { id, dims, weight }
    }

    pub fn volume(&self) -> f32 {
        self.dims.volume()
    }

    /// Returns a copy of the item with its dimensions permuted by `rotation`.
    pub fn rotated(&self, rotation: Rotation) -> Item {
        Item {
            dims: rotation.apply(self.dims),
            ..*self
        }
    }
}
