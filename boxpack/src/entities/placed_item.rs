use crate::entities::Item;
use crate::geometry::Rotation;
use crate::geometry::primitives::{Cuboid, Position};

/// Represents an [`Item`] that has been placed in a [`Layout`](crate::entities::Layout).
/// Only created by [`Layout::place_item`](crate::entities::Layout::place_item), never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct PlacedItem {
    /// The item in the orientation it occupies space in
    pub item: Item,
    /// Lower corner of the item in the container
    pub position: Position,
    /// Rotation applied to the original item
    pub rotation: Rotation,
}

impl PlacedItem {
    pub(crate) fn new(item: &Item, position: Position, rotation: Rotation) -> Self {
        PlacedItem {
            item: item.rotated(rotation),
            position,
            rotation,
        }
    }

    pub fn item_id(&self) -> usize {
        self.item.id
    }

    pub fn volume(&self) -> f32 {
        self.item.volume()
    }

    /// The space occupied by the item
    pub fn cuboid(&self) -> Cuboid {
        Cuboid::from_corner(self.position, self.item.dims)
    }
}
