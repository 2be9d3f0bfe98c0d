use log::warn;

use crate::entities::{Container, Item, PlacedItem};
use crate::geometry::Rotation;
use crate::geometry::geo_traits::{CollidesWith, Encloses};
use crate::geometry::primitives::{Cuboid, Dimensions, Position};
use crate::util::assertions;

/// A [`Layout`] is a dynamic representation of items that have been placed in a container at specific positions.
/// Items are kept in the order in which they were placed. Snapshots can be taken to retain a layout.
///
/// Feasibility of a candidate is checked with [`Layout::can_place`] against every placed item (no spatial index),
/// which costs O(n) for n placed items.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The container used for this layout
    pub container: Container,
    placed_items: Vec<PlacedItem>,
    placed_volume: f32,
}

impl Layout {
    pub fn new(container: Container) -> Self {
        Layout {
            container,
            placed_items: vec![],
            placed_volume: 0.0,
        }
    }

    /// Checks whether a box with extents `dims` can be placed with its lower corner at `position`:
    /// the box has to lie within the container and may not overlap any placed item.
    /// Returns early on the first violation.
    pub fn can_place(&self, position: Position, dims: Dimensions) -> bool {
        let candidate = Cuboid::from_corner(position, dims);
        if !self.container.bbox().encloses(&candidate) {
            return false;
        }
        let probe = match self.container.min_item_separation {
            Some(separation) if separation > 0.0 => candidate.inflate(separation),
            _ => candidate,
        };
        !self
            .placed_items
            .iter()
            .any(|pi| probe.collides_with(&pi.cuboid()))
    }

    /// Places an item in the layout with `rotation` applied and its lower corner at `position`.
    /// The caller is responsible for validating the placement with [`Layout::can_place`] first.
    pub fn place_item(&mut self, item: &Item, position: Position, rotation: Rotation) -> &PlacedItem {
        debug_assert!(
            self.can_place(position, item.rotated(rotation).dims),
            "placement of item {} at {position} with rotation {rotation} is infeasible",
            item.id
        );
        let pi = PlacedItem::new(item, position, rotation);
        let index = self.placed_items.len();
        self.placed_volume += pi.volume();
        self.placed_items.push(pi);

        debug_assert!(assertions::placed_volume_is_consistent(self));

        &self.placed_items[index]
    }

    /// All placed items in placement order
    pub fn placed_items(&self) -> &[PlacedItem] {
        &self.placed_items
    }

    pub fn n_placed(&self) -> usize {
        self.placed_items.len()
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// The sum of the volumes of all placed items.
    pub fn placed_volume(&self) -> f32 {
        self.placed_volume
    }

    /// The ratio of the volume of the placed items to the volume of the container.
    pub fn density(&self) -> f32 {
        self.placed_volume / self.container.volume()
    }

    /// Returns true if all items are within the container and no two items overlap
    pub fn is_feasible(&self) -> bool {
        assertions::layout_is_within_bounds(self) && assertions::layout_is_collision_free(self)
    }

    /// Saves the current state of the layout
    pub fn save(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            container: self.container,
            placed_items: self.placed_items.clone(),
            density: self.density(),
        }
    }
}

/// Immutable and compact representation of a [`Layout`].
#[derive(Clone, Debug)]
pub struct LayoutSnapshot {
    /// A copy of the container used in the layout
    pub container: Container,
    /// A copy of the placed items in the layout
    pub placed_items: Vec<PlacedItem>,
    /// The density of the layout at the time of the snapshot
    pub density: f32,
}

impl LayoutSnapshot {
    /// Drops every placed item that does not lie entirely within the container.
    /// Returns the number of items removed.
    pub fn retain_enclosed(&mut self) -> usize {
        let bbox = self.container.bbox();
        let n_before = self.placed_items.len();
        self.placed_items.retain(|pi| bbox.encloses(&pi.cuboid()));
        let n_removed = n_before - self.placed_items.len();
        if n_removed > 0 {
            warn!("{n_removed} placed items were found outside the container and discarded");
        }
        n_removed
    }
}
