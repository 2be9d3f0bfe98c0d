use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::Layout;
use crate::geometry::geo_traits::{CollidesWith, Encloses};
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn layout_is_within_bounds(layout: &Layout) -> bool {
    let bbox = layout.container.bbox();
    match layout
        .placed_items()
        .iter()
        .find(|pi| !bbox.encloses(&pi.cuboid()))
    {
        Some(pi) => {
            error!(
                "item {} at {} ({}) exceeds the container",
                pi.item_id(),
                pi.position,
                pi.item.dims
            );
            false
        }
        None => true,
    }
}

pub fn layout_is_collision_free(layout: &Layout) -> bool {
    for (a, b) in layout.placed_items().iter().tuple_combinations() {
        if a.cuboid().collides_with(&b.cuboid()) {
            error!(
                "items {} at {} and {} at {} overlap",
                a.item_id(),
                a.position,
                b.item_id(),
                b.position
            );
            return false;
        }
    }
    true
}

pub fn placed_volume_is_consistent(layout: &Layout) -> bool {
    let recomputed = layout
        .placed_items()
        .iter()
        .map(|pi| pi.volume())
        .sum::<f32>();
    approx_eq!(f32, recomputed, layout.placed_volume(), epsilon = 1e-3)
}
