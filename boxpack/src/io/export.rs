use crate::entities::{PlacedItem, Solution};
use crate::io::ext_repr::{ExtPlacedItem, ExtSolution};

/// Exports a [`Solution`] by composing an [`ExtSolution`] from it.
pub fn export_solution(solution: &Solution) -> ExtSolution {
    ExtSolution {
        best_fill: solution.density,
        best_placed: solution.n_placed,
        boxes: export_placed_items(solution.layout_snapshot.placed_items.iter()),
    }
}

/// Exports a set of placed items to a vector of [`ExtPlacedItem`].
pub fn export_placed_items<'a>(
    placed_items: impl Iterator<Item = &'a PlacedItem>,
) -> Vec<ExtPlacedItem> {
    placed_items
        .map(|pi| {
            let [x, y, z] = pi.item.dims.as_array();
            let [pos_x, pos_y, pos_z] = pi.position.as_array();
            ExtPlacedItem {
                x,
                y,
                z,
                pos_x,
                pos_y,
                pos_z,
                weight: pi.item.weight,
                rotation: pi.rotation.id(),
            }
        })
        .collect()
}
