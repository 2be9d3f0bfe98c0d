use std::path::Path;

use boxpack::entities::{Instance, Layout};
use boxpack::geometry::Rotation;
use boxpack::geometry::primitives::Position;
use boxpack::io::import::Importer;
use itertools::iproduct;
use qlbp::config::QLConfig;
use qlbp::io;
use qlbp::opt::item_placement_order;

pub const BENCH_INSTANCE: &str = "../assets/boxes_mixed.json";

pub fn create_instance(config: &QLConfig) -> Instance {
    let ext_items = io::read_input(Path::new(BENCH_INSTANCE)).unwrap();
    Importer::new(config.container_dims, config.min_item_separation)
        .unwrap()
        .import_instance(&ext_items)
        .unwrap()
}

/// Fills a layout by placing every item (largest first) at the first feasible grid position
pub fn create_first_fit_layout(instance: &Instance, grid_step: u32) -> Layout {
    let mut layout = Layout::new(instance.container);
    let axis = |extent: f32| (0..extent.ceil() as u32).step_by(grid_step as usize);
    for item_id in item_placement_order(instance) {
        let item = instance.item(item_id);
        let candidate = iproduct!(
            axis(instance.container.depth()),
            axis(instance.container.height()),
            axis(instance.container.width())
        )
        .map(|(z, y, x)| Position::new(x, y, z))
        .find(|pos| layout.can_place(*pos, item.rotated(Rotation::XYZ).dims));
        if let Some(pos) = candidate {
            layout.place_item(item, pos, Rotation::XYZ);
        }
    }
    layout
}
