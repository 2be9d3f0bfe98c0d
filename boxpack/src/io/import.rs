use anyhow::{Context, Result, ensure};
use crate::entities::{Container, Instance, Item};
use crate::geometry::primitives::Dimensions;
use crate::io::ext_repr::ExtItem;

/// Converts external representations of items into internal ones.
/// Malformed records are rejected here, the rest of the library assumes valid items.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    pub container: Container,
}

impl Importer {
    /// Creates a new importer packing into a container of `container_dims`.
    ///
    /// * `min_item_separation` - Optional minimum clearance between placed items. See [`Container::min_item_separation`].
    pub fn new(container_dims: Dimensions, min_item_separation: Option<f32>) -> Result<Importer> {
        let container = Container::new(container_dims).with_item_separation(min_item_separation)?;
        Ok(Importer { container })
    }

    pub fn import_item(&self, id: usize, ext_item: &ExtItem) -> Result<Item> {
        let dims = Dimensions::try_new(ext_item.x, ext_item.y, ext_item.z)?;
        ensure!(
            ext_item.weight.is_finite() && ext_item.weight >= 0.0,
            "invalid weight: {}",
            ext_item.weight
        );
        Ok(Item::new(id, dims, ext_item.weight))
    }

    pub fn import_instance(&self, ext_items: &[ExtItem]) -> Result<Instance> {
        let items = ext_items
            .iter()
            .enumerate()
            .map(|(id, ext_item)| {
                self.import_item(id, ext_item)
                    .with_context(|| format!("could not import box record {id}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Instance::new(self.container, items))
    }
}
