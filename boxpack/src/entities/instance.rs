use crate::entities::{Container, Item};

/// The set of boxes to be packed together with the container to pack them in.
#[derive(Clone, Debug)]
pub struct Instance {
    pub container: Container,
    /// Items in input order, `items[i].id == i`
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(container: Container, items: Vec<Item>) -> Self {
        assert!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "item ids must match their index"
        );
        Instance { container, items }
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_item_volume(&self) -> f32 {
        self.items.iter().map(|i| i.volume()).sum()
    }
}
