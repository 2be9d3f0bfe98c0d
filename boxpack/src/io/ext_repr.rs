use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item).
/// Unknown fields in the input records are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    #[serde(rename = "X")]
    pub x: f32,
    #[serde(rename = "Y")]
    pub y: f32,
    #[serde(rename = "Z")]
    pub z: f32,
    #[serde(rename = "Weight")]
    pub weight: f32,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    /// Extents of the item as it occupies space (rotation applied)
    #[serde(rename = "X")]
    pub x: f32,
    #[serde(rename = "Y")]
    pub y: f32,
    #[serde(rename = "Z")]
    pub z: f32,
    #[serde(rename = "posX")]
    pub pos_x: u32,
    #[serde(rename = "posY")]
    pub pos_y: u32,
    #[serde(rename = "posZ")]
    pub pos_z: u32,
    #[serde(rename = "Weight")]
    pub weight: f32,
    /// Id of the [`Rotation`](crate::geometry::Rotation) applied to the item
    #[serde(rename = "Rotation")]
    pub rotation: u8,
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Highest fill ratio achieved, in [0, 1]
    pub best_fill: f32,
    /// Number of boxes placed in the best layout
    pub best_placed: usize,
    /// The placed boxes of the best layout
    pub boxes: Vec<ExtPlacedItem>,
}
