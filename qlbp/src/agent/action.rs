use std::fmt::{Display, Formatter};

use boxpack::entities::Container;
use boxpack::geometry::Rotation;
use boxpack::geometry::primitives::Position;
use itertools::iproduct;

/// Index of an [`Action`] within its [`ActionSpace`]
pub type ActionId = usize;

/// Candidate placement: the lower corner of the item and the rotation to apply to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    pub position: Position,
    pub rotation: Rotation,
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.position, self.rotation)
    }
}

/// The fixed, state-independent set of actions.
/// Positions are taken on a regular grid from 0 (inclusive) up to the extent of the container (exclusive)
/// along every axis, combined with each of the 6 rotations.
#[derive(Clone, Debug)]
pub struct ActionSpace {
    actions: Vec<Action>,
}

impl ActionSpace {
    pub fn new(container: &Container, grid_step: u32) -> Self {
        assert!(grid_step > 0, "grid step must be positive");
        let axis = |extent: f32| (0..extent.ceil() as u32).step_by(grid_step as usize);

        let actions = iproduct!(
            axis(container.width()),
            axis(container.height()),
            axis(container.depth()),
            Rotation::ALL
        )
        .map(|(x, y, z, rotation)| Action {
            position: Position::new(x, y, z),
            rotation,
        })
        .collect();

        ActionSpace { actions }
    }

    pub fn get(&self, id: ActionId) -> Action {
        self.actions[id]
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &Action)> {
        self.actions.iter().enumerate()
    }
}
