use std::fmt::{Display, Formatter};

/// Integer grid position of the lower (left, bottom, back) corner of a box.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy, Default)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0, z: 0 };

    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Position { x, y, z }
    }

    /// True if at least one of the coordinates is zero.
    pub fn touches_origin_plane(&self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }

    pub fn as_array(&self) -> [u32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<(u32, u32, u32)> for Position {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Position { x, y, z }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
