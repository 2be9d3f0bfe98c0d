use std::fmt::{Display, Formatter};

use crate::geometry::primitives::Dimensions;

/// One of the six axis-aligned orientations of a box.
/// Each variant names which original extent ends up along the x, y and z-axis respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Rotation {
    #[default]
    XYZ = 0,
    XZY = 1,
    YXZ = 2,
    ZYX = 3,
    ZXY = 4,
    YZX = 5,
}

impl Rotation {
    pub const ALL: [Rotation; 6] = [
        Rotation::XYZ,
        Rotation::XZY,
        Rotation::YXZ,
        Rotation::ZYX,
        Rotation::ZXY,
        Rotation::YZX,
    ];

    /// Maps a rotation id to its orientation. Ids outside `0..=5` fall back to the identity.
    pub fn from_id(id: i64) -> Rotation {
        match id {
            1 => Rotation::XZY,
            2 => Rotation::YXZ,
            3 => Rotation::ZYX,
            4 => Rotation::ZXY,
            5 => Rotation::YZX,
            _ => Rotation::XYZ,
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Permutes `dims` according to the orientation. Volume is unaffected.
    pub fn apply(self, dims: Dimensions) -> Dimensions {
        let Dimensions { x, y, z } = dims;
        match self {
            Rotation::XYZ => [x, y, z],
            Rotation::XZY => [x, z, y],
            Rotation::YXZ => [y, x, z],
            Rotation::ZYX => [z, y, x],
            Rotation::ZXY => [z, x, y],
            Rotation::YZX => [y, z, x],
        }
        .into()
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rotation::XYZ => "XYZ",
            Rotation::XZY => "XZY",
            Rotation::YXZ => "YXZ",
            Rotation::ZYX => "ZYX",
            Rotation::ZXY => "ZXY",
            Rotation::YZX => "YZX",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sorted(dims: Dimensions) -> [f32; 3] {
        let mut a = dims.as_array();
        a.sort_by(|a, b| a.partial_cmp(b).unwrap());
        a
    }

    #[test]
    fn every_rotation_is_a_permutation() {
        let dims = Dimensions::try_new(2.0, 3.0, 7.0).unwrap();
        for r in Rotation::ALL {
            let rotated = r.apply(dims);
            assert_eq!(sorted(rotated), sorted(dims), "rotation {r}");
            assert_eq!(rotated.volume(), dims.volume(), "rotation {r}");
        }
    }

    #[test_case(0, [2.0, 3.0, 7.0]; "xyz")]
    #[test_case(1, [2.0, 7.0, 3.0]; "xzy")]
    #[test_case(2, [3.0, 2.0, 7.0]; "yxz")]
    #[test_case(3, [7.0, 3.0, 2.0]; "zyx")]
    #[test_case(4, [7.0, 2.0, 3.0]; "zxy")]
    #[test_case(5, [3.0, 7.0, 2.0]; "yzx")]
    fn rotation_ids_map_to_fixed_permutations(id: i64, expected: [f32; 3]) {
        let dims = Dimensions::try_new(2.0, 3.0, 7.0).unwrap();
        let r = Rotation::from_id(id);
        assert_eq!(r.id() as i64, id);
        assert_eq!(r.apply(dims).as_array(), expected);
    }

    #[test_case(-1; "negative")]
    #[test_case(6; "just above range")]
    #[test_case(1_000; "far above range")]
    fn out_of_range_ids_are_identity(id: i64) {
        let dims = Dimensions::try_new(2.0, 3.0, 7.0).unwrap();
        assert_eq!(Rotation::from_id(id), Rotation::XYZ);
        assert_eq!(Rotation::from_id(id).apply(dims), dims);
    }
}
