use anyhow::Result;
use anyhow::ensure;

use crate::geometry::geo_traits::{CollidesWith, Encloses};
use crate::geometry::primitives::{Dimensions, Position};

///Axis-aligned cuboid
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Cuboid {
    pub x_min: f32,
    pub y_min: f32,
    pub z_min: f32,
    pub x_max: f32,
    pub y_max: f32,
    pub z_max: f32,
}

impl Cuboid {
    pub fn try_new(
        x_min: f32,
        y_min: f32,
        z_min: f32,
        x_max: f32,
        y_max: f32,
        z_max: f32,
    ) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max && z_min < z_max,
            "invalid cuboid, x: [{x_min}, {x_max}], y: [{y_min}, {y_max}], z: [{z_min}, {z_max}]"
        );
        Ok(Cuboid {
            x_min,
            y_min,
            z_min,
            x_max,
            y_max,
            z_max,
        })
    }

    /// Cuboid occupied by a box with extents `dims` whose lower corner is at `pos`.
    /// `dims` are strictly positive by construction, so no validation is required.
    pub fn from_corner(pos: Position, dims: Dimensions) -> Self {
        let (x, y, z) = (pos.x as f32, pos.y as f32, pos.z as f32);
        Cuboid {
            x_min: x,
            y_min: y,
            z_min: z,
            x_max: x + dims.x,
            y_max: y + dims.y,
            z_max: z + dims.z,
        }
    }

    /// Cuboid spanning from the origin to `dims`.
    pub fn from_origin(dims: Dimensions) -> Self {
        Self::from_corner(Position::ORIGIN, dims)
    }

    /// Returns a new cuboid expanded by `d` in every direction.
    pub fn inflate(self, d: f32) -> Self {
        Cuboid {
            x_min: self.x_min - d,
            y_min: self.y_min - d,
            z_min: self.z_min - d,
            x_max: self.x_max + d,
            y_max: self.y_max + d,
            z_max: self.z_max + d,
        }
    }
}

impl CollidesWith<Cuboid> for Cuboid {
    /// Separating axis test: two cuboids are disjoint iff one lies entirely before
    /// the other along at least one axis. Touching faces do not collide.
    #[inline(always)]
    fn collides_with(&self, other: &Cuboid) -> bool {
        let separated = self.x_max <= other.x_min
            || other.x_max <= self.x_min
            || self.y_max <= other.y_min
            || other.y_max <= self.y_min
            || self.z_max <= other.z_min
            || other.z_max <= self.z_min;
        !separated
    }
}

impl Encloses<Cuboid> for Cuboid {
    #[inline(always)]
    fn encloses(&self, other: &Cuboid) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.z_min <= other.z_min
            && other.x_max <= self.x_max
            && other.y_max <= self.y_max
            && other.z_max <= self.z_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn cube(pos: (u32, u32, u32), side: f32) -> Cuboid {
        Cuboid::from_corner(pos.into(), Dimensions::try_new(side, side, side).unwrap())
    }

    #[test]
    fn invalid_cuboid_is_rejected() {
        assert!(Cuboid::try_new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0).is_ok());
        assert!(Cuboid::try_new(1.0, 0.0, 0.0, 1.0, 1.0, 1.0).is_err());
        assert!(Cuboid::try_new(0.0, 0.0, 2.0, 1.0, 1.0, 1.0).is_err());
    }

    #[test_case((0, 0, 0), (0, 0, 0), true; "identical")]
    #[test_case((0, 0, 0), (5, 5, 5), true; "partial overlap")]
    #[test_case((0, 0, 0), (6, 0, 0), false; "touching along x")]
    #[test_case((0, 0, 0), (0, 6, 0), false; "touching along y")]
    #[test_case((0, 0, 0), (0, 0, 6), false; "touching along z")]
    #[test_case((0, 0, 0), (7, 2, 2), false; "separated along x only")]
    #[test_case((3, 3, 3), (0, 0, 0), true; "other before self")]
    fn collision_is_symmetric(a: (u32, u32, u32), b: (u32, u32, u32), expected: bool) {
        let (a, b) = (cube(a, 6.0), cube(b, 6.0));
        assert_eq!(a.collides_with(&b), expected);
        assert_eq!(b.collides_with(&a), expected);
    }

    #[test]
    fn enclosure_includes_boundary() {
        let outer = cube((0, 0, 0), 10.0);
        assert!(outer.encloses(&cube((6, 6, 6), 4.0)));
        assert!(!outer.encloses(&cube((7, 0, 0), 4.0)));
        assert!(outer.encloses(&outer));
    }

    #[test]
    fn inflation_detects_near_misses() {
        let a = cube((0, 0, 0), 4.0);
        let b = cube((5, 0, 0), 4.0);
        assert!(!a.collides_with(&b));
        assert!(a.inflate(1.5).collides_with(&b));
        assert!(!a.inflate(1.0).collides_with(&b));
    }
}
