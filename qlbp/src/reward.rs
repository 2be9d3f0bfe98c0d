//! Shaping reward for the placement decisions of the agent.
//!
//! An accepted placement is scored as the sum of:
//! * a base reward
//! * the bonus of the highest fill ratio threshold strictly exceeded (non-cumulative)
//! * a bonus per item placed so far
//! * a bonus per axis on which the item lies against, or close to, either wall of the container
//! * a penalty proportional to each coordinate of the position, heaviest for z and lightest for x
//! * a bonus if any coordinate is zero
//!
//! A rejected candidate always yields the same fixed penalty.

use boxpack::entities::{Layout, PlacedItem};

use crate::config::RewardConfig;

/// Reward for `placed`, which has just been committed to `layout`.
/// The fill ratio and placed count are those of the layout after the commit.
pub fn placement_reward(placed: &PlacedItem, layout: &Layout, config: &RewardConfig) -> f64 {
    let fill = layout.density();
    let fill_bonus = config
        .fill_bonuses
        .iter()
        .rev()
        .find(|(threshold, _)| fill > *threshold)
        .map_or(0.0, |(_, bonus)| *bonus);

    let pos = placed.position.as_array();
    let ext = placed.item.dims.as_array();
    let cont = layout.container.dims.as_array();
    let tol = config.wall_tolerance;

    let n_near_wall = (0..3)
        .filter(|&i| {
            let p = pos[i] as f32;
            p <= tol || p + ext[i] >= cont[i] - tol
        })
        .count();

    let position_penalty: f64 = (0..3)
        .map(|i| config.position_penalty[i] * pos[i] as f64)
        .sum();

    let origin_bonus = match placed.position.touches_origin_plane() {
        true => config.origin_bonus,
        false => 0.0,
    };

    config.base
        + fill_bonus
        + config.per_placed_bonus * layout.n_placed() as f64
        + config.wall_bonus * n_near_wall as f64
        - position_penalty
        + origin_bonus
}

/// Reward for a candidate that is out of bounds or overlaps a placed item, regardless of the layout
pub fn rejection_reward(config: &RewardConfig) -> f64 {
    config.rejection_penalty
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxpack::entities::{Container, Item};
    use boxpack::geometry::Rotation;
    use boxpack::geometry::primitives::{Dimensions, Position};
    use test_case::test_case;

    fn layout(side: f32) -> Layout {
        Layout::new(Container::new(Dimensions::try_new(side, side, side).unwrap()))
    }

    fn place(layout: &mut Layout, id: usize, dims: [f32; 3], pos: (u32, u32, u32)) -> f64 {
        let item = Item::new(id, Dimensions::from(dims), 1.0);
        let pi = *layout.place_item(&item, Position::from(pos), Rotation::XYZ);
        placement_reward(&pi, layout, &RewardConfig::default())
    }

    #[test_case((0, 0, 0), 3100.0; "origin corner")]
    #[test_case((45, 45, 45), 1690.0; "center")]
    #[test_case((90, 90, 90), 2050.0 + 900.0 - 720.0; "far corner")]
    #[test_case((2, 50, 50), 2050.0 + 300.0 - 352.0; "within wall tolerance")]
    #[test_case((3, 50, 0), 2050.0 + 300.0 - 103.0 + 150.0; "single zero coordinate")]
    fn reward_of_a_single_box(pos: (u32, u32, u32), expected: f64) {
        let mut layout = layout(100.0);
        assert_eq!(place(&mut layout, 0, [10.0, 10.0, 10.0], pos), expected);
    }

    #[test_case(0.70, 0.0; "threshold not exceeded")]
    #[test_case(0.72, 100.0)]
    #[test_case(0.81, 400.0)]
    #[test_case(0.90, 600.0; "equal to threshold")]
    #[test_case(0.96, 1000.0)]
    fn only_highest_fill_bonus_applies(fill: f32, expected_bonus: f64) {
        let mut layout = layout(10.0);
        // a slab in the origin corner, against the walls on every axis
        let reward = place(&mut layout, 0, [10.0, 10.0, fill * 10.0], (0, 0, 0));
        assert_eq!(reward, 2000.0 + expected_bonus + 50.0 + 900.0 + 150.0);
    }

    #[test]
    fn placed_count_is_rewarded() {
        let mut layout = layout(100.0);
        place(&mut layout, 0, [10.0, 10.0, 10.0], (0, 0, 0));
        let second = place(&mut layout, 1, [10.0, 10.0, 10.0], (45, 45, 45));
        assert_eq!(second, 2000.0 + 2.0 * 50.0 - (45.0 + 90.0 + 225.0));
    }

    #[test]
    fn rejection_is_a_constant() {
        let config = RewardConfig::default();
        assert_eq!(rejection_reward(&config), -1000.0);
    }
}
