use anyhow::{Context, Result, ensure};
use boxpack::geometry::primitives::Dimensions;
use boxpack::io::svg::SvgDrawOptions;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Configuration for the Q-learning trainer.
/// Fields missing from a config file take their value from [`QLConfig::default`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct QLConfig {
    /// Extents of the container to pack the boxes in
    pub container_dims: Dimensions,
    /// Minimum clearance between placed boxes. If undefined, boxes are allowed to touch
    pub min_item_separation: Option<f32>,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of episodes to train for
    pub n_episodes: usize,
    /// Distance between two consecutive candidate positions along every axis of the container
    pub grid_step: u32,
    /// Step size (alpha) of the temporal-difference update
    pub learning_rate: f64,
    /// Discount factor (gamma) of future rewards
    pub discount_factor: f64,
    /// Probability of taking a uniformly random action instead of the best known one
    pub epsilon: f64,
    /// Amount by which epsilon is lowered after every episode, 0.0 keeps it constant
    pub epsilon_decay: f64,
    /// Epsilon is never decayed below this value
    pub epsilon_min: f64,
    /// Progress is logged every `log_interval` episodes (and after the first one)
    pub log_interval: usize,
    /// Constants of the shaping reward
    pub reward: RewardConfig,
    /// Optional SVG drawing options
    pub svg_draw_options: SvgDrawOptions,
}

impl QLConfig {
    /// Exploration rate to use during `episode` (1-based).
    pub fn epsilon_at(&self, episode: usize) -> f64 {
        match self.epsilon_decay > 0.0 {
            true => {
                let decayed = self.epsilon - self.epsilon_decay * episode.saturating_sub(1) as f64;
                decayed.max(self.epsilon_min)
            }
            false => self.epsilon,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let Dimensions { x, y, z } = self.container_dims;
        Dimensions::try_new(x, y, z).context("invalid container dimensions")?;
        if let Some(s) = self.min_item_separation {
            ensure!(s.is_finite() && s >= 0.0, "invalid item separation: {s}");
        }
        ensure!(self.n_episodes > 0, "at least one episode is required");
        ensure!(self.grid_step > 0, "grid step must be positive");
        ensure!(
            self.learning_rate > 0.0 && self.learning_rate <= 1.0,
            "learning rate must be in (0, 1]: {}",
            self.learning_rate
        );
        ensure!(
            (0.0..=1.0).contains(&self.discount_factor),
            "discount factor must be in [0, 1]: {}",
            self.discount_factor
        );
        ensure!(
            (0.0..=1.0).contains(&self.epsilon),
            "epsilon must be in [0, 1]: {}",
            self.epsilon
        );
        ensure!(
            self.epsilon_decay >= 0.0 && (0.0..=1.0).contains(&self.epsilon_min),
            "invalid epsilon decay schedule: decay {}, min {}",
            self.epsilon_decay,
            self.epsilon_min
        );
        ensure!(self.log_interval > 0, "log interval must be positive");
        self.reward.validate()
    }
}

impl Default for QLConfig {
    fn default() -> Self {
        Self {
            container_dims: Dimensions {
                x: 100.0,
                y: 100.0,
                z: 100.0,
            },
            min_item_separation: None,
            prng_seed: Some(0),
            n_episodes: 500,
            grid_step: 5,
            learning_rate: 0.2,
            discount_factor: 0.95,
            epsilon: 0.3,
            epsilon_decay: 0.0,
            epsilon_min: 0.05,
            log_interval: 50,
            reward: RewardConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

/// Constants of the shaping reward, see [`crate::reward`]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RewardConfig {
    /// Awarded for every accepted placement
    pub base: f64,
    /// (fill ratio threshold, bonus) pairs in ascending order.
    /// Only the bonus of the highest threshold strictly exceeded by the fill ratio is awarded.
    pub fill_bonuses: [(f32, f64); 6],
    /// Awarded per box placed so far
    pub per_placed_bonus: f64,
    /// Awarded per axis on which the box is close to one of the container walls
    pub wall_bonus: f64,
    /// Maximum distance to a wall to still be considered close
    pub wall_tolerance: f32,
    /// Penalty per unit of the x, y and z coordinate of the placement
    pub position_penalty: [f64; 3],
    /// Awarded if any coordinate of the placement is zero
    pub origin_bonus: f64,
    /// Reward for a candidate that is out of bounds or overlaps a placed box
    pub rejection_penalty: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            base: 2000.0,
            fill_bonuses: [
                (0.70, 100.0),
                (0.75, 200.0),
                (0.80, 400.0),
                (0.85, 600.0),
                (0.90, 800.0),
                (0.95, 1000.0),
            ],
            per_placed_bonus: 50.0,
            wall_bonus: 300.0,
            wall_tolerance: 2.0,
            position_penalty: [1.0, 2.0, 5.0],
            origin_bonus: 150.0,
            rejection_penalty: -1000.0,
        }
    }
}

impl RewardConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.fill_bonuses
                .iter()
                .tuple_windows()
                .all(|((t1, b1), (t2, b2))| t1 < t2 && b1 < b2),
            "fill bonus thresholds and bonuses must be strictly increasing: {:?}",
            self.fill_bonuses
        );
        ensure!(
            self.wall_tolerance >= 0.0,
            "wall tolerance must be non-negative: {}",
            self.wall_tolerance
        );
        Ok(())
    }
}
