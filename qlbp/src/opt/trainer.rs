use std::cmp::Reverse;
use std::time::Instant;

use boxpack::entities::{Instance, Layout, Solution};
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::agent::{Action, ActionSpace, QAgent, State};
use crate::config::QLConfig;
use crate::reward::{placement_reward, rejection_reward};

/// Trains a [`QAgent`] to pack the items of an [`Instance`] over a number of episodes.
/// Every episode starts from an empty layout and presents each item exactly once, in order of descending volume.
/// The densest layout encountered is retained.
pub struct QLTrainer {
    pub instance: Instance,
    pub config: QLConfig,
    pub agent: QAgent,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    /// Best solution so far, an empty layout before the first improvement
    pub best: Solution,
    /// Number of episodes run so far
    pub episode: usize,
    placement_order: Vec<usize>,
}

/// Summary of a single episode
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpisodeOutcome {
    pub episode: usize,
    pub density: f32,
    pub n_placed: usize,
    /// True if the episode strictly improved on the best solution
    pub improved: bool,
}

impl QLTrainer {
    pub fn new(instance: Instance, config: QLConfig, rng: SmallRng) -> Self {
        assert!(config.n_episodes > 0);
        let action_space = ActionSpace::new(&instance.container, config.grid_step);
        let agent = QAgent::new(action_space, &config);
        let placement_order = item_placement_order(&instance);
        let best = Solution {
            layout_snapshot: Layout::new(instance.container).save(),
            density: 0.0,
            n_placed: 0,
            episode: 0,
            time_stamp: Instant::now(),
        };
        Self {
            instance,
            config,
            agent,
            rng,
            best,
            episode: 0,
            placement_order,
        }
    }

    /// Runs all remaining episodes and returns the best solution found.
    pub fn solve(&mut self) -> Solution {
        let start = Instant::now();
        info!(
            "[QL] training on {} items for {} episodes ({} actions per state)",
            self.instance.n_items(),
            self.config.n_episodes,
            self.agent.action_space.len().separate_with_commas()
        );

        while self.episode < self.config.n_episodes {
            let outcome = self.run_episode();
            if outcome.improved {
                debug!(
                    "[QL] new best in episode {}: {} items, fill {:.3}%",
                    outcome.episode,
                    outcome.n_placed,
                    outcome.density * 100.0
                );
            }
            if outcome.episode == 1 || outcome.episode % self.config.log_interval == 0 {
                let stats = &self.agent.stats;
                info!(
                    "[QL] episode {}/{} | placed: {} | fill: {:.2}% | success rate: {:.3} | mean reward: {:.1} | epsilon: {:.3}",
                    outcome.episode,
                    self.config.n_episodes,
                    outcome.n_placed,
                    outcome.density * 100.0,
                    stats.success_rate(),
                    stats.mean_reward(),
                    self.agent.epsilon
                );
            }
        }

        info!(
            "[QL] training finished in {:.3}ms ({} decisions, {} q-values over {} states)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.agent.stats.n_decisions.separate_with_commas(),
            self.agent.q_table.n_entries().separate_with_commas(),
            self.agent.q_table.n_states().separate_with_commas()
        );
        info!(
            "[QL] best solution (episode {}, found after {:.3}ms) contains {} items with a density of {:.3}%",
            self.best.episode,
            self.best.time_stamp.saturating_duration_since(start).as_secs_f64() * 1000.0,
            self.best.n_placed,
            self.best.density * 100.0
        );

        self.best.clone()
    }

    /// Presents every item once to the agent, starting from an empty layout.
    /// Learns from every decision and retains the resulting layout if it is strictly denser than the best one.
    pub fn run_episode(&mut self) -> EpisodeOutcome {
        self.episode += 1;
        self.agent.epsilon = self.config.epsilon_at(self.episode);
        let mut layout = Layout::new(self.instance.container);

        for &item_id in &self.placement_order {
            let item = self.instance.item(item_id);
            let state = State::observe(&layout);
            let action_id = self.agent.choose_action(&state, &mut self.rng);
            let Action { position, rotation } = self.agent.action(action_id);

            let (reward, accepted) = match layout.can_place(position, item.rotated(rotation).dims) {
                true => {
                    let placed = *layout.place_item(item, position, rotation);
                    (placement_reward(&placed, &layout, &self.config.reward), true)
                }
                false => (rejection_reward(&self.config.reward), false),
            };

            let next_state = State::observe(&layout);
            self.agent.update(&state, action_id, reward, &next_state);
            self.agent.stats.record(reward, accepted);
        }

        debug_assert!(layout.is_feasible());

        let density = layout.density();
        let improved = density > self.best.density;
        if improved {
            let mut layout_snapshot = layout.save();
            layout_snapshot.retain_enclosed();
            self.best = Solution {
                layout_snapshot,
                density,
                n_placed: layout.n_placed(),
                episode: self.episode,
                time_stamp: Instant::now(),
            };
        }

        EpisodeOutcome {
            episode: self.episode,
            density,
            n_placed: layout.n_placed(),
            improved,
        }
    }
}

/// Item ids sorted by descending volume (before rotation). Items of equal volume keep their input order.
pub fn item_placement_order(instance: &Instance) -> Vec<usize> {
    (0..instance.n_items())
        .sorted_by_key(|&id| Reverse(OrderedFloat(instance.item(id).volume())))
        .collect_vec()
}
