use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use rand::Rng;

use crate::agent::{ActionId, State};

/// Tabular estimate of the expected discounted reward of every (state, action) pair.
///
/// Only pairs that have been written are stored. Reading any other pair yields 0.0,
/// through [`QTable::get`] and consistently through [`QTable::max_value`] and [`QTable::sample_best_action`],
/// which treat every unseen action of a state as having value 0.0.
/// Rows are ordered by action id, so that sampling with a seeded rng is reproducible.
#[derive(Clone, Debug)]
pub struct QTable {
    rows: HashMap<State, BTreeMap<ActionId, f64>>,
    n_actions: usize,
    n_entries: usize,
}

impl QTable {
    pub const DEFAULT_VALUE: f64 = 0.0;

    pub fn new(n_actions: usize) -> Self {
        assert!(n_actions > 0, "the action set cannot be empty");
        QTable {
            rows: HashMap::new(),
            n_actions,
            n_entries: 0,
        }
    }

    /// Value of the pair, or [`QTable::DEFAULT_VALUE`] if it was never written
    pub fn get(&self, state: &State, action: ActionId) -> f64 {
        self.rows
            .get(state)
            .and_then(|row| row.get(&action))
            .copied()
            .unwrap_or(Self::DEFAULT_VALUE)
    }

    pub fn set(&mut self, state: State, action: ActionId, value: f64) {
        debug_assert!(action < self.n_actions, "action {action} out of range");
        debug_assert!(value.is_finite(), "non-finite value {value} for {state}");
        let row = self.rows.entry(state).or_default();
        if row.insert(action, value).is_none() {
            self.n_entries += 1;
        }
    }

    /// Maximum value over all actions of `state`
    pub fn max_value(&self, state: &State) -> f64 {
        match self.rows.get(state) {
            None => Self::DEFAULT_VALUE,
            Some(row) => {
                let seen_max = row.values().copied().fold(f64::NEG_INFINITY, f64::max);
                match row.len() < self.n_actions {
                    true => seen_max.max(Self::DEFAULT_VALUE),
                    false => seen_max,
                }
            }
        }
    }

    /// Draws uniformly among all actions of `state` that attain [`QTable::max_value`].
    pub fn sample_best_action(&self, state: &State, rng: &mut impl Rng) -> ActionId {
        let Some(row) = self.rows.get(state) else {
            return rng.random_range(0..self.n_actions);
        };
        let max = self.max_value(state);

        if row.len() < self.n_actions && max == Self::DEFAULT_VALUE {
            //ties are all unseen actions and the stored ones with the default value
            let excluded = row
                .iter()
                .filter(|(_, v)| **v != Self::DEFAULT_VALUE)
                .map(|(a, _)| *a)
                .collect_vec();
            let k = rng.random_range(0..self.n_actions - excluded.len());
            nth_not_excluded(k, &excluded)
        } else {
            let best = row
                .iter()
                .filter(|(_, v)| **v == max)
                .map(|(a, _)| *a)
                .collect_vec();
            best[rng.random_range(0..best.len())]
        }
    }

    /// Number of states with at least one stored value
    pub fn n_states(&self) -> usize {
        self.rows.len()
    }

    /// Number of stored (state, action) pairs
    pub fn n_entries(&self) -> usize {
        self.n_entries
    }

    pub fn is_empty(&self) -> bool {
        self.n_entries == 0
    }
}

/// The `k`-th action id (0-based) that does not appear in `excluded` (sorted ascending)
fn nth_not_excluded(k: usize, excluded: &[ActionId]) -> ActionId {
    let mut id = k;
    for &e in excluded {
        if e <= id {
            id += 1;
        } else {
            break;
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use std::collections::HashSet;
    use test_case::test_case;

    const S: State = State {
        fill_pct: 12,
        n_placed: 3,
    };

    #[test]
    fn unseen_pairs_read_as_zero() {
        let mut table = QTable::new(10);
        assert_eq!(table.get(&S, 4), 0.0);
        assert_eq!(table.max_value(&S), 0.0);
        assert!(table.is_empty());

        table.set(S, 4, -3.0);
        table.set(S, 4, -2.0);
        assert_eq!(table.get(&S, 4), -2.0);
        assert_eq!(table.get(&S, 5), 0.0);
        assert_eq!(table.get(&State::default(), 4), 0.0);
        assert_eq!(table.n_entries(), 1);
        assert_eq!(table.n_states(), 1);
    }

    #[test]
    fn max_value_accounts_for_unseen_actions() {
        let mut table = QTable::new(3);
        table.set(S, 0, -5.0);
        table.set(S, 1, -1.0);
        // action 2 is unseen and reads as 0.0
        assert_eq!(table.max_value(&S), 0.0);

        table.set(S, 2, -7.0);
        assert_eq!(table.max_value(&S), -1.0);

        table.set(S, 0, 4.5);
        assert_eq!(table.max_value(&S), 4.5);
    }

    #[test_case(&[], 0, 0)]
    #[test_case(&[0], 0, 1)]
    #[test_case(&[1, 3], 1, 2)]
    #[test_case(&[1, 3], 2, 4)]
    #[test_case(&[0, 1, 2], 0, 3)]
    #[test_case(&[2, 5, 6], 4, 7)]
    fn skips_excluded_ids(excluded: &[usize], k: usize, expected: usize) {
        assert_eq!(nth_not_excluded(k, excluded), expected);
    }

    #[test]
    fn sampling_picks_a_maximal_action() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut table = QTable::new(5);
        for (a, v) in [(0, 1.0), (1, 3.0), (2, 3.0), (3, -1.0), (4, 2.0)] {
            table.set(S, a, v);
        }

        let sampled: HashSet<_> = (0..200)
            .map(|_| table.sample_best_action(&S, &mut rng))
            .collect();
        assert_eq!(sampled, HashSet::from([1, 2]));
    }

    #[test]
    fn sampling_breaks_ties_among_unseen_actions() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut table = QTable::new(6);
        table.set(S, 1, -1000.0);
        table.set(S, 3, 0.0);
        table.set(S, 4, -2.0);

        let sampled: HashSet<_> = (0..500)
            .map(|_| table.sample_best_action(&S, &mut rng))
            .collect();
        assert_eq!(sampled, HashSet::from([0, 2, 3, 5]));
    }

    #[test]
    fn sampling_on_an_unseen_state_covers_every_action() {
        let mut rng = SmallRng::seed_from_u64(2);
        let table = QTable::new(4);
        let sampled: HashSet<_> = (0..200)
            .map(|_| table.sample_best_action(&S, &mut rng))
            .collect();
        assert_eq!(sampled.len(), 4);
    }

    #[test]
    fn sampling_is_reproducible() {
        let mut table = QTable::new(50);
        for a in (0..50).step_by(7) {
            table.set(S, a, 1.0);
        }
        let draw = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            (0..20)
                .map(|_| table.sample_best_action(&S, &mut rng))
                .collect_vec()
        };
        assert_eq!(draw(42), draw(42));
    }
}
