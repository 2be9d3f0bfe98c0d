use std::fmt::{Display, Formatter};

use boxpack::entities::Layout;

/// Lossy discretization of a [`Layout`], used as the lookup key of the [`QTable`](crate::agent::QTable).
/// Two layouts with the same rounded fill ratio and the same number of placed items map to the same state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct State {
    /// Fill ratio rounded to two decimals, in hundredths
    pub fill_pct: u16,
    /// Number of items placed so far
    pub n_placed: usize,
}

impl State {
    pub fn new(fill_ratio: f64, n_placed: usize) -> Self {
        let fill_pct = (fill_ratio.clamp(0.0, 1.0) * 100.0).round() as u16;
        State { fill_pct, n_placed }
    }

    pub fn observe(layout: &Layout) -> Self {
        //ratio in double precision
        let fill_ratio = layout.placed_volume() as f64 / layout.container.volume() as f64;
        State::new(fill_ratio, layout.n_placed())
    }

    /// The rounded fill ratio
    pub fn fill(&self) -> f64 {
        self.fill_pct as f64 / 100.0
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {})", self.fill(), self.n_placed)
    }
}
