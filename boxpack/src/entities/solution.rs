use std::time::Instant;

use crate::entities::LayoutSnapshot;

/// The best layout found during a run, retained for export.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Snapshot of the layout, restricted to items verified to lie within the container
    pub layout_snapshot: LayoutSnapshot,
    /// Density of the layout when it was found
    pub density: f32,
    /// Number of items placed in the layout when it was found
    pub n_placed: usize,
    /// Episode (1-based) in which the layout was found
    pub episode: usize,
    /// Instant the solution was created
    pub time_stamp: Instant,
}
