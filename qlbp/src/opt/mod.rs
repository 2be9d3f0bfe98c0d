pub mod trainer;

#[doc(inline)]
pub use trainer::{EpisodeOutcome, QLTrainer, item_placement_order};
