use boxpack::io::ext_repr::ExtSolution;
use serde::{Deserialize, Serialize};

use crate::config::QLConfig;

/// Result file of a training run: the best solution, extended with the configuration that produced it
#[derive(Serialize, Deserialize, Clone)]
pub struct QLOutput {
    #[serde(flatten)]
    pub solution: ExtSolution,
    pub config: QLConfig,
}
