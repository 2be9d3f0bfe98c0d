use std::sync::LazyLock;
use std::time::Instant;

pub mod agent;
pub mod config;
pub mod io;
pub mod opt;
pub mod reward;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
