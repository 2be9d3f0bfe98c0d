mod action;
mod q_agent;
mod q_table;
mod state;

#[doc(inline)]
pub use action::{Action, ActionId, ActionSpace};

#[doc(inline)]
pub use q_agent::{AgentStats, QAgent};

#[doc(inline)]
pub use q_table::QTable;

#[doc(inline)]
pub use state::State;
