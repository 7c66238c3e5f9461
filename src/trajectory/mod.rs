//! Trajectory recording and the episode interaction loop.
//!
//! This module provides:
//! - [`types::Trajectory`] -- the record of one episode's observations,
//!   actions, rewards, and termination flag, with its alignment invariant.
//! - [`runner::interact`] -- the lazy interaction loop that produces
//!   trajectory steps by querying the value model, the action chooser, and
//!   the environment in turn.

pub mod runner;
pub mod types;

// Re-export the most commonly used items at the module level.
pub use runner::{interact, Interaction, StepOutcome};
pub use types::Trajectory;
