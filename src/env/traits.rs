//! Core environment trait and step result type.
//!
//! Any stateful simulator with a reset/step contract implements
//! [`Environment`] so the episode runner can drive it uniformly. Actions are
//! discrete and represented as indices into a fixed action space.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// The result of applying one action to an environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvStep<O> {
    /// The observation produced by the action.
    pub observation: O,
    /// The scalar reward for the transition.
    pub reward: f64,
    /// Whether the episode has terminated.
    pub done: bool,
    /// Arbitrary extra information from the environment (task-specific).
    pub info: serde_json::Value,
}

/// The core environment trait.
pub trait Environment {
    /// The observation type reported after a reset or step.
    type Observation;

    /// Reset the environment and return the initial observation for a new
    /// episode.
    fn reset(&mut self) -> Result<Self::Observation>;

    /// Apply one action to the environment and return the resulting
    /// transition.
    fn step(&mut self, action: usize) -> Result<EnvStep<Self::Observation>>;

    /// Number of discrete actions available.
    fn action_space_size(&self) -> usize;
}
