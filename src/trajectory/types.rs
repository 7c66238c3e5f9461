//! The trajectory record of one episode.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full record of one episode: every observation the environment
/// produced, every action taken, and every reward received, plus the
/// termination flag.
///
/// A trajectory always holds one more observation than it holds actions or
/// rewards: the initial observation precedes any action, and each registered
/// step appends exactly one observation, one action, and one reward. Index
/// `i` in `actions`/`rewards` describes the transition from `observations[i]`
/// to `observations[i + 1]`.
///
/// Fields are private so that all mutation funnels through
/// [`register_step`](Trajectory::register_step) (plus the runner's
/// initial-observation seeding), which keeps the alignment intact at every
/// point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory<O> {
    /// Unique identifier (UUID v4), for correlating log lines across episodes.
    id: String,
    observations: Vec<O>,
    actions: Vec<usize>,
    rewards: Vec<f64>,
    finished: bool,
    /// Fixed once known, either supplied at construction or inferred from the
    /// environment on first use.
    action_space_size: Option<usize>,
}

impl<O> Trajectory<O> {
    /// An empty trajectory. The runner will reset the environment and seed
    /// the initial observation on the first interaction step.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            observations: Vec::new(),
            actions: Vec::new(),
            rewards: Vec::new(),
            finished: false,
            action_space_size: None,
        }
    }

    /// A trajectory seeded with an already-obtained initial observation; the
    /// runner will skip the environment reset.
    pub fn with_initial_observation(observation: O) -> Self {
        let mut trajectory = Self::new();
        trajectory.observations.push(observation);
        trajectory
    }

    /// Fix the action-space size up front instead of inferring it from the
    /// environment. Has no effect if the size is already fixed.
    pub fn with_action_space_size(mut self, size: usize) -> Self {
        self.action_space_size.get_or_insert(size);
        self
    }

    /// Register one completed step: `action` was applied to the last recorded
    /// observation and produced `observation` and `reward`.
    ///
    /// This is the only step mutator. `finished` latches: once the
    /// environment has signalled termination it stays set.
    pub fn register_step(&mut self, observation: O, reward: f64, action: usize, done: bool) {
        self.observations.push(observation);
        self.actions.push(action);
        self.rewards.push(reward);
        if done {
            self.finished = true;
        }
    }

    /// Number of completed transitions.
    ///
    /// One less than the number of recorded observations once the trajectory
    /// is seeded; callers must not confuse the two.
    pub fn step_count(&self) -> usize {
        self.rewards.len()
    }

    /// Sum of all recorded rewards.
    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn observations(&self) -> &[O] {
        &self.observations
    }

    pub fn actions(&self) -> &[usize] {
        &self.actions
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Whether the environment has signalled termination.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The most recent observation, if the trajectory has been seeded.
    pub fn latest_observation(&self) -> Option<&O> {
        self.observations.last()
    }

    /// The action-space size, once supplied or inferred.
    pub fn action_space_size(&self) -> Option<usize> {
        self.action_space_size
    }

    /// Record the initial observation obtained from an environment reset.
    /// Only the runner calls this, and only on an empty trajectory.
    pub(crate) fn seed_initial_observation(&mut self, observation: O) {
        debug_assert!(self.observations.is_empty());
        self.observations.push(observation);
    }

    /// Fix the action-space size if it is not already fixed, and return the
    /// fixed value. Later calls with a different size are ignored.
    pub(crate) fn fix_action_space_size(&mut self, size: usize) -> usize {
        *self.action_space_size.get_or_insert(size)
    }
}

impl<O> Default for Trajectory<O> {
    fn default() -> Self {
        Self::new()
    }
}
