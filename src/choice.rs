//! Action-selection policies.
//!
//! The interaction loop is agnostic to how actions are chosen: each step it
//! hands the chooser the freshest expected-reward vector, the 0-based step
//! index within the current `interact` call, and the trajectory so far, and
//! takes back a concrete action index. Stateful policies (a decaying epsilon,
//! say) can read episode history off the trajectory.
//!
//! Stochastic choosers take a caller-injected RNG rather than touching
//! process-wide random state, so a seeded `StdRng` makes an episode fully
//! reproducible.

use ordered_float::OrderedFloat;
use rand::Rng;

use crate::trajectory::Trajectory;

/// The action-selection contract.
pub trait ActionChooser<O> {
    /// Pick an action index given the expected reward per action.
    fn choose(
        &mut self,
        expected_rewards: &[f64],
        step_index: usize,
        trajectory: &Trajectory<O>,
    ) -> usize;
}

/// Any closure of the right shape is a chooser.
impl<O, F> ActionChooser<O> for F
where
    F: FnMut(&[f64], usize, &Trajectory<O>) -> usize,
{
    fn choose(
        &mut self,
        expected_rewards: &[f64],
        step_index: usize,
        trajectory: &Trajectory<O>,
    ) -> usize {
        self(expected_rewards, step_index, trajectory)
    }
}

/// Always exploit: pick the action with the highest expected reward.
///
/// Ties break toward the higher action index. An empty reward vector yields
/// action 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Greedy {
    pub(crate) fn argmax(expected_rewards: &[f64]) -> usize {
        expected_rewards
            .iter()
            .enumerate()
            .max_by_key(|(_, &value)| OrderedFloat(value))
            .map(|(index, _)| index)
            .unwrap_or(0)
    }
}

impl<O> ActionChooser<O> for Greedy {
    fn choose(&mut self, expected_rewards: &[f64], _step: usize, _trajectory: &Trajectory<O>) -> usize {
        Self::argmax(expected_rewards)
    }
}

/// Explore uniformly with probability `epsilon`, otherwise exploit greedily.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<R> {
    epsilon: f64,
    rng: R,
}

impl<R: Rng> EpsilonGreedy<R> {
    /// `epsilon` is the exploration probability, in `[0, 1]`.
    pub fn new(epsilon: f64, rng: R) -> Self {
        Self { epsilon, rng }
    }
}

impl<O, R: Rng> ActionChooser<O> for EpsilonGreedy<R> {
    fn choose(&mut self, expected_rewards: &[f64], _step: usize, _trajectory: &Trajectory<O>) -> usize {
        if self.rng.gen::<f64>() < self.epsilon {
            self.rng.gen_range(0..expected_rewards.len().max(1))
        } else {
            Greedy::argmax(expected_rewards)
        }
    }
}

/// Ignore the estimates entirely and act uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomDiscrete<R> {
    rng: R,
}

impl<R: Rng> RandomDiscrete<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<O, R: Rng> ActionChooser<O> for RandomDiscrete<R> {
    fn choose(&mut self, expected_rewards: &[f64], _step: usize, _trajectory: &Trajectory<O>) -> usize {
        self.rng.gen_range(0..expected_rewards.len().max(1))
    }
}
