//! A scripted environment for tests.
//!
//! [`MockEnv`] replays a fixed sequence of transitions regardless of the
//! actions applied, and records those actions so tests can assert on them.

use anyhow::{bail, Result};
use serde_json::json;

use super::traits::{EnvStep, Environment};

/// One canned transition returned by [`MockEnv::step`].
#[derive(Debug, Clone)]
pub struct MockTransition<O> {
    /// The observation the step produces.
    pub observation: O,
    /// The reward for the transition.
    pub reward: f64,
    /// Whether this transition ends the episode.
    pub done: bool,
}

impl<O> MockTransition<O> {
    /// A non-terminal transition.
    pub fn step(observation: O, reward: f64) -> Self {
        Self {
            observation,
            reward,
            done: false,
        }
    }

    /// A terminal transition.
    pub fn terminal(observation: O, reward: f64) -> Self {
        Self {
            observation,
            reward,
            done: true,
        }
    }
}

/// An environment that replays a fixed script.
///
/// `reset` rewinds to the start of the script; `step` returns the next
/// scripted transition no matter which action was applied. Stepping past the
/// end of the script is an error.
#[derive(Debug, Clone)]
pub struct MockEnv<O> {
    initial_observation: O,
    script: Vec<MockTransition<O>>,
    cursor: usize,
    action_space_size: usize,
    actions_seen: Vec<usize>,
}

impl<O: Clone> MockEnv<O> {
    /// Create a mock that serves `initial_observation` on reset and then the
    /// transitions in `script`, in order.
    pub fn new(initial_observation: O, script: Vec<MockTransition<O>>, action_space_size: usize) -> Self {
        Self {
            initial_observation,
            script,
            cursor: 0,
            action_space_size,
            actions_seen: Vec::new(),
        }
    }

    /// The actions applied since the last reset, in order.
    pub fn actions_seen(&self) -> &[usize] {
        &self.actions_seen
    }
}

impl<O: Clone> Environment for MockEnv<O> {
    type Observation = O;

    fn reset(&mut self) -> Result<O> {
        self.cursor = 0;
        self.actions_seen.clear();
        Ok(self.initial_observation.clone())
    }

    fn step(&mut self, action: usize) -> Result<EnvStep<O>> {
        let Some(transition) = self.script.get(self.cursor) else {
            bail!("mock script exhausted after {} steps", self.cursor);
        };
        self.actions_seen.push(action);
        self.cursor += 1;
        Ok(EnvStep {
            observation: transition.observation.clone(),
            reward: transition.reward,
            done: transition.done,
            info: json!({ "scripted_step": self.cursor - 1 }),
        })
    }

    fn action_space_size(&self) -> usize {
        self.action_space_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_script_in_order() {
        let mut env = MockEnv::new(
            0_i32,
            vec![
                MockTransition::step(1, 0.5),
                MockTransition::terminal(2, 1.0),
            ],
            3,
        );

        assert_eq!(env.reset().unwrap(), 0);
        assert_eq!(env.action_space_size(), 3);

        let first = env.step(2).unwrap();
        assert_eq!(first.observation, 1);
        assert!((first.reward - 0.5).abs() < f64::EPSILON);
        assert!(!first.done);

        let second = env.step(0).unwrap();
        assert_eq!(second.observation, 2);
        assert!(second.done);

        assert_eq!(env.actions_seen(), &[2, 0]);
    }

    #[test]
    fn errors_when_script_is_exhausted() {
        let mut env = MockEnv::new(0_i32, vec![MockTransition::step(1, 0.0)], 2);
        env.reset().unwrap();
        env.step(0).unwrap();
        assert!(env.step(0).is_err());
    }

    #[test]
    fn reset_rewinds_the_script() {
        let mut env = MockEnv::new(0_i32, vec![MockTransition::terminal(1, 1.0)], 2);
        env.reset().unwrap();
        env.step(1).unwrap();

        assert_eq!(env.reset().unwrap(), 0);
        assert!(env.actions_seen().is_empty());
        let replayed = env.step(0).unwrap();
        assert_eq!(replayed.observation, 1);
    }
}
