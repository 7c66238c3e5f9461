//! The episode interaction loop.
//!
//! [`interact`] wires a value estimator, an environment, and an action
//! chooser together and advances them one step at a time, recording every
//! transition into a [`Trajectory`]. Per step, in order:
//!   1. query the estimator for the expected reward of every action at the
//!      last recorded observation,
//!   2. ask the chooser for a concrete action,
//!   3. apply the action to the environment,
//!   4. register the resulting transition into the trajectory,
//!   5. emit the step to the caller.
//!
//! The loop is lazy: each step is produced on demand from the iterator, so
//! the caller can interleave arbitrary logic between steps or stop pulling at
//! any point, leaving the trajectory at its last fully-registered step.
//! Dropping the iterator and calling [`interact`] again resumes the same
//! episode.

use anyhow::{Context, Result};
use tracing::debug;

use crate::choice::ActionChooser;
use crate::env::{EnvStep, Environment};
use crate::model::ValueEstimator;
use crate::trajectory::Trajectory;

/// One completed interaction step, as seen by the caller.
#[derive(Debug, Clone)]
pub struct StepOutcome<O> {
    /// The observation produced by the action.
    pub observation: O,
    /// The reward received for the action.
    pub reward: f64,
    /// Whether the environment signalled termination.
    pub done: bool,
    /// Environment-specific metadata for this step.
    pub info: serde_json::Value,
    /// The action that was applied.
    pub action: usize,
}

/// Start (or resume) the interaction loop for one episode.
///
/// Returns a lazy, finite iterator with one element per environment step,
/// ending exactly when the environment reports `done`. On the first step of a
/// fresh trajectory the environment is reset and its initial observation
/// recorded; a trajectory seeded with an initial observation skips the reset.
/// The action-space size is taken from the trajectory if fixed there, and
/// inferred once from the environment otherwise.
///
/// A collaborator failure is yielded as a final `Err` element and ends the
/// episode with the trajectory still at its last fully-registered step; there
/// is no partial registration. Interacting with a finished trajectory yields
/// nothing.
pub fn interact<'a, E, V, C>(
    trajectory: &'a mut Trajectory<E::Observation>,
    model: &'a V,
    environment: &'a mut E,
    action_chooser: &'a mut C,
) -> Interaction<'a, E, V, C>
where
    E: Environment,
    E::Observation: Clone,
    V: ValueEstimator<Observation = E::Observation>,
    C: ActionChooser<E::Observation>,
{
    Interaction {
        trajectory,
        model,
        environment,
        action_chooser,
        step_index: 0,
        halted: false,
    }
}

/// The iterator returned by [`interact`].
pub struct Interaction<'a, E, V, C>
where
    E: Environment,
{
    trajectory: &'a mut Trajectory<E::Observation>,
    model: &'a V,
    environment: &'a mut E,
    action_chooser: &'a mut C,
    /// 0-based index within this call, handed to the chooser. Restarts when
    /// a new `interact` call resumes the episode.
    step_index: usize,
    halted: bool,
}

impl<E, V, C> Interaction<'_, E, V, C>
where
    E: Environment,
    E::Observation: Clone,
    V: ValueEstimator<Observation = E::Observation>,
    C: ActionChooser<E::Observation>,
{
    fn advance(&mut self) -> Result<StepOutcome<E::Observation>> {
        let action_space_size = match self.trajectory.action_space_size() {
            Some(size) => size,
            None => self
                .trajectory
                .fix_action_space_size(self.environment.action_space_size()),
        };

        if self.trajectory.observations().is_empty() {
            let initial = self.environment.reset()?;
            self.trajectory.seed_initial_observation(initial);
            debug!(trajectory = self.trajectory.id(), "environment reset");
        }

        let expected_rewards = {
            let observation = self
                .trajectory
                .latest_observation()
                .context("trajectory has no observation after reset")?;
            self.model.expected_rewards(observation, action_space_size)?
        };

        let action = self
            .action_chooser
            .choose(&expected_rewards, self.step_index, self.trajectory);

        let EnvStep {
            observation,
            reward,
            done,
            info,
        } = self.environment.step(action)?;

        self.trajectory
            .register_step(observation.clone(), reward, action, done);
        self.step_index += 1;

        if done {
            debug!(
                trajectory = self.trajectory.id(),
                steps = self.trajectory.step_count(),
                reward = self.trajectory.total_reward(),
                "episode finished"
            );
        }

        Ok(StepOutcome {
            observation,
            reward,
            done,
            info,
            action,
        })
    }
}

impl<E, V, C> Iterator for Interaction<'_, E, V, C>
where
    E: Environment,
    E::Observation: Clone,
    V: ValueEstimator<Observation = E::Observation>,
    C: ActionChooser<E::Observation>,
{
    type Item = Result<StepOutcome<E::Observation>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted || self.trajectory.is_finished() {
            return None;
        }
        match self.advance() {
            Ok(outcome) => {
                if outcome.done {
                    self.halted = true;
                }
                Some(Ok(outcome))
            }
            Err(error) => {
                self.halted = true;
                Some(Err(error))
            }
        }
    }
}
