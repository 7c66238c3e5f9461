//! Reverse-order TD(0) credit assignment over a recorded trajectory.
//!
//! The pass walks the trajectory backward. The bootstrap target for step `k`
//! is computed with the same model that is being updated, so update order
//! matters: updating step `k + 1` before computing the target for step `k`
//! is exactly the TD(0) bootstrap (fit each step to the value of the *next*
//! state), while the opposite order would fit step `k` to a value this same
//! pass is about to revise. The loop must stay strictly descending, with no
//! precomputation of targets and no reordering.

use anyhow::{Context, Result};
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::config::TrainConfig;
use crate::model::{UpdateBatch, ValueEstimator};
use crate::trajectory::Trajectory;

/// One optimization pass over the steps `[start_step, end_step)` of a
/// trajectory, processed in strictly decreasing order.
///
/// Per step `k`, the target is
/// `rewards[k] + discount * max(expected_rewards(observations[k + 1]))`,
/// except at the terminal step, where the bootstrapped future value is
/// dropped. Only the final registered step of a finished trajectory is
/// terminal; the boundary of a narrower training sub-range is not. Each step
/// issues exactly one optimizer update, a singleton batch.
///
/// `end_step = None` trains through the last registered step. Empty ranges,
/// including a trajectory with no registered steps, are no-ops. Backend
/// failures propagate unchanged and abort the pass.
pub fn train<V>(
    trajectory: &Trajectory<V::Observation>,
    model: &mut V,
    config: &TrainConfig,
    start_step: usize,
    end_step: Option<usize>,
) -> Result<()>
where
    V: ValueEstimator,
{
    let end_step = end_step.unwrap_or_else(|| trajectory.step_count());
    if start_step >= end_step {
        return Ok(());
    }

    let action_space_size = trajectory
        .action_space_size()
        .context("action space size is not fixed for this trajectory")?;

    for step in (start_step..end_step).rev() {
        let expected_rewards =
            model.expected_rewards(&trajectory.observations()[step + 1], action_space_size)?;

        // Terminal only at the true end of a finished episode; the edge of a
        // training sub-range never is.
        let terminal = step + 1 == trajectory.step_count() && trajectory.is_finished();
        let bootstrap = if terminal {
            0.0
        } else {
            config.discount * max_expected(&expected_rewards)
        };
        let target = trajectory.rewards()[step] + bootstrap;

        model.optimize(
            UpdateBatch {
                observations: std::slice::from_ref(&trajectory.observations()[step]),
                actions: std::slice::from_ref(&trajectory.actions()[step]),
                targets: &[target],
            },
            config.learning_rate,
        )?;
    }

    debug!(
        trajectory = trajectory.id(),
        steps = end_step - start_step,
        "trained on episode"
    );
    Ok(())
}

fn max_expected(expected_rewards: &[f64]) -> f64 {
    expected_rewards
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, OrderedFloat::into_inner)
}
