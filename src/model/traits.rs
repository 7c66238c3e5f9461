//! The value-estimator contract.
//!
//! The interaction loop and the TD pass are backend-agnostic: they reach the
//! value model only through [`ValueEstimator`]. An implementation wraps both
//! the function approximator and whatever numerical backend executes it; the
//! backend handle travels inside the implementing type and is never seen by
//! this crate.

use anyhow::Result;

/// One batch of inputs for a single optimization step.
///
/// The three slices are parallel: `observations[i]` and `actions[i]` identify
/// the transition whose value estimate should move toward `targets[i]`.
#[derive(Debug, Clone, Copy)]
pub struct UpdateBatch<'a, O> {
    pub observations: &'a [O],
    pub actions: &'a [usize],
    pub targets: &'a [f64],
}

/// A value-estimating model together with the backend that executes it.
///
/// The `&self`/`&mut self` split mirrors how the episode code uses the model:
/// the interaction loop only queries, the training pass holds the model
/// exclusively for the full duration of its sequential updates.
pub trait ValueEstimator {
    /// The observation type the model consumes.
    type Observation;

    /// Predicted cumulative future reward for every possible action at
    /// `observation`, one value per action (`action_space_size` in total).
    ///
    /// A pure query: no side effects beyond the backend call.
    fn expected_rewards(
        &self,
        observation: &Self::Observation,
        action_space_size: usize,
    ) -> Result<Vec<f64>>;

    /// Apply one gradient-style update moving the estimates for the batch
    /// toward their targets.
    fn optimize(
        &mut self,
        batch: UpdateBatch<'_, Self::Observation>,
        learning_rate: f64,
    ) -> Result<()>;
}
