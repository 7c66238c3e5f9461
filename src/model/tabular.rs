//! An in-memory tabular value estimator.
//!
//! Backs the estimator contract with a plain lookup table: one row of
//! action-values per distinct observation, zero for anything never updated.
//! Suitable for small discrete problems, and the standard test double for the
//! interaction loop and the TD pass.

use std::collections::HashMap;
use std::hash::Hash;

use anyhow::Result;

use super::traits::{UpdateBatch, ValueEstimator};

/// A lookup-table value estimator with the incremental update rule
/// `q += learning_rate * (target - q)`.
#[derive(Debug, Clone)]
pub struct TabularValueEstimator<O> {
    values: HashMap<O, Vec<f64>>,
}

impl<O> Default for TabularValueEstimator<O> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<O: Eq + Hash + Clone> TabularValueEstimator<O> {
    /// An empty table; every estimate starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current estimate for a single (observation, action) pair.
    pub fn value(&self, observation: &O, action: usize) -> f64 {
        self.values
            .get(observation)
            .and_then(|row| row.get(action).copied())
            .unwrap_or(0.0)
    }

    /// The row for `observation`, grown with zeros to cover `action`.
    fn row_for(&mut self, observation: &O, action: usize) -> &mut Vec<f64> {
        let row = self.values.entry(observation.clone()).or_default();
        if row.len() <= action {
            row.resize(action + 1, 0.0);
        }
        row
    }
}

impl<O: Eq + Hash + Clone> ValueEstimator for TabularValueEstimator<O> {
    type Observation = O;

    fn expected_rewards(&self, observation: &O, action_space_size: usize) -> Result<Vec<f64>> {
        let mut estimates = vec![0.0; action_space_size];
        if let Some(row) = self.values.get(observation) {
            for (estimate, &value) in estimates.iter_mut().zip(row.iter()) {
                *estimate = value;
            }
        }
        Ok(estimates)
    }

    fn optimize(&mut self, batch: UpdateBatch<'_, O>, learning_rate: f64) -> Result<()> {
        for ((observation, &action), &target) in batch
            .observations
            .iter()
            .zip(batch.actions)
            .zip(batch.targets)
        {
            let row = self.row_for(observation, action);
            row[action] += learning_rate * (target - row[action]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_observations_estimate_zero() {
        let table = TabularValueEstimator::<i32>::new();
        assert_eq!(table.expected_rewards(&7, 3).unwrap(), vec![0.0, 0.0, 0.0]);
        assert_eq!(table.value(&7, 1), 0.0);
    }

    #[test]
    fn optimize_moves_estimates_toward_targets() {
        let mut table = TabularValueEstimator::new();
        let batch = UpdateBatch {
            observations: &[5_i32],
            actions: &[1],
            targets: &[10.0],
        };

        table.optimize(batch, 0.5).unwrap();
        assert!((table.value(&5, 1) - 5.0).abs() < 1e-12);

        // A second identical update halves the remaining gap.
        table.optimize(batch, 0.5).unwrap();
        assert!((table.value(&5, 1) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn full_learning_rate_overwrites_the_estimate() {
        let mut table = TabularValueEstimator::new();
        table
            .optimize(
                UpdateBatch {
                    observations: &[1_i32],
                    actions: &[0],
                    targets: &[3.0],
                },
                1.0,
            )
            .unwrap();
        assert!((table.value(&1, 0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rows_grow_to_cover_updated_actions() {
        let mut table = TabularValueEstimator::new();
        table
            .optimize(
                UpdateBatch {
                    observations: &[0_i32],
                    actions: &[4],
                    targets: &[1.0],
                },
                1.0,
            )
            .unwrap();

        let estimates = table.expected_rewards(&0, 6).unwrap();
        assert_eq!(estimates, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn batched_updates_apply_per_element() {
        let mut table = TabularValueEstimator::new();
        table
            .optimize(
                UpdateBatch {
                    observations: &[1_i32, 2_i32],
                    actions: &[0, 1],
                    targets: &[2.0, 4.0],
                },
                1.0,
            )
            .unwrap();
        assert!((table.value(&1, 0) - 2.0).abs() < 1e-12);
        assert!((table.value(&2, 1) - 4.0).abs() < 1e-12);
    }
}
