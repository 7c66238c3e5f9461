use serde::{Deserialize, Serialize};

/// Hyperparameters for the TD(0) training pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Discount factor weighting future against immediate reward, in `[0, 1]`
    /// (default: 0.99).
    pub discount: f64,
    /// Step size handed to the optimizer on every update (default: 1e-3).
    pub learning_rate: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            discount: 0.99,
            learning_rate: 1e-3,
        }
    }
}
