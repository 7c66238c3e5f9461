//! Environment abstractions.
//!
//! Every environment implements the [`Environment`] trait so that the episode
//! runner can interact with it uniformly. [`mock`] provides a scripted
//! environment that replays canned transitions, making it possible to test
//! the interaction loop and the TD pass without a real simulator.

pub mod mock;
pub mod traits;

// Re-export the core trait and step type at the module level.
pub use mock::{MockEnv, MockTransition};
pub use traits::{EnvStep, Environment};
