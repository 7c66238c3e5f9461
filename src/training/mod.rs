//! Training passes over recorded trajectories.
//!
//! [`td::train`] performs reverse-order TD(0) credit assignment: it walks a
//! trajectory backward, recomputes a bootstrap target for each step, and
//! issues one optimizer update per step against the value model.

pub mod td;

pub use td::train;
