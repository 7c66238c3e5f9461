//! Minnow: single-episode TD(0) interaction and training for discrete actions.
//!
//! Minnow drives one reinforcement-learning episode at a time: the
//! interaction loop in [`trajectory::runner`] steps an agent through an
//! environment and records every transition into a [`trajectory::Trajectory`],
//! and the reverse-order TD(0) pass in [`training::td`] walks that record
//! backward to update a value-estimating model.
//!
//! The crate owns only the episode lifecycle. The value model, the
//! environment, and the action-selection policy are external collaborators,
//! reached through the traits in [`model`], [`env`], and [`choice`].

pub mod choice;
pub mod config;
pub mod env;
pub mod model;
pub mod training;
pub mod trajectory;
