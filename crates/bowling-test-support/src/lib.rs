//! Shared test doubles and utilities for the bowling score tracker.

mod id;
mod store;

pub use id::{FailingIdGenerator, FixedIdGenerator, SequenceIdGenerator};
pub use store::{EmptyGameStore, FailingGameStore};
