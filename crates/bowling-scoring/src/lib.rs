//! Bowling score tracker: ten-pin scoring bounded context.
//!
//! Responsible for validating the rolls of each frame, computing per-frame
//! scores with strike and spare bonuses, and orchestrating the registry of
//! running games.

pub mod application;
pub mod domain;
