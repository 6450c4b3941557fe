//! Bowling Core: shared domain abstractions.
//!
//! This crate defines the traits and types the scoring context and the HTTP
//! layer both depend on: errors, commands, the `Game` capability, game
//! identity, and the id/store collaborators of the game registry.

pub mod command;
pub mod error;
pub mod game;
pub mod id;
pub mod store;
