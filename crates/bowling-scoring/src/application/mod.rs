//! Application layer for the ten-pin scoring context.

pub mod command_handlers;
pub mod query_handlers;
