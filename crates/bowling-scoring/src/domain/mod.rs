//! Domain layer for the ten-pin scoring context.

pub mod commands;
pub mod frame;
pub mod player;
pub mod ten_pin;
