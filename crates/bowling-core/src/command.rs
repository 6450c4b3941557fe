//! Commands addressed to the game registry.

use std::fmt::Debug;

use uuid::Uuid;

use crate::game::GameId;

/// A request to change registry state, carried from the HTTP layer to a
/// command handler.
pub trait Command: Send + Sync + Debug {
    /// Dotted name used in log fields, e.g. `scoring.record_roll`.
    fn command_type(&self) -> &'static str;

    /// Per-request id tying handler logs to the HTTP span.
    fn correlation_id(&self) -> Uuid;

    /// The game this command targets, or `None` for commands that create one.
    fn target_game(&self) -> Option<GameId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Ping(Uuid);

    impl Command for Ping {
        fn command_type(&self) -> &'static str {
            "test.ping"
        }

        fn correlation_id(&self) -> Uuid {
            self.0
        }
    }

    #[test]
    fn test_target_game_defaults_to_none() {
        let command = Ping(Uuid::new_v4());

        assert_eq!(command.target_game(), None);
        assert_eq!(command.command_type(), "test.ping");
    }
}
