//! The ten-pin game: a roster sharing one frame pointer.

use bowling_core::error::{DomainError, ValidationError};
use bowling_core::game::{Game, GameType, ScoreCard};

use super::player::{LAST_FRAME, Player};

/// Largest roster a game accepts.
pub const MAX_PLAYERS: usize = 5;

/// A game of ten-pin bowling.
///
/// All players are on the same frame; the pointer only moves forward.
#[derive(Debug, Clone)]
pub struct TenPinGame {
    players: Vec<Player>,
    current_frame: usize,
}

impl TenPinGame {
    /// Starts a game with one player per name, in the given order.
    /// Duplicate names are allowed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyRoster` if no names are given,
    /// `ValidationError::TooManyPlayers` above `MAX_PLAYERS`, and
    /// `ValidationError::EmptyPlayerName` for the first empty name.
    pub fn start_game<S: AsRef<str>>(player_names: &[S]) -> Result<Self, ValidationError> {
        if player_names.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(ValidationError::TooManyPlayers {
                max: MAX_PLAYERS,
                actual: player_names.len(),
            });
        }
        if let Some(index) = player_names.iter().position(|n| n.as_ref().is_empty()) {
            return Err(ValidationError::EmptyPlayerName { index });
        }

        Ok(Self {
            players: player_names
                .iter()
                .map(|name| Player::new(name.as_ref()))
                .collect(),
            current_frame: 0,
        })
    }

    /// The roster, in start order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }
}

impl Game for TenPinGame {
    fn game_type(&self) -> GameType {
        GameType::TenPin
    }

    fn current_frame(&self) -> usize {
        self.current_frame
    }

    fn next_frame(&mut self) -> usize {
        if self.current_frame < LAST_FRAME {
            self.current_frame += 1;
        }
        self.current_frame
    }

    fn set_frame_result(&mut self, player_index: usize, pins: &[u8]) -> Result<(), DomainError> {
        let player_count = self.players.len();
        let player = self
            .players
            .get_mut(player_index)
            .ok_or(DomainError::InvalidPlayerIndex {
                index: player_index,
                player_count,
            })?;

        player.knock_pins(self.current_frame, pins)?;
        Ok(())
    }

    fn score_cards(&self) -> Vec<ScoreCard> {
        self.players
            .iter()
            .map(|player| ScoreCard {
                name: player.name().to_owned(),
                frame_rolls: player.frame_rolls(),
                frame_scores: player.scores(),
                total_score: player.total_score(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::FRAMES_PER_GAME;

    fn started(names: &[&str]) -> TenPinGame {
        TenPinGame::start_game(names).unwrap()
    }

    // --- start_game ---

    #[test]
    fn test_start_game_accepts_single_player() {
        let game = started(&["hung"]);

        assert_eq!(game.players().len(), 1);
        assert_eq!(game.current_frame(), 0);
    }

    #[test]
    fn test_start_game_accepts_up_to_five_players_in_order() {
        let game = started(&["hung1", "hung2", "hung3", "hung4", "hung5"]);

        let names: Vec<&str> = game.players().iter().map(Player::name).collect();
        assert_eq!(names, ["hung1", "hung2", "hung3", "hung4", "hung5"]);
    }

    #[test]
    fn test_start_game_accepts_duplicate_names() {
        let game = started(&["hung", "hung", "hung"]);

        assert_eq!(game.players().len(), 3);
    }

    #[test]
    fn test_start_game_rejects_empty_roster() {
        let result = TenPinGame::start_game::<&str>(&[]);

        assert_eq!(result.unwrap_err(), ValidationError::EmptyRoster);
    }

    #[test]
    fn test_start_game_rejects_six_players() {
        let result = TenPinGame::start_game(&["a", "b", "c", "d", "e", "f"]);

        assert_eq!(
            result.unwrap_err(),
            ValidationError::TooManyPlayers { max: 5, actual: 6 }
        );
    }

    #[test]
    fn test_start_game_rejects_empty_name_with_its_index() {
        let result = TenPinGame::start_game(&["hung", "", "hung"]);

        assert_eq!(
            result.unwrap_err(),
            ValidationError::EmptyPlayerName { index: 1 }
        );
    }

    // --- next_frame ---

    #[test]
    fn test_next_frame_advances_by_one() {
        let mut game = started(&["hung"]);

        assert_eq!(game.next_frame(), 1);
        assert_eq!(game.next_frame(), 2);
        assert_eq!(game.current_frame(), 2);
    }

    #[test]
    fn test_next_frame_is_idempotent_on_last_frame() {
        let mut game = started(&["hung"]);
        for _ in 0..LAST_FRAME {
            game.next_frame();
        }

        assert_eq!(game.current_frame(), 9);
        assert_eq!(game.next_frame(), 9);
        assert_eq!(game.next_frame(), 9);
    }

    // --- set_frame_result ---

    #[test]
    fn test_strike_in_first_frame_scores_ten() {
        let mut game = started(&["hung"]);

        game.set_frame_result(0, &[10]).unwrap();

        let scores = &game.players()[0].scores();
        assert_eq!(scores[0], 10);
        assert!(scores[1..].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_set_frame_result_rejects_unknown_player_without_mutation() {
        let mut game = started(&["hung"]);

        let result = game.set_frame_result(5, &[10]);

        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidPlayerIndex {
                index: 5,
                player_count: 1,
            }
        );
        assert!(game.players()[0].frames().iter().all(|f| f.pins().is_empty()));
    }

    #[test]
    fn test_player_index_is_checked_before_pins() {
        let mut game = started(&["hung"]);

        let result = game.set_frame_result(1, &[11, 11]);

        assert!(matches!(result, Err(DomainError::InvalidPlayerIndex { .. })));
    }

    #[test]
    fn test_frame_validation_error_is_propagated_unchanged() {
        let mut game = started(&["hung"]);

        let result = game.set_frame_result(0, &[10, 0]);

        assert_eq!(
            result.unwrap_err(),
            DomainError::Validation(ValidationError::InvalidRollCount {
                shape: "strike",
                expected: 1,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_rolls_land_in_the_shared_current_frame() {
        let mut game = started(&["a", "b"]);
        game.set_frame_result(0, &[3, 4]).unwrap();
        game.set_frame_result(1, &[10]).unwrap();
        game.next_frame();
        game.set_frame_result(0, &[5, 5]).unwrap();

        let cards = game.score_cards();

        assert_eq!(cards[0].frame_rolls[0], vec![3, 4]);
        assert_eq!(cards[0].frame_rolls[1], vec![5, 5]);
        assert_eq!(cards[1].frame_rolls[0], vec![10]);
        assert!(cards[1].frame_rolls[1].is_empty());
    }

    #[test]
    fn test_full_perfect_game_through_the_game_api() {
        let mut game = started(&["hung"]);
        for _ in 0..LAST_FRAME {
            game.set_frame_result(0, &[10]).unwrap();
            game.next_frame();
        }
        game.set_frame_result(0, &[10, 10, 10]).unwrap();

        let card = &game.score_cards()[0];

        assert_eq!(card.name, "hung");
        assert_eq!(card.frame_scores, vec![30; FRAMES_PER_GAME]);
        assert_eq!(card.total_score, 300);
    }

    #[test]
    fn test_tenth_frame_uses_last_frame_rules() {
        let mut game = started(&["hung"]);
        for _ in 0..LAST_FRAME {
            game.next_frame();
        }

        assert!(game.set_frame_result(0, &[6, 4, 8]).is_ok());
        assert!(game.set_frame_result(0, &[6, 4]).is_err());
        assert_eq!(game.players()[0].scores()[LAST_FRAME], 18);
    }
}
