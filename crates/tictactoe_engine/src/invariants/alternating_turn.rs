//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: the turn marker agrees with the marks on the board.
///
/// X is to move when both players have the same number of marks,
/// O otherwise.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let expected = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        let game = Game::new();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.turn(), Player::X);
    }

    #[test]
    fn test_single_move_holds() {
        let game = Game::replay(&[4]).expect("legal move");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::replay(&[0, 4, 2, 6, 8]).expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut game = Game::replay(&[4]).expect("legal move");
        game.turn = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
