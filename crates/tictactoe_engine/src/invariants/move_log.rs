//! Move log invariant: the recorded moves reproduce the board.

use super::Invariant;
use crate::{Board, Game, Player};

/// Invariant: replaying the move log from an empty board, alternating
/// X and O, yields exactly the current board.
///
/// This also rules out repeated positions and marks placed outside
/// the engine.
pub struct MoveLogInvariant;

impl Invariant<Game> for MoveLogInvariant {
    fn holds(game: &Game) -> bool {
        let mut board = Board::new();
        let mut player = Player::X;
        for &pos in game.moves() {
            if !board.is_empty(pos) {
                return false;
            }
            board = board.with_mark(pos, player);
            player = player.opponent();
        }
        board == *game.board()
    }

    fn description() -> &'static str {
        "Move log reproduces the board"
    }
}
