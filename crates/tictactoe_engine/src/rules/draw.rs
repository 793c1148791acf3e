//! Draw detection and status derivation.

use super::win::calculate_winner;
use crate::{Board, GameStatus, Player};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.filled() == board.squares().len()
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && calculate_winner(board).is_none()
}

/// Derives the game status from the board and the player to move.
#[instrument(skip(board))]
pub fn status(board: &Board, turn: Player) -> GameStatus {
    if let Some(winner) = calculate_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress { next: turn }
    }
}
