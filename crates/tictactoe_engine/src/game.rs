//! The game-state engine.

use super::contracts::LegalMove;
use super::error::MoveError;
use super::rules::{self, Line};
use super::{Board, GameStatus, Player, Position, Snapshot};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the turn marker and the move log for one game.
/// The status is never stored; it is derived from the board on demand.
/// A new game replaces the old one wholesale via [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) moves: Vec<Position>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            moves: Vec::new(),
        }
    }

    /// Builds a game by applying `indices` in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected move.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in indices {
            game.apply_move(index)?;
        }
        Ok(game)
    }

    /// Places the current player's mark at `index` (0-8) and passes the turn.
    ///
    /// Returns the new board. A rejected move leaves the game unchanged.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`MoveError::GameOver`] if a player has already won
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8
    /// - [`MoveError::CellOccupied`] if the cell holds a mark
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<Board, MoveError> {
        let position = LegalMove::check(index, self).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.turn;
        self.board = self.board.with_mark(position, player);
        self.moves.push(position);
        self.turn = player.opponent();

        #[cfg(debug_assertions)]
        {
            use super::contracts::{Contract, MoveContract};
            if let Err(e) = MoveContract::post(&before, self) {
                *self = before;
                return Err(e);
            }
        }

        let status = self.status();
        debug!(%position, %player, %status, "Move applied");
        if status.is_over() {
            info!(%status, moves = self.moves.len(), "Game finished");
        }

        Ok(self.board)
    }

    /// Replaces this game with a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.moves.len(), "Starting new game");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the positions played so far, in order.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Derives the game status.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board, self.turn)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::calculate_winner(&self.board)
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Positions that would be accepted by [`Game::apply_move`].
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            status: self.status(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
        assert!(game.moves().is_empty());
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_apply_move_returns_new_board() {
        let mut game = Game::new();
        let board = game.apply_move(4).expect("legal move");

        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(&board, game.board());
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.moves(), &[Position::Center]);
    }

    #[test]
    fn test_returned_board_is_detached() {
        let mut game = Game::new();
        let first = game.apply_move(0).expect("legal move");
        game.apply_move(1).expect("legal move");

        assert!(first.is_empty(Position::TopCenter));
        assert!(!game.board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_rejected_move_leaves_game_unchanged() {
        let mut game = Game::replay(&[4]).expect("legal move");
        let before = game.clone();

        assert_eq!(
            game.apply_move(4),
            Err(MoveError::CellOccupied {
                position: Position::Center
            })
        );
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds { index: 9 }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_valid_moves_after_win() {
        let game = Game::replay(&[0, 3, 1, 4, 2]).expect("legal moves");
        assert!(game.valid_moves().is_empty());
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_reset_replaces_game() {
        let mut game = Game::replay(&[0, 3, 1, 4, 2]).expect("legal moves");
        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        assert_eq!(
            Game::replay(&[0, 0]),
            Err(MoveError::CellOccupied {
                position: Position::TopLeft
            })
        );
    }
}
