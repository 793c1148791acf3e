//! Contract-based move validation.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions are checked on every move; postconditions are checked
//! in debug builds.

use super::error::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::calculate_winner;
use super::{Game, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: nobody has won yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] if the board holds a completed line.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match calculate_winner(game.board()) {
            Some(winner) => Err(MoveError::GameOver { winner }),
            None => Ok(()),
        }
    }
}

/// Precondition: the index names a cell.
pub struct InBounds;

impl InBounds {
    /// Converts `index` to a [`Position`].
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds { index })
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if `position` holds a mark.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied { position })
        }
    }
}

/// Composite precondition, checked in order: game not over, index in
/// bounds, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates a move and returns the position it targets.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &Game) -> Result<Position, MoveError> {
        GameNotOver::check(game)?;
        let position = InBounds::check(index)?;
        CellIsEmpty::check(position, game)?;
        Ok(position)
    }
}

/// Contract for `Game::apply_move`.
///
/// Postconditions:
/// - exactly one move was added to the log
/// - the turn flipped
/// - all [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<Game, usize> for MoveContract {
    fn pre(game: &Game, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, game).map(|_| ())
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.moves().len() != before.moves().len() + 1 {
            warn!(
                before = before.moves().len(),
                after = after.moves().len(),
                "Move log did not grow by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move log did not grow by one".to_string(),
            ));
        }

        if after.turn() != before.turn().opponent() {
            warn!(before = %before.turn(), after = %after.turn(), "Turn did not flip");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: turn did not flip".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_precondition_empty_square() {
        assert!(MoveContract::pre(&Game::new(), &4usize).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = Game::replay(&[4]).expect("legal move");
        assert_eq!(
            MoveContract::pre(&game, &4usize),
            Err(MoveError::CellOccupied {
                position: Position::Center
            })
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        assert_eq!(
            MoveContract::pre(&Game::new(), &9usize),
            Err(MoveError::OutOfBounds { index: 9 })
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        // X wins on the top row; index 0 is both occupied and past the end of the game.
        let game = Game::replay(&[0, 3, 1, 4, 2]).expect("legal moves");
        assert_eq!(
            MoveContract::pre(&game, &0usize),
            Err(MoveError::GameOver { winner: Player::X })
        );
        assert_eq!(
            MoveContract::pre(&game, &42usize),
            Err(MoveError::GameOver { winner: Player::X })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        after.board = after.board.with_mark(Position::TopLeft, Player::O);

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_missing_turn_flip() {
        let before = Game::new();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        after.turn = Player::X;

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
