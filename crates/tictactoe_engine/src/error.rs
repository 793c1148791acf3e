//! Errors returned when a move is rejected.

use super::{Player, Position};

/// Reason a move was rejected. The game is left unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position already holds a mark.
    #[display("Square {} is already occupied", position)]
    CellOccupied {
        /// Cell the move targeted.
        position: Position,
    },

    /// A player has already won.
    #[display("Game is already over, {} won", winner)]
    GameOver {
        /// Player holding a completed line.
        winner: Player,
    },

    /// The index does not name a cell.
    #[display("Position {} out of bounds (must be 0-8)", index)]
    OutOfBounds {
        /// Index that was requested.
        index: usize,
    },

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
