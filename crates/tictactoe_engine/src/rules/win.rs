//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use tracing::instrument;

/// Three positions that win when they hold the same mark.
pub type Line = [Position; 3];

/// The 8 winning lines, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line in [`LINES`] order, with its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((player, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Draws are not detected here.
#[instrument(skip(board))]
pub fn calculate_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
