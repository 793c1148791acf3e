//! Balanced marks invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{Game, Player};

/// Invariant: the X count equals the O count or exceeds it by one.
///
/// X always moves first and turns strictly alternate.
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}
