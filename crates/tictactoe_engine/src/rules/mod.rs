//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so the presentation layer and the invariants can call them
//! directly.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, status};
pub use win::{calculate_winner, winning_line, Line, LINES};
