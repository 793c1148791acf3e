//! Tic-tac-toe game-state engine.
//!
//! Owns the board and the turn marker, derives the game status, and applies
//! validated moves through a single entry point, [`Game::apply_move`].
//! Rendering is left to the caller, which reads a [`Snapshot`] and forwards
//! cell activations.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, MoveError, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert!(matches!(game.apply_move(8), Err(MoveError::GameOver { .. })));
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use contracts::{CellIsEmpty, Contract, GameNotOver, InBounds, LegalMove, MoveContract};
pub use error::MoveError;
pub use game::Game;
pub use position::Position;
pub use rules::{calculate_winner, status, Line};
pub use types::{Board, GameStatus, Player, Snapshot, Square};
