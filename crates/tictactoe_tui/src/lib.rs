//! Terminal front end for the tic-tac-toe engine.
//!
//! Draws the engine's state with ratatui and turns key presses and mouse
//! clicks into moves. Illegal moves are ignored without any message.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;
mod logging;
pub mod ui;

pub use app::{Action, App};
pub use config::{ConfigError, TuiConfig, DEFAULT_CONFIG_PATH};
pub use input::{digit_position, move_cursor};
pub use logging::init_logging;
