//! Tic-tac-toe against a perfect minimax opponent.
//!
//! The engine lives in [`tictactoe_engine`]. This crate is the presentation
//! side: a headless [`Panel`] of clickable cells, console dumps, and the
//! match configuration read by the binary.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{EngineConfig, Panel};
//!
//! let mut panel = Panel::new(&EngineConfig::default()).unwrap();
//! let outcome = panel.click(4).unwrap();
//! assert!(outcome.reply.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod panel;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, EngineConfig};
pub use panel::{Cell, ClickOutcome, Panel};
pub use tictactoe_engine::{
    Board, BoardError, Game, GameError, INF, Player, Position, SearchError, Square, State, Symbol,
};
