//! Tic-tac-toe engine with exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board**: nine cells, row-major, plus named [`Position`]s
//! - **Rules**: symbol-scoped outcome check and legal move listing
//! - **Score**: leaf values in `{-INF, 0, INF}`
//! - **Search**: `max_move` / `min_move` recursion and the [`minimax`] driver
//! - **Game**: owns the board of a single match
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Player, Symbol, minimax};
//!
//! let board: Board = "X,X, ,O,O, , , , ".parse().unwrap();
//! assert_eq!(minimax(&board, &Player::new(Symbol::X)), Ok(3));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod player;
mod position;
pub mod rules;
mod score;
mod search;

pub use board::{Board, CELLS, Square, Symbol};
pub use error::{BoardError, GameError, SearchError};
pub use game::Game;
pub use player::Player;
pub use position::Position;
pub use rules::{State, check_state, generate_moves};
pub use score::{INF, evaluate_position};
pub use search::{best_of, max_move, min_move, minimax, score_moves};
