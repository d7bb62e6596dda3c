//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board: outcome classification and legal move
//! listing. Neither keeps state between calls.

pub mod moves;
pub mod state;

pub use moves::generate_moves;
pub use state::{LINES, State, check_state};
