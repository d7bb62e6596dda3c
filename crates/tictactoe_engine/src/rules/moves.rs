//! Legal move listing.

use crate::Board;

/// Indices of all empty cells, ascending.
pub fn generate_moves(board: &Board) -> Vec<usize> {
    (0..board.squares().len())
        .filter(|&i| board.is_empty(i))
        .collect()
}
