//! Console dumps of boards, values and move lists.
//!
//! Read-only helpers; nothing in the engine depends on them.

use tictactoe_engine::Board;

/// Board as a 3x3 grid, empty cells numbered 1-9.
pub fn format_board(board: &Board) -> String {
    board.to_string()
}

/// Integer sequence as `[a, b, c]`.
pub fn format_values(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(i32::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Move indices (0-8) as 1-based cell numbers, `[n, m]`.
pub fn format_moves(moves: &[usize]) -> String {
    let items: Vec<String> = moves.iter().map(|index| (index + 1).to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Per-move scores as `cell: value` lines.
pub fn format_scores(scores: &[(usize, i32)]) -> String {
    scores
        .iter()
        .map(|(index, value)| format!("{}: {}", index + 1, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints a board to stdout.
pub fn print_board(board: &Board) {
    println!("{}", format_board(board));
}

/// Prints an integer sequence to stdout.
pub fn print_values(values: &[i32]) {
    println!("{}", format_values(values));
}

/// Prints a move list to stdout.
pub fn print_moves(moves: &[usize]) {
    println!("{}", format_moves(moves));
}
