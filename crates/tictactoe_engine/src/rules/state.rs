//! Outcome classification for a single symbol.

use crate::{Board, Square, Symbol};
use serde::{Deserialize, Serialize};

/// Winning lines as board indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Outcome classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum State {
    /// No decision yet.
    #[strum(to_string = "playing")]
    Playing,
    /// Board full with no winner.
    #[strum(to_string = "draw")]
    Draw,
    /// X has three in a row.
    #[strum(to_string = "X wins")]
    XWin,
    /// O has three in a row.
    #[strum(to_string = "O wins")]
    OWin,
}

impl State {
    /// Win variant for a symbol.
    pub fn win_for(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => State::XWin,
            Symbol::O => State::OWin,
        }
    }

    /// The winning symbol, if this is a win.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            State::XWin => Some(Symbol::X),
            State::OWin => Some(Symbol::O),
            State::Playing | State::Draw => None,
        }
    }

    /// True for Draw, XWin and OWin.
    pub fn is_terminal(self) -> bool {
        self != State::Playing
    }
}

/// Classifies `board` from the point of view of `symbol`.
///
/// Only `symbol` can be reported as the winner: a line held by the other
/// symbol is ignored, and a full board then reads as a draw. Callers that
/// need to know whether either side has won check both symbols.
pub fn check_state(board: &Board, symbol: Symbol) -> State {
    let mark = Square::Occupied(symbol);
    let squares = board.squares();
    if LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == mark))
    {
        return State::win_for(symbol);
    }

    if board.is_full() {
        State::Draw
    } else {
        State::Playing
    }
}

/// Classifies `board` checking both symbols, `first` before its opponent.
pub(crate) fn check_either(board: &Board, first: Symbol) -> State {
    match check_state(board, first) {
        State::Playing | State::Draw => check_state(board, first.opponent()),
        won => won,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_mark_is_playing() {
        assert_eq!(check_state(&board("X, , , , , , , , "), Symbol::X), State::Playing);
    }

    #[test]
    fn test_win_row_column_and_diagonals() {
        assert_eq!(check_state(&board("X,X,X, , , , , , "), Symbol::X), State::XWin);
        assert_eq!(check_state(&board("O, , ,O, , ,O, , "), Symbol::O), State::OWin);
        assert_eq!(check_state(&board("X, , , ,X, , , ,X"), Symbol::X), State::XWin);
        assert_eq!(check_state(&board(" , ,O, ,O, ,O, , "), Symbol::O), State::OWin);
    }

    #[test]
    fn test_other_symbol_line_is_ignored() {
        let b = board("X,X,X, , , , , , ");
        assert_eq!(check_state(&b, Symbol::O), State::Playing);
        assert_eq!(check_either(&b, Symbol::O), State::XWin);

        // Full board where only O holds a line reads as a draw for X.
        let full = board("O,O,O,X,X,O,X,O,X");
        assert_eq!(check_state(&full, Symbol::X), State::Draw);
        assert_eq!(check_state(&full, Symbol::O), State::OWin);
    }

    #[test]
    fn test_full_board_without_line_is_draw_for_both() {
        let full = board("X,O,X,X,O,O,O,X,X");
        assert_eq!(check_state(&full, Symbol::X), State::Draw);
        assert_eq!(check_state(&full, Symbol::O), State::Draw);
    }

    #[test]
    fn test_state_helpers() {
        assert_eq!(State::win_for(Symbol::O), State::OWin);
        assert_eq!(State::XWin.winner(), Some(Symbol::X));
        assert_eq!(State::Draw.winner(), None);
        assert!(!State::Playing.is_terminal());
        assert!(State::Draw.is_terminal());
        assert_eq!(State::OWin.to_string(), "O wins");
    }
}
