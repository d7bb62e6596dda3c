//! Error types for the engine.

use crate::State;

/// Error raised when a board or a mark is malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The board does not have exactly nine cells.
    #[display("Board must have exactly 9 cells, got {}", _0)]
    InvalidBoardLength(usize),

    /// A cell or player symbol is not one of Empty, X or O.
    #[display("Invalid symbol {:?} (expected 'X', 'O' or empty)", _0)]
    InvalidSymbol(char),

    /// A cell in board text holds more than one character.
    #[display("Invalid cell {:?} (expected a single 'X', 'O' or blank)", _0)]
    InvalidCell(String),

    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    CellOutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

impl std::error::Error for BoardError {}

/// Error raised by the top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The search was asked to move on a board that is already decided.
    #[display("Cannot search for a move: position is {}", _0)]
    SearchOnTerminalOrFullBoard(State),
}

impl std::error::Error for SearchError {}

/// Error raised by the match owner.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Board-level precondition failed.
    #[display("{}", _0)]
    Board(BoardError),

    /// Search precondition failed.
    #[display("{}", _0)]
    Search(SearchError),

    /// The match already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(State),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            GameError::Search(e) => Some(e),
            GameError::GameOver(_) => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<SearchError> for GameError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}
