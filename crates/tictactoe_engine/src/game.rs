//! Match owner: the authoritative board and whose turn it is.

use crate::rules::{State, check_state};
use crate::search::minimax;
use crate::{Board, BoardError, GameError, Player, SearchError, Symbol};
use tracing::{debug, info, instrument};

/// Tic-tac-toe match.
///
/// Owns the board for the duration of a match. Only [`Game::accept_move`]
/// mutates it; the search works on copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: State,
    symbol: Symbol,
}

impl Game {
    /// Creates a new game: empty board, playing, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: State::Playing,
            symbol: Symbol::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the last evaluated state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the symbol to move, or the symbol that made the final move
    /// once the game is over.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Re-evaluates the owned board for the symbol that moved last.
    ///
    /// While playing that is the opponent of the side to move; once the game
    /// is over it is the stored symbol, which made the final move.
    pub fn check_state(&self) -> State {
        match self.state {
            // The side to move cannot have won yet, only the one that just moved.
            State::Playing => check_state(&self.board, self.symbol.opponent()),
            _ => check_state(&self.board, self.symbol),
        }
    }

    /// Places the current symbol at `index` (0-8) and refreshes the state.
    ///
    /// The turn passes to the opponent unless the move ends the game.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game is decided, or a `BoardError` for an
    /// out-of-range or occupied cell.
    #[instrument(skip(self), fields(symbol = %self.symbol))]
    pub fn accept_move(&mut self, index: usize) -> Result<State, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver(self.state));
        }

        self.board = self.board.with_mark(index, self.symbol)?;
        self.state = check_state(&self.board, self.symbol);
        debug!(state = %self.state, "Move accepted");

        if self.state.is_terminal() {
            info!(state = %self.state, "Game over");
        } else {
            self.symbol = self.symbol.opponent();
        }
        Ok(self.state)
    }

    /// Best move for the side to move, as a 1-based cell number.
    ///
    /// # Errors
    ///
    /// `SearchOnTerminalOrFullBoard` unless the game is still playing.
    #[instrument(skip(self), fields(symbol = %self.symbol))]
    pub fn best_move(&self) -> Result<usize, GameError> {
        if self.state.is_terminal() {
            return Err(SearchError::SearchOnTerminalOrFullBoard(self.state).into());
        }
        Ok(minimax(&self.board, &Player::new(self.symbol))?)
    }

    /// Searches for the best move and plays it. Returns the 1-based cell
    /// number played.
    pub fn play_best_move(&mut self) -> Result<usize, GameError> {
        let number = self.best_move()?;
        self.accept_move(number - 1)?;
        Ok(number)
    }

    /// Places a move given as a 1-based cell number.
    pub fn accept_cell_number(&mut self, number: usize) -> Result<State, GameError> {
        let index = number
            .checked_sub(1)
            .ok_or(BoardError::CellOutOfBounds(number))?;
        self.accept_move(index)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
