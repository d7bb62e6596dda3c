//! Core board types for tic-tac-toe.

use crate::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The mark identifying a side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Symbol {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Character used in board text.
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = BoardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' | 'x' => Ok(Symbol::X),
            'O' | 'o' => Ok(Symbol::O),
            other => Err(BoardError::InvalidSymbol(other)),
        }
    }
}

impl FromStr for Symbol {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::try_from(c),
            (Some(c), Some(_)) => Err(BoardError::InvalidSymbol(c)),
            (None, _) => Err(BoardError::InvalidSymbol(' ')),
        }
    }
}

/// A cell mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Character used in board text, a blank for empty cells.
    pub fn as_char(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(symbol) => symbol.as_char(),
        }
    }
}

impl TryFrom<char> for Square {
    type Error = BoardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ' ' | '_' | '.' => Ok(Square::Empty),
            other => Symbol::try_from(other).map(Square::Occupied),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major, left to right and top to bottom. The array
/// type pins the length to nine; every fallible constructor checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Returns a copy of this board with one more cell marked.
    ///
    /// # Errors
    ///
    /// `CellOutOfBounds` for an index past 8, `CellOccupied` if the cell
    /// already holds a mark.
    pub fn with_mark(&self, index: usize, symbol: Symbol) -> Result<Self, BoardError> {
        match self.get(index) {
            None => Err(BoardError::CellOutOfBounds(index)),
            Some(Square::Occupied(_)) => Err(BoardError::CellOccupied(index)),
            Some(Square::Empty) => Ok(self.placed(index, symbol)),
        }
    }

    /// Copy with `symbol` at `index`, for indices already known to be empty.
    pub(crate) fn placed(&self, index: usize, symbol: Symbol) -> Self {
        let mut next = *self;
        next.squares[index] = Square::Occupied(symbol);
        next
    }
}

impl From<[Square; CELLS]> for Board {
    fn from(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }
}

impl TryFrom<&[Square]> for Board {
    type Error = BoardError;

    fn try_from(cells: &[Square]) -> Result<Self, Self::Error> {
        let squares: [Square; CELLS] = cells
            .try_into()
            .map_err(|_| BoardError::InvalidBoardLength(cells.len()))?;
        Ok(Self { squares })
    }
}

impl TryFrom<&[char]> for Board {
    type Error = BoardError;

    fn try_from(cells: &[char]) -> Result<Self, Self::Error> {
        if cells.len() != CELLS {
            return Err(BoardError::InvalidBoardLength(cells.len()));
        }
        let mut squares = [Square::Empty; CELLS];
        for (slot, c) in squares.iter_mut().zip(cells) {
            *slot = Square::try_from(*c)?;
        }
        Ok(Self { squares })
    }
}

/// Parses nine comma-separated cells, e.g. `"X,O, , ,X, , , ,O"`.
///
/// Cells are not trimmed, so a single space is an empty cell. A cell with no
/// characters at all is also empty; a cell with more than one is rejected
/// whole.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .split(',')
            .map(|cell| {
                let mut chars = cell.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => Ok(' '),
                    (Some(c), None) => Ok(c),
                    (Some(_), Some(_)) => Err(BoardError::InvalidCell(cell.to_string())),
                }
            })
            .collect::<Result<Vec<char>, _>>()?;
        Board::try_from(cells.as_slice())
    }
}

/// Renders the grid with empty cells shown as their 1-based cell number.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(symbol) => write!(f, "{}", symbol)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
