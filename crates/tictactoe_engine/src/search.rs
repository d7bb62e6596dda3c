//! Exhaustive minimax search.
//!
//! Values are always from the point of view of the `player` handed to the
//! top-level call: `max_move` runs at nodes where that player is to move,
//! `min_move` at nodes where the opponent is. Each child is explored on its
//! own board copy, so sibling branches never see each other's trial moves.
//! There is no pruning and no transposition table; the tree is at most nine
//! plies deep.

use crate::rules::state::check_either;
use crate::rules::{State, check_state, generate_moves};
use crate::score::{evaluate_position, score_state};
use crate::{Board, Player, SearchError};
use tracing::{debug, instrument, trace};

/// Value of `board` when `player` is to move.
///
/// The opponent moved last, so only the opponent can have just won.
pub fn max_move(board: &Board, player: &Player) -> i32 {
    let symbol = *player.symbol();
    let last = symbol.opponent();
    let state = check_state(board, last);
    if state.is_terminal() {
        return score_state(state, player);
    }

    generate_moves(board)
        .into_iter()
        .map(|index| min_move(&board.placed(index, symbol), player))
        .max()
        .unwrap_or_else(|| evaluate_position(board, last, player))
}

/// Value of `board` when the opponent of `player` is to move.
pub fn min_move(board: &Board, player: &Player) -> i32 {
    let symbol = *player.symbol();
    let state = check_state(board, symbol);
    if state.is_terminal() {
        return score_state(state, player);
    }

    let reply = symbol.opponent();
    generate_moves(board)
        .into_iter()
        .map(|index| max_move(&board.placed(index, reply), player))
        .min()
        .unwrap_or_else(|| evaluate_position(board, symbol, player))
}

/// Scores every legal move for `player`, in ascending index order.
///
/// Each entry is `(index, value)` with a 0-based index and the value the
/// opponent's best reply leaves `player` with.
///
/// # Errors
///
/// `SearchOnTerminalOrFullBoard` if either side has already won or no
/// cell is empty.
#[instrument(skip(board, player), fields(symbol = %player.symbol(), empty = board.empty_count()))]
pub fn score_moves(board: &Board, player: &Player) -> Result<Vec<(usize, i32)>, SearchError> {
    let symbol = *player.symbol();
    let state = check_either(board, symbol);
    if state != State::Playing {
        debug!(%state, "Refusing to search a decided position");
        return Err(SearchError::SearchOnTerminalOrFullBoard(state));
    }

    let scored = generate_moves(board)
        .into_iter()
        .map(|index| {
            let value = min_move(&board.placed(index, symbol), player);
            trace!(index, value, "Scored candidate");
            (index, value)
        })
        .collect();
    Ok(scored)
}

/// Picks the first strictly greatest entry of [`score_moves`] output and
/// returns it as a 1-based cell number. `None` for an empty list.
pub fn best_of(scores: &[(usize, i32)]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for &(index, value) in scores {
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((index, value));
        }
    }
    best.map(|(index, _)| index + 1)
}

/// Returns the best move for `player` as a 1-based cell number (1-9).
///
/// Ties go to the lowest index.
///
/// # Errors
///
/// `SearchOnTerminalOrFullBoard` if the position is already decided.
#[instrument(skip(board, player), fields(symbol = %player.symbol()))]
pub fn minimax(board: &Board, player: &Player) -> Result<usize, SearchError> {
    let scores = score_moves(board, player)?;
    // score_moves only succeeds on a board with an empty cell.
    let number = best_of(&scores).ok_or(SearchError::SearchOnTerminalOrFullBoard(State::Draw))?;
    debug!(number, "Selected move");
    Ok(number)
}
