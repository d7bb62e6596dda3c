//! Leaf scoring for the search.

use crate::rules::{State, check_state};
use crate::{Board, Player, Symbol};

/// Value of a decided win. Losses score `-INF`; the search never sums
/// leaf values, so every score lies in `[-INF, INF]`.
pub const INF: i32 = 1_000;

/// Scores `board` for `player`, with `symbol` as the side checked for a win.
///
/// `symbol` is normally the side that moved last, since only that side can
/// have just completed a line.
pub fn evaluate_position(board: &Board, symbol: Symbol, player: &Player) -> i32 {
    score_state(check_state(board, symbol), player)
}

/// Score of an already classified state for `player`.
pub(crate) fn score_state(state: State, player: &Player) -> i32 {
    match state.winner() {
        Some(winner) if winner == *player.symbol() => INF,
        Some(_) => -INF,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_draw_scores_zero() {
        let b = board("X,O,X,X,O,O,O,X,X");
        assert_eq!(evaluate_position(&b, Symbol::X, &Player::new(Symbol::X)), 0);
        assert_eq!(evaluate_position(&b, Symbol::O, &Player::new(Symbol::X)), 0);
    }

    #[test]
    fn test_win_scores_inf_for_winner_and_minus_inf_for_loser() {
        let x_row = board("X,X,X, , , , , , ");
        assert_eq!(evaluate_position(&x_row, Symbol::X, &Player::new(Symbol::X)), INF);
        assert_eq!(evaluate_position(&x_row, Symbol::X, &Player::new(Symbol::O)), -INF);

        let o_row = board("O,O,O, , , , , , ");
        assert_eq!(evaluate_position(&o_row, Symbol::O, &Player::new(Symbol::O)), INF);
        assert_eq!(evaluate_position(&o_row, Symbol::O, &Player::new(Symbol::X)), -INF);
    }

    #[test]
    fn test_unchecked_side_win_scores_zero() {
        let x_row = board("X,X,X, , , , , , ");
        assert_eq!(evaluate_position(&x_row, Symbol::O, &Player::new(Symbol::O)), 0);
    }

    #[test]
    fn test_score_state_matches_evaluate_position() {
        let p = Player::new(Symbol::O);
        assert_eq!(score_state(State::OWin, &p), INF);
        assert_eq!(score_state(State::XWin, &p), -INF);
        assert_eq!(score_state(State::Draw, &p), 0);
        assert_eq!(score_state(State::Playing, &p), 0);
    }
}
