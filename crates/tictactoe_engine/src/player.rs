//! Player identity record.

use crate::Symbol;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A side in the match.
///
/// The search reads only `symbol`. The remaining fields belong to whoever
/// drives the match: the move under consideration and the selected/win
/// flags a front end highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Mark this player places.
    symbol: Symbol,
    /// Board index currently under consideration.
    current_move: usize,
    /// Whether a front end has this player selected.
    selected: bool,
    /// Whether this player has won.
    win: bool,
}

impl Player {
    /// Creates a player for `symbol` with cleared flags.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            current_move: 0,
            selected: false,
            win: false,
        }
    }

    /// Records the move under consideration.
    pub fn set_current_move(&mut self, index: usize) {
        self.current_move = index;
    }

    /// Sets the selected flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Sets the win flag.
    pub fn set_win(&mut self, win: bool) {
        self.win = win;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let p = Player::new(Symbol::O);
        assert_eq!(*p.symbol(), Symbol::O);
        assert_eq!(*p.current_move(), 0);
        assert!(!*p.selected());
        assert!(!*p.win());
    }

    #[test]
    fn test_flags_update() {
        let mut p = Player::new(Symbol::X);
        p.set_current_move(4);
        p.set_selected(true);
        p.set_win(true);
        assert_eq!(*p.current_move(), 4);
        assert!(*p.selected());
        assert!(*p.win());
    }
}
