//! Headless grid of clickable cells.
//!
//! A front end draws the cells and forwards clicks to [`Panel::click`]; the
//! panel plays the human's move, lets the engine reply, and keeps the cell
//! markers in step with the game's board.

use crate::config::EngineConfig;
use derive_getters::Getters;
use tictactoe_engine::{
    BoardError, CELLS, Game, GameError, Player, Position, SearchError, Square, State, Symbol,
    best_of, score_moves,
};
use tracing::{debug, info, instrument};

/// One clickable cell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct Cell {
    /// Board index (0-8).
    num: usize,
    /// Column (0-2).
    col: usize,
    /// Row (0-2).
    row: usize,
    /// Mark shown in the cell.
    #[new(default)]
    marker: Square,
    /// Whether the cell still accepts clicks.
    #[new(value = "true")]
    enabled: bool,
}

impl Cell {
    /// Shows `symbol` and stops accepting clicks.
    pub fn set_marker(&mut self, symbol: Symbol) {
        self.marker = Square::Occupied(symbol);
        self.enabled = false;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }
}

/// Result of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Cell number (1-9) the human played.
    pub played: usize,
    /// Cell number (1-9) the engine answered with, if the game went on.
    pub reply: Option<usize>,
    /// State after both moves.
    pub state: State,
}

/// Grid of nine cells bound to a game against the engine.
#[derive(Debug, Clone, Getters)]
pub struct Panel {
    /// Cells in index order.
    cells: [Cell; CELLS],
    /// The match being played.
    game: Game,
    /// The human side.
    human: Player,
    /// The engine side.
    engine: Player,
    /// Scores the engine compared for its last reply, when enabled.
    last_scores: Vec<(usize, i32)>,
    #[getter(skip)]
    show_scores: bool,
}

impl Panel {
    /// Creates a panel. If the human plays O, the engine makes the opening
    /// move before this returns.
    #[instrument(skip(config), fields(human = %config.human_symbol()))]
    pub fn new(config: &EngineConfig) -> Result<Self, GameError> {
        let human_symbol = *config.human_symbol();
        let mut panel = Self {
            cells: Position::ALL.map(|pos| Cell::new(pos.to_index(), pos.col(), pos.row())),
            game: Game::new(),
            human: Player::new(human_symbol),
            engine: Player::new(human_symbol.opponent()),
            last_scores: Vec::new(),
            show_scores: *config.show_scores(),
        };

        if panel.game.symbol() == *panel.engine.symbol() {
            panel.engine_reply()?;
        }
        panel.sync_flags();
        Ok(panel)
    }

    /// Handles a click on cell `num` (0-8).
    ///
    /// # Errors
    ///
    /// `GameOver` once the game is decided, `CellOutOfBounds` for a bad
    /// index and `CellOccupied` for a disabled cell.
    #[instrument(skip(self))]
    pub fn click(&mut self, num: usize) -> Result<ClickOutcome, GameError> {
        if self.game.state().is_terminal() {
            return Err(GameError::GameOver(self.game.state()));
        }
        let cell = self.cells.get(num).ok_or(BoardError::CellOutOfBounds(num))?;
        if !cell.enabled {
            debug!("Click on disabled cell ignored");
            return Err(BoardError::CellOccupied(num).into());
        }

        let symbol = *self.human.symbol();
        self.game.accept_move(num)?;
        self.human.set_current_move(num);
        self.cells[num].set_marker(symbol);

        let reply = if self.game.state() == State::Playing {
            Some(self.engine_reply()?)
        } else {
            None
        };

        self.sync_flags();
        let state = self.game.state();
        if state.is_terminal() {
            info!(%state, "Match finished");
        }
        Ok(ClickOutcome {
            played: num + 1,
            reply,
            state,
        })
    }

    fn engine_reply(&mut self) -> Result<usize, GameError> {
        let number = if self.show_scores {
            self.last_scores = score_moves(self.game.board(), &self.engine)?;
            let number = best_of(&self.last_scores)
                .ok_or(SearchError::SearchOnTerminalOrFullBoard(self.game.state()))?;
            self.game.accept_cell_number(number)?;
            number
        } else {
            self.game.play_best_move()?
        };
        let index = number - 1;
        self.engine.set_current_move(index);
        self.cells[index].set_marker(*self.engine.symbol());
        debug!(number, "Engine replied");
        Ok(number)
    }

    fn sync_flags(&mut self) {
        let state = self.game.state();
        let to_move = self.game.symbol();
        for player in [&mut self.human, &mut self.engine] {
            let symbol = *player.symbol();
            player.set_win(state.winner() == Some(symbol));
            player.set_selected(state == State::Playing && to_move == symbol);
        }
        if state.is_terminal() {
            self.cells.iter_mut().for_each(Cell::disable);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_initialization() {
        let cell = Cell::new(8, 2, 1);
        assert_eq!(*cell.num(), 8);
        assert_eq!(*cell.col(), 2);
        assert_eq!(*cell.row(), 1);
        assert_eq!(*cell.marker(), Square::Empty);
        assert!(*cell.enabled());
    }

    #[test]
    fn test_set_marker_disables_cell() {
        let mut cell = Cell::new(0, 0, 0);
        cell.set_marker(Symbol::O);
        assert_eq!(*cell.marker(), Square::Occupied(Symbol::O));
        assert!(!*cell.enabled());
    }

    #[test]
    fn test_panel_has_nine_cells_in_grid_order() {
        let panel = Panel::new(&EngineConfig::default()).unwrap();
        assert_eq!(panel.cells().len(), 9);
        for (i, cell) in panel.cells().iter().enumerate() {
            assert_eq!(*cell.num(), i);
            assert_eq!(*cell.row(), i / 3);
            assert_eq!(*cell.col(), i % 3);
        }
        assert!(*panel.human().selected());
        assert!(panel.last_scores().is_empty());
    }

    #[test]
    fn test_click_marks_cell_and_engine_replies() {
        let mut panel = Panel::new(&EngineConfig::default()).unwrap();
        let outcome = panel.click(0).unwrap();
        assert_eq!(outcome.played, 1);
        assert_eq!(outcome.state, State::Playing);
        assert_eq!(*panel.cells()[0].marker(), Square::Occupied(Symbol::X));

        let reply = outcome.reply.expect("engine should answer");
        assert_ne!(reply, 1);
        assert_eq!(*panel.cells()[reply - 1].marker(), Square::Occupied(Symbol::O));
        assert_eq!(panel.game().board().empty_count(), 7);
    }

    #[test]
    fn test_engine_opens_when_human_plays_o() {
        let config = EngineConfig::default().with_human_symbol(Symbol::O);
        let panel = Panel::new(&config).unwrap();
        assert_eq!(panel.game().board().empty_count(), 8);
        assert_eq!(panel.game().symbol(), Symbol::O);
        assert!(*panel.human().selected());
        assert!(!*panel.engine().selected());
    }

    #[test]
    fn test_scores_recorded_when_enabled() {
        let config = EngineConfig::default().with_show_scores(true);
        let mut panel = Panel::new(&config).unwrap();
        let outcome = panel.click(0).unwrap();
        assert_eq!(panel.last_scores().len(), 8);
        assert_eq!(outcome.reply, best_of(panel.last_scores()));
    }

    #[test]
    fn test_scored_reply_matches_plain_reply() {
        let mut plain = Panel::new(&EngineConfig::default()).unwrap();
        let scored_config = EngineConfig::default().with_show_scores(true);
        let mut scored = Panel::new(&scored_config).unwrap();
        for num in [0, 8] {
            let a = plain.click(num).unwrap();
            let b = scored.click(num).unwrap();
            assert_eq!(a, b);
        }
        assert_eq!(plain.game().board(), scored.game().board());
    }

    #[test]
    fn test_click_on_marked_cell_fails() {
        let mut panel = Panel::new(&EngineConfig::default()).unwrap();
        panel.click(4).unwrap();
        assert_eq!(
            panel.click(4),
            Err(GameError::Board(BoardError::CellOccupied(4)))
        );
    }
}
