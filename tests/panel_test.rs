//! Tests for the click-driven match flow.

use tictactoe_minimax::{BoardError, EngineConfig, GameError, Panel, Square, State, Symbol};

/// Clicks the lowest enabled cell until the match ends.
fn play_out(panel: &mut Panel) -> State {
    while panel.game().state() == State::Playing {
        let num = panel
            .cells()
            .iter()
            .position(|cell| *cell.enabled())
            .expect("a playing game has an enabled cell");
        panel.click(num).unwrap();
    }
    panel.game().state()
}

#[test]
fn test_click_sets_x_or_o() {
    let mut panel = Panel::new(&EngineConfig::default()).unwrap();
    panel.click(0).unwrap();
    let marker = *panel.cells()[0].marker();
    assert!(marker == Square::Occupied(Symbol::X) || marker == Square::Occupied(Symbol::O));
}

#[test]
fn test_human_never_beats_engine_as_x() {
    let mut panel = Panel::new(&EngineConfig::default()).unwrap();
    let state = play_out(&mut panel);
    assert_ne!(state, State::XWin);
    assert!(panel.cells().iter().all(|cell| !*cell.enabled()));
}

#[test]
fn test_human_never_beats_engine_as_o() {
    let config = EngineConfig::default().with_human_symbol(Symbol::O);
    let mut panel = Panel::new(&config).unwrap();
    let state = play_out(&mut panel);
    assert_ne!(state, State::OWin);
}

#[test]
fn test_engine_win_sets_flags() {
    // Lowest-cell play as X loses to the engine.
    let mut panel = Panel::new(&EngineConfig::default()).unwrap();
    let state = play_out(&mut panel);
    assert_eq!(state, State::OWin);
    assert!(*panel.engine().win());
    assert!(!*panel.human().win());
    assert!(!*panel.human().selected());
    assert!(!*panel.engine().selected());
}

#[test]
fn test_click_after_game_over_fails() {
    let mut panel = Panel::new(&EngineConfig::default()).unwrap();
    let state = play_out(&mut panel);
    assert_eq!(panel.click(0), Err(GameError::GameOver(state)));
}

#[test]
fn test_click_out_of_bounds_fails() {
    let mut panel = Panel::new(&EngineConfig::default()).unwrap();
    assert_eq!(
        panel.click(9),
        Err(GameError::Board(BoardError::CellOutOfBounds(9)))
    );
}
