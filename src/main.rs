//! tictactoe_minimax - play against, or query, the minimax engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tictactoe_engine::{best_of, check_state, score_moves};
use tictactoe_minimax::console::{format_scores, print_board};
use tictactoe_minimax::{Board, EngineConfig, GameError, Panel, Player, Position, State, Symbol};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            human,
            show_scores,
        } => run_play(config, human, show_scores),
        Command::Best { board, symbol } => run_best(board, symbol),
        Command::State { board, symbol } => {
            println!("{}", check_state(&board, symbol));
            Ok(())
        }
    }
}

/// Interactive match on stdin/stdout.
#[instrument]
fn run_play(config: Option<PathBuf>, human: Option<Symbol>, show_scores: bool) -> Result<()> {
    let mut config = EngineConfig::load(config.as_deref()).context("Failed to load config")?;
    if let Some(symbol) = human {
        config = config.with_human_symbol(symbol);
    }
    if show_scores {
        config = config.with_show_scores(true);
    }
    info!(?config, "Starting match");

    let mut panel = Panel::new(&config).context("Failed to start match")?;
    if *config.human_symbol() == Symbol::O {
        println!("Engine opens at {}", panel.engine().current_move() + 1);
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    while panel.game().state() == State::Playing {
        print_board(panel.game().board());
        print!("{} to move (1-9 or a label like 'center'): ", panel.human().symbol());
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            debug!("Input closed");
            println!();
            return Ok(());
        };
        let line = line.context("Failed to read input")?;

        let Some(position) = Position::from_label_or_number(&line) else {
            println!("Unrecognized cell {:?}", line.trim());
            continue;
        };

        match panel.click(position.to_index()) {
            Ok(outcome) => {
                if *config.show_scores() && !panel.last_scores().is_empty() {
                    println!("{}", format_scores(panel.last_scores()));
                }
                if let Some(reply) = outcome.reply {
                    println!("Engine plays {}", reply);
                }
            }
            Err(GameError::Board(e)) => println!("{}", e),
            Err(e) => return Err(e).context("Match failed"),
        }
    }

    print_board(panel.game().board());
    let state = panel.game().state();
    match state.winner() {
        Some(winner) if winner == *panel.human().symbol() => println!("You win ({})", state),
        Some(_) => println!("Engine wins ({})", state),
        None => println!("Draw"),
    }
    Ok(())
}

/// Prints scores and the best move for `symbol` on `board`.
#[instrument(skip(board))]
fn run_best(board: Board, symbol: Symbol) -> Result<()> {
    let player = Player::new(symbol);
    print_board(&board);

    let scores = score_moves(&board, &player).context("Cannot search this position")?;
    println!("{}", format_scores(&scores));

    let best = best_of(&scores).context("No legal move")?;
    let label = Position::from_number(best).map(|p| p.label()).unwrap_or("?");
    println!("Best move for {}: {} ({})", symbol, best, label);
    Ok(())
}
