//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};
use tictactoe_minimax::{Board, Symbol};

/// Tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Tic-tac-toe with an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match on the terminal
    Play {
        /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Symbol you play (X moves first)
        #[arg(long)]
        human: Option<Symbol>,

        /// Print the engine's per-move scores before each reply
        #[arg(long)]
        show_scores: bool,
    },

    /// Print the best move for a position
    Best {
        /// Nine comma-separated cells, e.g. "X,O, , ,X, , , , "
        #[arg(long, allow_hyphen_values = true)]
        board: Board,

        /// Side to move
        #[arg(long)]
        symbol: Symbol,
    },

    /// Print the state of a position for one symbol
    State {
        /// Nine comma-separated cells
        #[arg(long, allow_hyphen_values = true)]
        board: Board,

        /// Symbol checked for a win
        #[arg(long)]
        symbol: Symbol,
    },
}
