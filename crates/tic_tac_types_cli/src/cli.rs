//! Command-line interface for tic-tac-types.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tic_tac_types::{Mark, Player, Position};

/// Tic-tac-toe where only legal moves exist
#[derive(Parser, Debug)]
#[command(name = "tic-tac-types")]
#[command(about = "Play and inspect tic-tac-toe games built from legal moves only", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tic_tac_types.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a sequence of positions from a fresh game
    Play {
        /// Player who moves first (X or O)
        #[arg(short, long)]
        start: Option<Player>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Positions in play order, e.g. top-left or 0-8
        positions: Vec<Position>,
    },

    /// Render nine row-major marks (X, O, or _ for empty)
    Render {
        /// The nine marks
        #[arg(num_args = 9)]
        marks: Vec<Mark>,
    },

    /// Count every complete game reachable from an empty board
    Tree {
        /// Player who moves first (X or O)
        #[arg(short, long)]
        start: Option<Player>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}
