//! Command-line interface for blink_tac_toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blink Tac Toe - tic-tac-toe where your oldest piece vanishes
#[derive(Parser, Debug)]
#[command(name = "blink_tac_toe")]
#[command(about = "Two-player vanishing tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match at this terminal
    Play {
        /// Settings file with categories and setup rules (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for symbol draws; the same seed and moves replay a match
        #[arg(long)]
        seed: Option<u64>,

        /// Name for player 1 (prompted if omitted)
        #[arg(long)]
        player_one: Option<String>,

        /// Category for player 1 (prompted if omitted)
        #[arg(long)]
        category_one: Option<String>,

        /// Name for player 2 (prompted if omitted)
        #[arg(long)]
        player_two: Option<String>,

        /// Category for player 2 (prompted if omitted)
        #[arg(long)]
        category_two: Option<String>,
    },

    /// List the available symbol categories
    Categories {
        /// Settings file with categories (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print how to play
    Rules,
}
