//! Blink Tac Toe - Terminal CLI
//!
//! Two players share one terminal and take turns at the vanishing board.

#![warn(missing_docs)]

mod cli;
mod console;
mod settings;

use anyhow::Result;
use blink_tictactoe::Session;
use clap::Parser;
use cli::{Cli, Command};
use console::{Console, Preset, RULES};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use settings::Settings;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Board on stdout, logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            seed,
            player_one,
            category_one,
            player_two,
            category_two,
        } => {
            let preset = Preset {
                names: [player_one, player_two],
                categories: [category_one, category_two],
            };
            run_play(config, seed, preset)
        }
        Command::Categories { config } => list_categories(config),
        Command::Rules => {
            println!("{}", RULES);
            Ok(())
        }
    }
}

/// Play one session at this terminal
#[instrument(skip(preset))]
fn run_play(config: Option<PathBuf>, seed: Option<u64>, preset: Preset) -> Result<()> {
    let settings = Settings::load(config.as_deref())?;
    let categories = settings.catalogue()?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "Starting session");

    let mut session = Session::new(categories, settings.rules(), ChaCha20Rng::seed_from_u64(seed));
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    if console.run_setup(&mut session, &preset)? {
        console.run_match(&mut session)?;
    }

    eprintln!("Seed: {} (pass --seed to replay the same draws)", seed);
    Ok(())
}

/// Print every category and its symbols
fn list_categories(config: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load(config.as_deref())?;
    let catalogue = settings.catalogue()?;

    let mut out = io::stdout().lock();
    for category in catalogue.iter() {
        let symbols: Vec<_> = category.symbols().iter().map(|s| s.as_str()).collect();
        writeln!(out, "{:<10} {}", category.name(), symbols.join(" "))?;
    }
    Ok(())
}
