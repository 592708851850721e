mod board;
mod cli;
mod config;
mod console;
mod game;
mod min_max;
mod players;

extern crate lazy_static;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::GameConfig;
use crate::console::CommandLineConsole;
use crate::game::Game;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout belongs to the game
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)))
        .init();

    let config = GameConfig::from(&cli);
    info!(?config, "starting game");

    let mut console = CommandLineConsole::stdio();
    let players = config.choose_players(&mut console).context("failed to set up the players")?;
    let mut game = Game::new(players, console);
    let outcome = game.run().context("game aborted")?;
    info!(?outcome, "finished");
    Ok(())
}
