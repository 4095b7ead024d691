//! tictac CLI
//!
//! Commands:
//! - play: interactive game against the computer
//! - match: automated matches between computer opponents

use clap::{Parser, Subcommand};

mod match_cmd;
mod play_cmd;
mod render;

#[derive(Parser)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe against a heuristic computer opponent")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(play_cmd::PlayArgs),
    /// Run automated matches between computer opponents
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Match(args) => match_cmd::run(args),
    }
}
