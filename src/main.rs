//! Warfront CLI - command-line front end for the game engine.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Warfront - a turn-based territorial-conquest game
#[derive(Parser, Debug)]
#[command(name = "warfront")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive game on a map
    Play {
        /// Map data file
        #[arg(required = true)]
        map: PathBuf,

        /// Number of players (default: 2)
        #[arg(short, long, default_value = "2")]
        players: u8,

        /// Starting food stockpile per player (default: 100)
        #[arg(short, long, default_value = "100")]
        food: u32,
    },

    /// Validate a map data file and print a summary
    Validate {
        /// Map data file
        #[arg(required = true)]
        map: PathBuf,

        /// Output format: text or json
        #[arg(short = 'F', long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { map, players, food } => cli::play::execute(&map, players, food),
        Commands::Validate { map, format } => cli::validate::execute(&map, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
