//! Skirmish CLI - run grid combat simulations from map files.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Skirmish - a deterministic grid combat simulator
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a combat simulation to completion
    Run {
        /// Map file (`#` wall, `.` open, `E`/`G` units)
        #[arg(required = true)]
        map: std::path::PathBuf,

        /// Stop after N completed rounds (default: run to the end)
        #[arg(short, long)]
        rounds: Option<u32>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Print the board with hit points after every round
        #[arg(short, long)]
        trace: bool,
    },

    /// Search for the minimum attack-power boost for a lossless win
    Boost {
        /// Map file (`#` wall, `.` open, `E`/`G` units)
        #[arg(required = true)]
        map: std::path::PathBuf,

        /// Faction to boost
        #[arg(long, default_value = "elf")]
        faction: cli::FactionArg,

        /// First attack power to try
        #[arg(short, long, default_value = "4")]
        start: u32,

        /// Exclusive upper bound on attack powers to try
        #[arg(short, long, default_value = "200")]
        limit: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show a spinner while the sweep runs
        #[arg(short, long)]
        progress: bool,
    },

    /// Validate a map file and show the parsed battlefield
    Validate {
        /// Map file to validate
        #[arg(required = true)]
        map: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            map,
            rounds,
            format,
            trace,
        } => cli::run::execute(&map, rounds, format, trace),

        Commands::Boost {
            map,
            faction,
            start,
            limit,
            format,
            progress,
        } => cli::boost::execute(&map, faction, start, limit, format, progress),

        Commands::Validate { map } => cli::validate::execute(&map),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
