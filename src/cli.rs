//! CLI command implementations for Skirmish.

pub(crate) mod boost;
pub(crate) mod run;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use skirmish::Faction;
use std::error::Error;
use std::fmt;

/// Output format for the `run` and `boost` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Faction selector for the `boost` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FactionArg {
    /// The `E` faction.
    Elf,
    /// The `G` faction.
    Goblin,
}

impl From<FactionArg> for Faction {
    fn from(arg: FactionArg) -> Self {
        match arg {
            FactionArg::Elf => Faction::Elf,
            FactionArg::Goblin => Faction::Goblin,
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<skirmish::LoadError> for CliError {
    fn from(e: skirmish::LoadError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<skirmish::MapError> for CliError {
    fn from(e: skirmish::MapError) -> Self {
        Self::new(e.to_string())
    }
}
