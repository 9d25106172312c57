//! Validate command implementation.

use super::CliError;
use skirmish::game::render_map;
use skirmish::{Faction, Simulation, load_scenario};
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the map cannot be loaded or is malformed.
pub(crate) fn execute(map: &Path) -> Result<(), CliError> {
    let scenario = load_scenario(map)?;
    let sim = Simulation::new(scenario);

    println!(
        "Map OK: {}x{} cells",
        sim.grid().width(),
        sim.grid().height()
    );
    println!(
        "Units: {} elves, {} goblins",
        sim.alive_count(Faction::Elf),
        sim.alive_count(Faction::Goblin)
    );
    println!();
    println!("{}", render_map(&sim));

    Ok(())
}
