//! Run command implementation.

use super::output::{JsonRunResult, format_run_text};
use super::{CliError, OutputFormat};
use skirmish::game::render_with_health;
use skirmish::{Outcome, Simulation, load_scenario};
use std::path::Path;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the map cannot be loaded or output serialization
/// fails.
pub(crate) fn execute(
    map: &Path,
    rounds: Option<u32>,
    format: OutputFormat,
    trace: bool,
) -> Result<(), CliError> {
    let scenario = load_scenario(map)?;
    let mut sim = Simulation::new(scenario);

    let report = if trace {
        println!("Initial battlefield");
        println!("{}", render_with_health(&sim));
        loop {
            if rounds.is_some_and(|cap| sim.completed_rounds() >= cap) {
                break;
            }
            let before = sim.completed_rounds();
            let outcome = sim.step_round();
            if sim.completed_rounds() > before {
                println!();
                println!("After round {}", sim.completed_rounds());
                println!("{}", render_with_health(&sim));
            }
            if !matches!(outcome, Outcome::Running) {
                break;
            }
        }
        println!();
        sim.report()
    } else {
        match rounds {
            Some(cap) => sim.run_rounds(cap),
            None => sim.run(),
        }
    };

    match format {
        OutputFormat::Text => {
            print!("{}", format_run_text(&report));
        }
        OutputFormat::Json => {
            let json_result = JsonRunResult::from_report(&report);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
