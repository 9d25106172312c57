//! Boost command implementation.

use super::output::{JsonBoostResult, format_boost_text};
use super::{CliError, FactionArg, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use skirmish::boost::{BoostConfig, find_minimum_boost};
use skirmish::{Faction, load_scenario};
use std::path::Path;
use std::time::Duration;

/// Execute the boost command.
///
/// # Errors
///
/// Returns an error if the map cannot be loaded, no attack power in the
/// range produces a lossless win, or output serialization fails.
pub(crate) fn execute(
    map: &Path,
    faction: FactionArg,
    start: u32,
    limit: u32,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    if start >= limit {
        return Err(CliError::new(format!(
            "empty boost range: start {start} must be below limit {limit}"
        )));
    }

    let scenario = load_scenario(map)?;
    let faction = Faction::from(faction);
    let config = BoostConfig { start, limit };

    let spinner = if progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} sweeping attack powers [{elapsed_precise}]")
                .expect("valid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let outcome = find_minimum_boost(&scenario, faction, config);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let Some(outcome) = outcome else {
        return Err(CliError::new(format!(
            "no attack power in {start}..{limit} wins without {faction:?} losses"
        )));
    };

    match format {
        OutputFormat::Text => {
            print!("{}", format_boost_text(faction, &outcome));
        }
        OutputFormat::Json => {
            let json_result = JsonBoostResult::from_outcome(faction, &outcome);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
