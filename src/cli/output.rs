//! Output formatting utilities for CLI.

use serde::Serialize;
use skirmish::RunReport;
use skirmish::boost::BoostOutcome;

/// JSON-serializable run result.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunResult {
    /// Fully completed rounds.
    pub(super) rounds: u32,
    /// Hit points summed over surviving units.
    pub(super) remaining_hit_points: u32,
    /// rounds * remaining hit points.
    pub(super) score: u64,
    /// Winning faction (null if the run stopped at a round cap).
    pub(super) winner: Option<String>,
    /// Whether combat actually finished.
    pub(super) complete: bool,
}

impl JsonRunResult {
    /// Create from a run report.
    pub(super) fn from_report(report: &RunReport) -> Self {
        Self {
            rounds: report.rounds,
            remaining_hit_points: report.remaining_hit_points,
            score: report.score,
            winner: report.winner.map(|f| format!("{f:?}")),
            complete: report.complete,
        }
    }
}

/// JSON-serializable boost search result.
#[derive(Debug, Serialize)]
pub(super) struct JsonBoostResult {
    /// Boosted faction.
    pub(super) faction: String,
    /// Minimum winning attack power.
    pub(super) power: u32,
    /// Completed rounds of the winning run.
    pub(super) rounds: u32,
    /// Score of the winning run.
    pub(super) score: u64,
}

impl JsonBoostResult {
    /// Create from a boost outcome.
    pub(super) fn from_outcome(faction: skirmish::Faction, outcome: &BoostOutcome) -> Self {
        Self {
            faction: format!("{faction:?}"),
            power: outcome.power,
            rounds: outcome.rounds,
            score: outcome.score,
        }
    }
}

/// Format a run report as human-readable text.
pub(super) fn format_run_text(report: &RunReport) -> String {
    let mut output = String::new();

    output.push_str("Combat result\n");
    match report.winner {
        Some(winner) => output.push_str(&format!("  Winner: {winner:?}\n")),
        None => output.push_str("  Winner: undecided (round cap reached)\n"),
    }
    output.push_str(&format!("  Completed rounds: {}\n", report.rounds));
    output.push_str(&format!(
        "  Remaining hit points: {}\n",
        report.remaining_hit_points
    ));
    output.push_str(&format!("  Score: {}\n", report.score));
    if !report.complete {
        output.push_str("  (partial run - score is not authoritative)\n");
    }

    output
}

/// Format a boost outcome as human-readable text.
pub(super) fn format_boost_text(faction: skirmish::Faction, outcome: &BoostOutcome) -> String {
    let mut output = String::new();

    output.push_str(&format!("Minimum boost for a lossless {faction:?} win\n"));
    output.push_str(&format!("  Attack power: {}\n", outcome.power));
    output.push_str(&format!("  Completed rounds: {}\n", outcome.rounds));
    output.push_str(&format!(
        "  Remaining hit points: {}\n",
        outcome.remaining_hit_points
    ));
    output.push_str(&format!("  Score: {}\n", outcome.score));

    output
}
