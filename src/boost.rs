//! Attack-power boost search.
//!
//! The variant objective: find the smallest uniform attack-power override
//! at which one faction wins the whole combat without losing a single
//! unit. Each candidate power is an independent deterministic run, so
//! candidates fan out across threads; `find_map_first` preserves candidate
//! order, which makes the parallel sweep return exactly the linear scan's
//! answer.

use rayon::prelude::*;
use serde::Serialize;

use crate::game::{Faction, RunReport, Scenario, Simulation};

/// Candidate range for the boost sweep.
#[derive(Debug, Clone, Copy)]
pub struct BoostConfig {
    /// First attack power to try.
    pub start: u32,
    /// Exclusive upper bound on attack powers to try.
    pub limit: u32,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            start: 4,
            limit: 200,
        }
    }
}

/// Result of a successful boost search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoostOutcome {
    /// The minimum winning attack power.
    pub power: u32,
    /// Completed rounds of the winning run.
    pub rounds: u32,
    /// Score of the winning run.
    pub score: u64,
    /// Hit points left on the board at the end of the winning run.
    pub remaining_hit_points: u32,
}

/// Run one combat with a uniform attack-power override for `faction`.
///
/// Returns the run report and the number of casualties the boosted faction
/// took. This is the pure per-candidate evaluation the sweep is built on.
#[must_use]
pub fn run_with_boost(scenario: &Scenario, faction: Faction, power: u32) -> (RunReport, usize) {
    let mut sim = Simulation::new(scenario.clone());
    sim.set_attack_power(faction, power);
    let report = sim.run();
    (report, sim.casualties(faction))
}

/// Find the smallest attack power in `[config.start, config.limit)` at
/// which `faction` wins with zero casualties.
///
/// Returns `None` when no power in the range achieves a lossless win.
#[must_use]
pub fn find_minimum_boost(
    scenario: &Scenario,
    faction: Faction,
    config: BoostConfig,
) -> Option<BoostOutcome> {
    (config.start..config.limit)
        .into_par_iter()
        .find_map_first(|power| {
            let (report, losses) = run_with_boost(scenario, faction, power);
            (report.winner == Some(faction) && losses == 0).then_some(BoostOutcome {
                power,
                rounds: report.rounds,
                score: report.score,
                remaining_hit_points: report.remaining_hit_points,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::parse_scenario;

    #[test]
    fn test_run_with_boost_reports_casualties() {
        let scenario = parse_scenario("#####\n#E.G#\n#####").unwrap();
        let (report, losses) = run_with_boost(&scenario, Faction::Elf, 200);
        assert_eq!(report.winner, Some(Faction::Elf));
        assert_eq!(report.rounds, 1);
        assert_eq!(losses, 0);
    }

    #[test]
    fn test_minimum_boost_is_range_start_when_trivial() {
        // One-on-one, the elf strikes first every round and wins losslessly
        // at any power, so the sweep stops at its first candidate.
        let scenario = parse_scenario("#####\n#E.G#\n#####").unwrap();
        let outcome = find_minimum_boost(&scenario, Faction::Elf, BoostConfig::default());
        assert_eq!(outcome.map(|o| o.power), Some(4));
    }

    #[test]
    fn test_no_boost_in_range_returns_none() {
        // The elf is outnumbered four to one in a tight corridor; at power 4
        // it cannot win without dying, and the range stops there.
        let scenario = parse_scenario("########\n#GGGG.E#\n########").unwrap();
        let config = BoostConfig { start: 4, limit: 5 };
        assert_eq!(find_minimum_boost(&scenario, Faction::Elf, config), None);
    }
}
