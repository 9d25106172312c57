//! The combat engine: round loop, per-unit turns, movement and attacks.

use std::fmt;

use serde::Serialize;

use crate::error::MapError;
use crate::game::{
    Coord, DistanceField, Faction, Grid, Occupancy, Scenario, Unit, UnitId, assert_invariants,
    parse_scenario, render_map,
};

/// Terminal-state classification of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Combat is still in progress.
    Running,
    /// The named faction has no units left; its opponent won.
    Eliminated(Faction),
}

/// Summary of a run, for reporting and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Fully completed rounds. Rounds abandoned mid-way do not count.
    pub rounds: u32,
    /// Hit points summed over alive units.
    pub remaining_hit_points: u32,
    /// `rounds * remaining_hit_points`.
    pub score: u64,
    /// The winning faction, when combat finished.
    pub winner: Option<Faction>,
    /// False when the run stopped at a round cap instead of a terminal
    /// state. A partial score is a debugging aid, not an answer.
    pub complete: bool,
}

/// A two-faction combat simulation.
///
/// Owns the grid and the unit list exclusively; everything mutates in place
/// for the simulation's lifetime. Execution is strictly sequential — rounds
/// iterate alive units in reading order, each taking one turn.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Fixed wall topology.
    grid: Grid,
    /// All units, alive and dead, indexed by id.
    units: Vec<Unit>,
    /// Rounds fully executed so far.
    completed_rounds: u32,
    /// Current state-machine state.
    outcome: Outcome,
}

impl Simulation {
    /// Build a simulation from a parsed scenario.
    #[must_use]
    pub fn new(scenario: Scenario) -> Self {
        Self {
            grid: scenario.grid,
            units: scenario.units,
            completed_rounds: 0,
            outcome: Outcome::Running,
        }
    }

    /// Parse map text and build a simulation from it.
    ///
    /// # Errors
    ///
    /// Returns [`MapError`] when the text is not a well-formed map.
    pub fn parse(input: &str) -> Result<Self, MapError> {
        Ok(Self::new(parse_scenario(input)?))
    }

    /// The wall topology.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All units in id order, dead ones included.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Current state-machine state.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Rounds fully executed so far.
    #[must_use]
    pub const fn completed_rounds(&self) -> u32 {
        self.completed_rounds
    }

    /// The alive unit standing on `coord`, if any.
    #[must_use]
    pub fn unit_at(&self, coord: Coord) -> Option<&Unit> {
        self.units.iter().find(|u| u.alive && u.pos == coord)
    }

    /// Hit points of the alive unit standing on `coord`, if any.
    #[must_use]
    pub fn hit_points_at(&self, coord: Coord) -> Option<u32> {
        self.unit_at(coord).map(|u| u.hit_points)
    }

    /// Count alive units of a faction.
    #[must_use]
    pub fn alive_count(&self, faction: Faction) -> usize {
        self.units
            .iter()
            .filter(|u| u.alive && u.faction == faction)
            .count()
    }

    /// Count units of a faction that have died so far.
    #[must_use]
    pub fn casualties(&self, faction: Faction) -> usize {
        self.units
            .iter()
            .filter(|u| !u.alive && u.faction == faction)
            .count()
    }

    /// Hit points summed over alive units.
    #[must_use]
    pub fn total_hit_points(&self) -> u32 {
        self.units
            .iter()
            .filter(|u| u.alive)
            .map(|u| u.hit_points)
            .sum()
    }

    /// Completed rounds times remaining hit points.
    #[must_use]
    pub fn score(&self) -> u64 {
        u64::from(self.completed_rounds) * u64::from(self.total_hit_points())
    }

    /// The winning faction, when combat finished.
    #[must_use]
    pub const fn winner(&self) -> Option<Faction> {
        match self.outcome {
            Outcome::Running => None,
            Outcome::Eliminated(wiped) => Some(wiped.opponent()),
        }
    }

    /// Summarize the current state.
    #[must_use]
    pub fn report(&self) -> RunReport {
        RunReport {
            rounds: self.completed_rounds,
            remaining_hit_points: self.total_hit_points(),
            score: self.score(),
            winner: self.winner(),
            complete: !matches!(self.outcome, Outcome::Running),
        }
    }

    /// Set the attack power of every unit of a faction.
    ///
    /// Intended as a uniform pre-run override for the boost objective;
    /// changing powers mid-run is not meaningful.
    pub fn set_attack_power(&mut self, faction: Faction, power: u32) {
        for unit in self.units.iter_mut().filter(|u| u.faction == faction) {
            unit.attack_power = power;
        }
    }

    /// Run combat to its terminal state and report the authoritative score.
    ///
    /// Does not return while both factions hold out in mutually unreachable
    /// pockets; use [`run_rounds`](Self::run_rounds) when termination is not
    /// known in advance.
    pub fn run(&mut self) -> RunReport {
        while matches!(self.outcome, Outcome::Running) {
            self.step_round();
        }
        self.report()
    }

    /// Run at most `max_rounds` completed rounds.
    ///
    /// The returned report is marked incomplete if the cap, rather than a
    /// terminal state, stopped the run.
    pub fn run_rounds(&mut self, max_rounds: u32) -> RunReport {
        while matches!(self.outcome, Outcome::Running) && self.completed_rounds < max_rounds {
            self.step_round();
        }
        self.report()
    }

    /// Execute one round.
    ///
    /// If a faction is already wiped out when the round would start, the
    /// simulation goes terminal *without* executing or counting the round.
    /// If an acting unit finds no enemies left mid-round, the round is
    /// abandoned and likewise does not count.
    pub fn step_round(&mut self) -> Outcome {
        if !matches!(self.outcome, Outcome::Running) {
            return self.outcome;
        }
        if let Some(wiped) = self.wiped_faction() {
            self.outcome = Outcome::Eliminated(wiped);
            return self.outcome;
        }

        // Turn order is snapshotted at round start; units that die during
        // the round are skipped when their turn comes up.
        let mut order: Vec<UnitId> = self
            .units
            .iter()
            .filter(|u| u.alive)
            .map(|u| u.id)
            .collect();
        order.sort_unstable_by_key(|&id| self.units[id].pos);

        for id in order {
            if !self.units[id].alive {
                continue;
            }
            if !self.take_turn(id) {
                self.outcome = Outcome::Eliminated(self.units[id].faction.opponent());
                return self.outcome;
            }
        }

        self.completed_rounds += 1;
        assert_invariants(self);
        self.outcome
    }

    /// The faction with zero alive units, if either.
    fn wiped_faction(&self) -> Option<Faction> {
        [Faction::Elf, Faction::Goblin]
            .into_iter()
            .find(|&f| self.alive_count(f) == 0)
    }

    /// One unit's turn: optional move, then optional attack.
    ///
    /// Returns false when the unit found no alive enemies at all — the
    /// signal to abandon the round.
    fn take_turn(&mut self, id: UnitId) -> bool {
        if self.adjacent_enemy(id).is_none() {
            let faction = self.units[id].faction;
            if !self.units.iter().any(|u| u.alive && u.faction != faction) {
                return false;
            }
            self.advance_unit(id);
        }
        if let Some(victim) = self.adjacent_enemy(id) {
            self.attack(id, victim);
        }
        true
    }

    /// The adjacent alive enemy to attack, if any: lowest hit points first,
    /// reading order of position as the tie-break.
    fn adjacent_enemy(&self, id: UnitId) -> Option<UnitId> {
        let unit = self.units[id];
        let (neighbors, count) = self.grid.passable_neighbors(unit.pos);
        neighbors[..count as usize]
            .iter()
            .filter_map(|&cell| self.unit_at(cell))
            .filter(|other| other.faction != unit.faction)
            .min_by_key(|other| (other.hit_points, other.pos))
            .map(|other| other.id)
    }

    /// Move one step along a shortest path toward the nearest in-range cell.
    ///
    /// In-range cells are open, unoccupied cells orthogonally adjacent to an
    /// alive enemy. The nearest reachable one wins, reading order breaking
    /// distance ties; the step taken is the neighbor minimizing the BFS
    /// distance to that cell, again tie-broken by reading order. Unreachable
    /// or empty in-range set means the unit stays put.
    fn advance_unit(&mut self, id: UnitId) {
        let unit = self.units[id];
        let occupancy = Occupancy::of(&self.grid, &self.units);

        let in_range = self.cells_in_range(unit.faction, &occupancy);
        if in_range.is_empty() {
            return;
        }

        let from_unit = DistanceField::compute(&self.grid, &occupancy, unit.pos);
        let Some(target) = in_range
            .iter()
            .copied()
            .filter(|&cell| from_unit.reaches(cell))
            .min_by_key(|&cell| (from_unit.get(cell), cell))
        else {
            return;
        };

        let from_target = DistanceField::compute(&self.grid, &occupancy, target);
        let (neighbors, count) = self.grid.passable_neighbors(unit.pos);
        let step = neighbors[..count as usize]
            .iter()
            .copied()
            .filter(|&cell| !occupancy.is_occupied(cell) && from_target.reaches(cell))
            .min_by_key(|&cell| (from_target.get(cell), cell));

        if let Some(step) = step {
            // The unit vacates its old cell and holds the new one in a
            // single assignment; occupancy is derived from unit positions,
            // so later queries in this turn already see the move.
            self.units[id].pos = step;
        }
    }

    /// Open, unoccupied cells orthogonally adjacent to any alive enemy of
    /// `faction`, deduplicated, in reading order.
    fn cells_in_range(&self, faction: Faction, occupancy: &Occupancy) -> Vec<Coord> {
        let mut cells = Vec::new();
        for enemy in self
            .units
            .iter()
            .filter(|u| u.alive && u.faction != faction)
        {
            let (neighbors, count) = self.grid.passable_neighbors(enemy.pos);
            for &cell in &neighbors[..count as usize] {
                if !occupancy.is_occupied(cell) {
                    cells.push(cell);
                }
            }
        }
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    /// Deal the attacker's power in damage; at zero hit points the victim
    /// dies and its cell empties.
    fn attack(&mut self, attacker: UnitId, victim: UnitId) {
        let power = self.units[attacker].attack_power;
        let victim = &mut self.units[victim];
        victim.hit_points = victim.hit_points.saturating_sub(power);
        if victim.hit_points == 0 {
            victim.alive = false;
        }
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_map(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "#######\n\
                           #E..G.#\n\
                           #...#.#\n\
                           #.G.#G#\n\
                           #######";

    #[test]
    fn test_initial_state() {
        let sim = Simulation::parse(FIXTURE).unwrap();
        assert_eq!(sim.outcome(), Outcome::Running);
        assert_eq!(sim.completed_rounds(), 0);
        assert_eq!(sim.total_hit_points(), 800);
        assert_eq!(sim.alive_count(Faction::Elf), 1);
        assert_eq!(sim.alive_count(Faction::Goblin), 3);
    }

    #[test]
    fn test_first_move_picks_nearest_target_in_reading_order() {
        // The elf's nearest in-range cell is (3,1); the step toward it from
        // (1,1) is (2,1).
        let mut sim = Simulation::parse(FIXTURE).unwrap();
        sim.step_round();
        let elf = sim
            .units()
            .iter()
            .find(|u| u.faction == Faction::Elf)
            .unwrap();
        assert_eq!(elf.pos, Coord::new(2, 1));
    }

    #[test]
    fn test_movement_tie_breaks_in_reading_order() {
        // Two in-range cells tie at distance 3 from the elf: (3,2) and
        // (2,3). Reading order selects (3,2), and of the two equally good
        // first steps (2,1) and (1,2), reading order selects (2,1).
        let mut sim = Simulation::parse(
            "#####\n\
             #E..#\n\
             #...#\n\
             #..G#\n\
             #####",
        )
        .unwrap();
        sim.step_round();
        let elf = sim
            .units()
            .iter()
            .find(|u| u.faction == Faction::Elf)
            .unwrap();
        let goblin = sim
            .units()
            .iter()
            .find(|u| u.faction == Faction::Goblin)
            .unwrap();
        assert_eq!(elf.pos, Coord::new(2, 1));
        // The goblin in turn heads for (3,1) via (3,2).
        assert_eq!(goblin.pos, Coord::new(3, 2));
    }

    #[test]
    fn test_attack_prefers_reading_order_on_equal_hit_points() {
        // Both goblins flank the elf at full health; the elf must attack
        // the one above it, (2,1) being first in reading order.
        let mut sim = Simulation::parse(
            "#####\n\
             #.G.#\n\
             #GE.#\n\
             #####",
        )
        .unwrap();
        sim.step_round();
        assert_eq!(sim.hit_points_at(Coord::new(2, 1)), Some(197));
        assert_eq!(sim.hit_points_at(Coord::new(1, 2)), Some(200));
    }

    #[test]
    fn test_attack_prefers_lowest_hit_points() {
        // Round 1 leaves the left goblin at 197 and the right at 200; in
        // round 2 the elf must keep hitting the weaker left one.
        let mut sim = Simulation::parse("#####\n#GEG#\n#####").unwrap();
        sim.run_rounds(2);
        assert_eq!(sim.hit_points_at(Coord::new(1, 1)), Some(194));
        assert_eq!(sim.hit_points_at(Coord::new(3, 1)), Some(200));
    }

    #[test]
    fn test_no_move_when_no_cell_is_reachable() {
        let mut sim = Simulation::parse(
            "#####\n\
             #E#G#\n\
             #####",
        )
        .unwrap();
        let report = sim.run_rounds(3);
        assert_eq!(sim.units()[0].pos, Coord::new(1, 1));
        assert_eq!(sim.units()[1].pos, Coord::new(3, 1));
        assert_eq!(report.rounds, 3);
        assert!(!report.complete);
        assert_eq!(report.winner, None);
    }

    #[test]
    fn test_round_not_counted_when_faction_already_wiped() {
        let mut sim = Simulation::parse("####\n#EE#\n####").unwrap();
        let outcome = sim.step_round();
        assert_eq!(outcome, Outcome::Eliminated(Faction::Goblin));
        assert_eq!(sim.completed_rounds(), 0);
        assert_eq!(sim.winner(), Some(Faction::Elf));
        assert_eq!(sim.score(), 0);
    }

    #[test]
    fn test_abandoned_round_not_counted() {
        // The first elf kills the only goblin; the second elf then finds no
        // targets, so the round is abandoned mid-way.
        let mut sim = Simulation::parse(
            "#####\n\
             #GE.#\n\
             #..E#\n\
             #####",
        )
        .unwrap();
        sim.set_attack_power(Faction::Elf, 200);
        let report = sim.run();
        assert_eq!(report.rounds, 0);
        assert_eq!(report.winner, Some(Faction::Elf));
        assert_eq!(sim.casualties(Faction::Goblin), 1);
        assert_eq!(sim.casualties(Faction::Elf), 0);
    }

    #[test]
    fn test_round_counts_when_last_actor_ends_combat() {
        // A lone pair: the elf acts first and, boosted, kills the goblin;
        // the goblin was the last unit in the order, so the round completes
        // and counts.
        let mut sim = Simulation::parse("#####\n#E.G#\n#####").unwrap();
        sim.set_attack_power(Faction::Elf, 200);
        let report = sim.run();
        assert_eq!(report.rounds, 1);
        assert_eq!(report.remaining_hit_points, 200);
        assert_eq!(report.score, 200);
        assert!(report.complete);
    }

    #[test]
    fn test_terminal_state_is_sticky() {
        let mut sim = Simulation::parse("####\n#EG#\n####").unwrap();
        sim.set_attack_power(Faction::Goblin, 200);
        let report = sim.run();
        assert_eq!(report.winner, Some(Faction::Goblin));
        let outcome = sim.outcome();
        assert_eq!(sim.step_round(), outcome);
        assert_eq!(sim.report(), report);
    }

    #[test]
    fn test_set_attack_power_scopes_to_faction() {
        let mut sim = Simulation::parse(FIXTURE).unwrap();
        sim.set_attack_power(Faction::Elf, 34);
        for unit in sim.units() {
            let expected = if unit.faction == Faction::Elf { 34 } else { 3 };
            assert_eq!(unit.attack_power, expected);
        }
    }

    #[test]
    fn test_dead_units_keep_their_ids() {
        let mut sim = Simulation::parse("#####\n#E.G#\n#####").unwrap();
        sim.set_attack_power(Faction::Elf, 200);
        sim.run();
        // The goblin was unit 1 in scan order and still is.
        assert_eq!(sim.units()[1].faction, Faction::Goblin);
        assert!(!sim.units()[1].alive);
        assert_eq!(sim.units()[1].hit_points, 0);
    }
}
