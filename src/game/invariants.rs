//! Simulation invariants - sanity checks that detect engine bugs.
//!
//! These should NEVER trigger in a correct engine. They are not gameplay
//! rules: a violation means the round/turn machinery itself corrupted
//! state, and the only sane response is to abort.

use std::collections::HashMap;

use crate::game::{Coord, Outcome, Simulation, UnitId};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all simulation invariants.
///
/// Returns the violations found, empty if all invariants hold:
/// - at most one alive unit occupies any cell;
/// - every alive unit stands on a passable, in-bounds cell;
/// - alive units have nonzero hit points, dead units have zero;
/// - a terminal outcome names a faction that is actually wiped out.
#[must_use]
pub fn check_invariants(sim: &Simulation) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let mut held: HashMap<Coord, UnitId> = HashMap::new();
    for unit in sim.units().iter().filter(|u| u.alive) {
        if let Some(&other) = held.get(&unit.pos) {
            violations.push(InvariantViolation {
                message: format!(
                    "units {} and {} both occupy ({}, {})",
                    other, unit.id, unit.pos.x, unit.pos.y
                ),
            });
        } else {
            held.insert(unit.pos, unit.id);
        }

        if !sim.grid().is_passable(unit.pos) {
            violations.push(InvariantViolation {
                message: format!(
                    "alive unit {} stands on impassable cell ({}, {})",
                    unit.id, unit.pos.x, unit.pos.y
                ),
            });
        }

        if unit.hit_points == 0 {
            violations.push(InvariantViolation {
                message: format!("alive unit {} has zero hit points", unit.id),
            });
        }
    }

    for unit in sim.units().iter().filter(|u| !u.alive) {
        if unit.hit_points != 0 {
            violations.push(InvariantViolation {
                message: format!(
                    "dead unit {} retains {} hit points",
                    unit.id, unit.hit_points
                ),
            });
        }
    }

    if let Outcome::Eliminated(faction) = sim.outcome() {
        let survivors = sim.alive_count(faction);
        if survivors > 0 {
            violations.push(InvariantViolation {
                message: format!(
                    "outcome says {faction:?} is eliminated but {survivors} of its units live"
                ),
            });
        }
    }

    violations
}

/// Assert all simulation invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(sim: &Simulation) {
    let violations = check_invariants(sim);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!(
            "Simulation invariant violations:\n  - {}",
            messages.join("\n  - ")
        );
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_sim: &Simulation) {}
