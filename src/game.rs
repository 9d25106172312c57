//! Combat simulation layer.
//!
//! - Grid of wall/open cells with orthogonal adjacency
//! - Units in two factions with hit points and attack power
//! - Round/turn state machine: target acquisition, BFS movement with
//!   reading-order tie-breaks, attack resolution
//! - Scoring: completed rounds times remaining hit points

mod grid;
mod invariants;
mod loader;
mod pathing;
mod render;
mod sim;
mod unit;

pub use grid::{Cell, Coord, Grid};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use loader::{Scenario, load_scenario, parse_scenario};
pub use pathing::{DistanceField, Occupancy, UNREACHABLE};
pub use render::{render_map, render_with_health};
pub use sim::{Outcome, RunReport, Simulation};
pub use unit::{DEFAULT_ATTACK_POWER, DEFAULT_HIT_POINTS, Faction, Unit, UnitId};
