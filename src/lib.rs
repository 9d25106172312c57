// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Skirmish: a deterministic turn-based combat simulator for two-faction
//! grid skirmishes.
//!
//! This crate simulates a battle between two factions of units on a fixed
//! grid of walls and open cells. Rounds iterate all alive units in reading
//! order (row, then column); each unit takes one turn: acquire a target,
//! move one step along a shortest path if no enemy is adjacent, then attack
//! the weakest adjacent enemy. Combat ends when one faction is wiped out,
//! and scores as completed rounds times remaining hit points.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      Boost sweep (rayon)            │
//! ├─────────────────────────────────────┤
//! │      Combat engine (sim)            │
//! ├─────────────────────────────────────┤
//! │      Grid / pathing / loader        │
//! └─────────────────────────────────────┘
//! ```
//!
//! The simulation itself is strictly single-threaded and deterministic:
//! identical starting states produce identical turn orders and outcomes.
//! Only the boost sweep, which evaluates many independent runs, uses
//! parallelism.

pub mod boost;
pub mod error;
pub mod game;

pub use error::{LoadError, MapError};

// Re-export key types at crate root for convenience
pub use game::{
    Cell, Coord, Faction, Grid, Outcome, RunReport, Scenario, Simulation, Unit, UnitId,
    load_scenario, parse_scenario,
};
