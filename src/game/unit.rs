//! Units and factions.

use serde::Serialize;

use crate::game::Coord;

/// Hit points a unit starts with.
pub const DEFAULT_HIT_POINTS: u32 = 200;

/// Attack power a unit starts with.
pub const DEFAULT_ATTACK_POWER: u32 = 3;

/// Unique identifier for a unit.
///
/// Ids are assigned in input scan order (row-major) and double as indices
/// into the engine's unit vector. Positions change and hit points change,
/// but an id keeps meaning for the whole simulation — dead units are never
/// removed from the vector.
pub type UnitId = usize;

/// One of the two opposing groups of combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Faction {
    /// Marked `E` on the map.
    Elf,
    /// Marked `G` on the map.
    Goblin,
}

impl Faction {
    /// The faction this one fights.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Faction::Elf => Faction::Goblin,
            Faction::Goblin => Faction::Elf,
        }
    }

    /// The map symbol for this faction.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Faction::Elf => 'E',
            Faction::Goblin => 'G',
        }
    }

    /// Parse a map symbol into a faction.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'E' => Some(Faction::Elf),
            'G' => Some(Faction::Goblin),
            _ => None,
        }
    }
}

/// A single combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Identity by input scan order; index into the unit vector.
    pub id: UnitId,
    /// Current position. Only meaningful while alive.
    pub pos: Coord,
    /// Which side this unit fights for.
    pub faction: Faction,
    /// Remaining hit points. Zero exactly when dead.
    pub hit_points: u32,
    /// Damage dealt per attack.
    pub attack_power: u32,
    /// Dead units stay in the unit list but take no further part in
    /// the simulation.
    pub alive: bool,
}

impl Unit {
    /// Create a unit with default hit points and attack power.
    #[must_use]
    pub const fn new(id: UnitId, pos: Coord, faction: Faction) -> Self {
        Self {
            id,
            pos,
            faction,
            hit_points: DEFAULT_HIT_POINTS,
            attack_power: DEFAULT_ATTACK_POWER,
            alive: true,
        }
    }

    /// Check if `other` fights for the opposing faction.
    #[must_use]
    pub fn is_enemy_of(&self, other: &Unit) -> bool {
        self.faction != other.faction
    }
}
