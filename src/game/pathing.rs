//! Reachability and distance queries.
//!
//! Movement decisions need BFS distances over passable, *unoccupied* cells.
//! Occupancy changes every time a unit moves or dies, so nothing here is
//! cached across queries: an [`Occupancy`] is derived from the live unit
//! list on demand, and a [`DistanceField`] is valid only for the occupancy
//! snapshot it was computed from.

use std::collections::VecDeque;

use crate::game::{Coord, Grid, Unit};

/// Sentinel distance for cells no path reaches.
pub const UNREACHABLE: u32 = u32::MAX;

/// A snapshot of which cells alive units currently hold.
#[derive(Debug, Clone)]
pub struct Occupancy {
    /// Grid width, for row-major indexing.
    width: u16,
    /// One flag per cell, row-major.
    held: Vec<bool>,
}

impl Occupancy {
    /// Derive the occupancy mask from the live unit list.
    #[must_use]
    pub fn of(grid: &Grid, units: &[Unit]) -> Self {
        let mut held = vec![false; usize::from(grid.width()) * usize::from(grid.height())];
        for unit in units.iter().filter(|u| u.alive) {
            held[Self::index(grid.width(), unit.pos)] = true;
        }
        Self {
            width: grid.width(),
            held,
        }
    }

    /// Check if an alive unit stands on `coord`.
    ///
    /// Coordinates outside the grid read as unoccupied; the grid already
    /// treats them as walls.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        if coord.x >= self.width {
            return false;
        }
        self.held
            .get(Self::index(self.width, coord))
            .copied()
            .unwrap_or(false)
    }

    fn index(width: u16, coord: Coord) -> usize {
        usize::from(coord.y) * usize::from(width) + usize::from(coord.x)
    }
}

/// BFS distances from a single start cell.
///
/// Edge weight is 1; traversal runs over passable cells not held by an
/// alive unit. The start cell itself always has distance 0 even when the
/// querying unit stands on it. One traversal answers both reachability
/// (distance != [`UNREACHABLE`]) and shortest-path length.
#[derive(Debug, Clone)]
pub struct DistanceField {
    /// Grid width, for row-major indexing.
    width: u16,
    /// Distance per cell, row-major; `UNREACHABLE` where no path exists.
    dist: Vec<u32>,
}

impl DistanceField {
    /// Flood-fill distances from `start` for one occupancy snapshot.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `start` is a wall cell; distances from inside
    /// a wall are never a meaningful query.
    #[must_use]
    pub fn compute(grid: &Grid, occupancy: &Occupancy, start: Coord) -> Self {
        let mut dist =
            vec![UNREACHABLE; usize::from(grid.width()) * usize::from(grid.height())];
        dist[Occupancy::index(grid.width(), start)] = 0;

        let mut frontier = VecDeque::new();
        frontier.push_back(start);

        while let Some(cell) = frontier.pop_front() {
            let here = dist[Occupancy::index(grid.width(), cell)];
            let (neighbors, count) = grid.passable_neighbors(cell);
            for &next in &neighbors[..count as usize] {
                let slot = Occupancy::index(grid.width(), next);
                if dist[slot] == UNREACHABLE && !occupancy.is_occupied(next) {
                    dist[slot] = here + 1;
                    frontier.push_back(next);
                }
            }
        }

        Self {
            width: grid.width(),
            dist,
        }
    }

    /// Distance from the start cell to `coord`.
    ///
    /// Returns [`UNREACHABLE`] for unreached cells and for coordinates
    /// outside the grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> u32 {
        if coord.x >= self.width {
            return UNREACHABLE;
        }
        self.dist
            .get(Occupancy::index(self.width, coord))
            .copied()
            .unwrap_or(UNREACHABLE)
    }

    /// Check if a path from the start cell reaches `coord`.
    #[must_use]
    pub fn reaches(&self, coord: Coord) -> bool {
        self.get(coord) != UNREACHABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::parse_scenario;

    // The reference 7x5 layout: an elf at (1,1), goblins at (4,1), (2,3)
    // and (5,3), with walls splitting the right side off.
    const FIXTURE: &str = "#######\n\
                           #E..G.#\n\
                           #...#.#\n\
                           #.G.#G#\n\
                           #######";

    fn field_from(start: Coord) -> DistanceField {
        let scenario = parse_scenario(FIXTURE).unwrap();
        let occupancy = Occupancy::of(&scenario.grid, &scenario.units);
        DistanceField::compute(&scenario.grid, &occupancy, start)
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let field = field_from(Coord::new(1, 1));
        assert_eq!(field.get(Coord::new(1, 1)), 0);
    }

    #[test]
    fn test_distances_around_walls() {
        let field = field_from(Coord::new(1, 1));
        assert_eq!(field.get(Coord::new(3, 1)), 2);
        assert_eq!(field.get(Coord::new(2, 2)), 2);
        assert_eq!(field.get(Coord::new(1, 3)), 2);
        assert_eq!(field.get(Coord::new(3, 3)), 4);
    }

    #[test]
    fn test_occupied_cells_block_paths() {
        // The goblin at (4,1) occupies the only gap in the wall line, so
        // everything beyond it is unreachable.
        let field = field_from(Coord::new(1, 1));
        assert_eq!(field.get(Coord::new(5, 1)), UNREACHABLE);
        assert_eq!(field.get(Coord::new(5, 2)), UNREACHABLE);
        assert!(!field.reaches(Coord::new(5, 2)));
    }

    #[test]
    fn test_walls_unreachable() {
        let field = field_from(Coord::new(1, 1));
        assert_eq!(field.get(Coord::new(0, 0)), UNREACHABLE);
        assert_eq!(field.get(Coord::new(4, 2)), UNREACHABLE);
    }

    #[test]
    fn test_out_of_bounds_unreachable() {
        let field = field_from(Coord::new(1, 1));
        assert_eq!(field.get(Coord::new(100, 100)), UNREACHABLE);
        // An x just past the row end must not alias into the next row.
        assert_eq!(field.get(Coord::new(7, 0)), UNREACHABLE);
    }

    #[test]
    fn test_occupancy_tracks_alive_units_only() {
        let mut scenario = parse_scenario(FIXTURE).unwrap();
        scenario.units[1].alive = false; // the goblin at (4,1)
        let occupancy = Occupancy::of(&scenario.grid, &scenario.units);
        assert!(!occupancy.is_occupied(Coord::new(4, 1)));
        assert!(occupancy.is_occupied(Coord::new(1, 1)));

        // With the gap clear, the right side opens up.
        let field = DistanceField::compute(&scenario.grid, &occupancy, Coord::new(1, 1));
        assert_eq!(field.get(Coord::new(5, 1)), 4);
    }
}
