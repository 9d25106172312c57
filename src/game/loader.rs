//! Map text parsing.
//!
//! Turns the character-grid input format (`#` wall, `.` open, `E`/`G`
//! faction markers) into a [`Scenario`]: a wall grid plus the ordered unit
//! list. Unit ids are assigned in scan order — row-major, top to bottom,
//! left to right.

use std::fs;
use std::path::Path;

use crate::error::{LoadError, MapError};
use crate::game::{Cell, Coord, Faction, Grid, Unit};

/// A parsed initial state: the fixed grid and the starting units.
///
/// Unit ids equal their index in `units`. The scenario is the cloneable
/// template a [`Simulation`](crate::game::Simulation) is built from; cloning
/// it is how independent runs (e.g. the boost sweep) get identical starting
/// states.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// The wall topology.
    pub grid: Grid,
    /// Units in scan order.
    pub units: Vec<Unit>,
}

/// Parse map text into a scenario.
///
/// Rows are trimmed of surrounding whitespace; trailing blank lines are
/// ignored. All remaining rows must have the first row's length.
///
/// # Errors
///
/// Returns [`MapError`] if the input is empty, rows have inconsistent
/// lengths, a cell symbol is unrecognized, or a dimension overflows the
/// grid's coordinate range.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_scenario(input: &str) -> Result<Scenario, MapError> {
    let mut lines: Vec<&str> = input.lines().map(str::trim).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(MapError::Empty);
    }

    let expected = lines[0].chars().count();
    let width = u16::try_from(expected).map_err(|_| MapError::TooLarge {
        width: expected,
        height: lines.len(),
    })?;
    let height = u16::try_from(lines.len()).map_err(|_| MapError::TooLarge {
        width: expected,
        height: lines.len(),
    })?;

    let mut cells = Vec::with_capacity(expected * lines.len());
    let mut units = Vec::new();

    for (y, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != expected {
            return Err(MapError::UnevenRow {
                row: y,
                expected,
                found,
            });
        }
        for (x, symbol) in line.chars().enumerate() {
            match symbol {
                '#' => cells.push(Cell::Wall),
                '.' => cells.push(Cell::Open),
                _ => {
                    let Some(faction) = Faction::from_symbol(symbol) else {
                        return Err(MapError::UnknownSymbol { symbol, x, y });
                    };
                    // Casts are in range: x < width and y < height, both u16.
                    let pos = Coord::new(x as u16, y as u16);
                    units.push(Unit::new(units.len(), pos, faction));
                    cells.push(Cell::Open);
                }
            }
        }
    }

    let grid = Grid::from_cells(width, height, cells).ok_or(MapError::Empty)?;
    Ok(Scenario { grid, units })
}

/// Load a scenario from a map file.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or its contents do not
/// parse as a map.
pub fn load_scenario(path: &Path) -> Result<Scenario, LoadError> {
    let input = fs::read_to_string(path)?;
    Ok(parse_scenario(&input)?)
}
