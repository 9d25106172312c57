//! Plain-text board rendering for debugging and reports.

use crate::game::{Coord, Simulation};

/// Render the board in the input map format.
///
/// Rows are joined with newlines, without a trailing newline, so output of
/// a freshly parsed scenario matches its (trimmed) input text exactly.
#[must_use]
pub fn render_map(sim: &Simulation) -> String {
    let rows: Vec<String> = (0..sim.grid().height()).map(|y| row_symbols(sim, y)).collect();
    rows.join("\n")
}

/// Render the board with per-unit hit points appended to each row.
///
/// ```text
/// #G...#   G(200)
/// #.EG.#   E(197), G(194)
/// ```
#[must_use]
pub fn render_with_health(sim: &Simulation) -> String {
    let rows: Vec<String> = (0..sim.grid().height())
        .map(|y| {
            let symbols = row_symbols(sim, y);
            let health: Vec<String> = (0..sim.grid().width())
                .filter_map(|x| sim.unit_at(Coord::new(x, y)))
                .map(|u| format!("{}({})", u.faction.symbol(), u.hit_points))
                .collect();
            if health.is_empty() {
                symbols
            } else {
                format!("{}   {}", symbols, health.join(", "))
            }
        })
        .collect();
    rows.join("\n")
}

fn row_symbols(sim: &Simulation, y: u16) -> String {
    (0..sim.grid().width())
        .map(|x| {
            let coord = Coord::new(x, y);
            match sim.unit_at(coord) {
                Some(unit) => unit.faction.symbol(),
                None if sim.grid().is_passable(coord) => '.',
                None => '#',
            }
        })
        .collect()
}
