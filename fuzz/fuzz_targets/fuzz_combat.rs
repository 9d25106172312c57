#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skirmish::Simulation;
use skirmish::game::check_invariants;

/// Structured input for combat fuzzing.
#[derive(Arbitrary, Debug)]
struct CombatInput {
    /// Interior width before capping.
    width: u8,
    /// Interior height before capping.
    height: u8,
    /// Cell material, one byte per interior cell.
    cells: Vec<u8>,
    /// Round cap for the bounded run.
    rounds: u8,
}

fuzz_target!(|input: CombatInput| {
    // Keep maps small; the interesting behavior is in the turn logic, not
    // the map size.
    let width = usize::from(input.width % 12) + 1;
    let height = usize::from(input.height % 12) + 1;

    let mut cells = input.cells.into_iter();
    let border = "#".repeat(width + 2);

    let mut map = String::new();
    map.push_str(&border);
    for _ in 0..height {
        map.push('\n');
        map.push('#');
        for _ in 0..width {
            let symbol = match cells.next().unwrap_or(0) % 8 {
                0..=3 => '.',
                4 | 5 => '#',
                6 => 'E',
                _ => 'G',
            };
            map.push(symbol);
        }
        map.push('#');
    }
    map.push('\n');
    map.push_str(&border);

    let Ok(mut sim) = Simulation::parse(&map) else {
        return;
    };

    sim.run_rounds(u32::from(input.rounds % 64));
    assert!(check_invariants(&sim).is_empty());
});
