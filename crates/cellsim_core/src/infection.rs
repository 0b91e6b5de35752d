//! Pathogen contact killing.
//!
//! A brute-force pairwise scan: each pathogen checks every other live cell,
//! so a tick is O(n²) in the population.

use crate::config::InfectionConfig;
use crate::rng::RandomSource;
use cellsim_data::Cell;

/// Runs the infection scan for the pathogen at `source`. Victims are read
/// live: a cell already killed earlier this tick is skipped and is never
/// rolled against again. Returns how many cells this scan killed.
pub fn infection_scan(
    cells: &mut [Cell],
    source: usize,
    infection: &InfectionConfig,
    strength: u32,
    rng: &mut dyn RandomSource,
) -> usize {
    debug_assert!(cells[source].kind.is_pathogen());

    let origin = cells[source].position;
    let kill_p = infection.kill_probability(strength);
    let mut kills = 0;

    for (i, victim) in cells.iter_mut().enumerate() {
        if i == source || !victim.alive {
            continue;
        }
        if origin.distance(&victim.position) <= infection.radius && rng.chance(kill_p) {
            victim.alive = false;
            kills += 1;
        }
    }
    kills
}
