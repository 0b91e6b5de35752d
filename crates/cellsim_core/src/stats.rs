use crate::population::TickReport;
use cellsim_data::{Cell, CellKind, KindCounts, PopulationStats};

/// Counts live cells per kind.
#[must_use]
pub fn tally_by_kind(cells: &[Cell]) -> KindCounts {
    let mut counts = KindCounts::default();
    for cell in cells.iter().filter(|c| c.alive) {
        counts.increment(cell.kind);
    }
    counts
}

/// Bar heights for the four-bar population chart, in [`CellKind::ALL`] order.
///
/// Bars are scaled to this frame's largest count so the tallest bar is always
/// `height` tall. No history is kept; an empty frame gives four empty bars.
#[must_use]
pub fn histogram(counts: &KindCounts, height: u64) -> [u64; 4] {
    let max = counts.max() as u64;
    let mut bars = [0; 4];
    if max == 0 {
        return bars;
    }
    for kind in CellKind::ALL {
        bars[kind.index()] = counts.get(kind) as u64 * height / max;
    }
    bars
}

/// Folds one tick's outcome into the session totals.
pub fn update_population_stats(stats: &mut PopulationStats, report: &TickReport, population: usize) {
    stats.ticks += 1;
    stats.population = population;
    stats.peak_population = stats.peak_population.max(population);
    stats.total_births += report.births as u64;
    stats.total_blocked_births += report.blocked_births as u64;
    stats.total_natural_deaths += report.natural_deaths as u64;
    stats.total_senescence_deaths += report.senescence_deaths as u64;
    stats.total_infection_deaths += report.infection_deaths as u64;
}

pub fn record_seeded(stats: &mut PopulationStats, inserted: usize, population: usize) {
    stats.total_seeded += inserted as u64;
    stats.population = population;
    stats.peak_population = stats.peak_population.max(population);
}
