use super::cell::CellKind;
use serde::{Deserialize, Serialize};

/// Live cell count per kind, indexed in [`CellKind::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KindCounts {
    counts: [usize; 4],
}

impl KindCounts {
    #[must_use]
    pub fn get(&self, kind: CellKind) -> usize {
        self.counts[kind.index()]
    }

    pub fn increment(&mut self, kind: CellKind) {
        self.counts[kind.index()] += 1;
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest single-kind count, used to scale the population chart.
    #[must_use]
    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellKind, usize)> + '_ {
        CellKind::ALL.iter().map(move |&k| (k, self.counts[k.index()]))
    }
}

/// Running totals for one session. Reset by a clear.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationStats {
    /// Ticks processed since the last clear.
    pub ticks: u64,
    /// Current number of live cells.
    pub population: usize,
    /// Highest population observed after any tick.
    pub peak_population: usize,
    /// Cells placed directly by the operator.
    pub total_seeded: u64,
    /// Children produced by reproduction.
    pub total_births: u64,
    /// Reproduction attempts whose target lay outside the plane.
    pub total_blocked_births: u64,
    pub total_natural_deaths: u64,
    /// Deaths from exceeding the kind's lifespan.
    pub total_senescence_deaths: u64,
    pub total_infection_deaths: u64,
}

impl PopulationStats {
    #[must_use]
    pub fn total_deaths(&self) -> u64 {
        self.total_natural_deaths + self.total_senescence_deaths + self.total_infection_deaths
    }
}
