//! The population engine.
//!
//! Cells live in an insertion-ordered arena. A tick walks the arena once,
//! applying the three lifecycle rules to every cell that is alive when its
//! turn comes:
//!
//! 1. age and natural death
//! 2. reproduction
//! 3. infection (pathogens only)
//!
//! Children go to a pending buffer so the same tick never ages, scans or
//! infects them. After the walk, dead cells are purged and the pending
//! children are appended.

use crate::config::{AppConfig, KindsConfig};
use crate::infection::infection_scan;
use crate::lifecycle::{create_cell, CellLogic, DeathCause, Reproduction};
use crate::rng::RandomSource;
use crate::stats::tally_by_kind;
use cellsim_data::{Cell, CellId, CellKind, KindCounts, Position};
use serde::{Deserialize, Serialize};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub births: usize,
    pub blocked_births: usize,
    pub natural_deaths: usize,
    pub senescence_deaths: usize,
    pub infection_deaths: usize,
}

impl TickReport {
    pub fn record_death(&mut self, cause: DeathCause) {
        match cause {
            DeathCause::Natural => self.natural_deaths += 1,
            DeathCause::Senescence => self.senescence_deaths += 1,
            DeathCause::Infection => self.infection_deaths += 1,
        }
    }

    #[must_use]
    pub fn deaths(&self) -> usize {
        self.natural_deaths + self.senescence_deaths + self.infection_deaths
    }
}

#[derive(Debug, Clone)]
pub struct Population {
    cells: Vec<Cell>,
    pending: Vec<Cell>,
    next_id: u64,
    width: f64,
    height: f64,
}

impl Population {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            cells: Vec::new(),
            pending: Vec::new(),
            next_id: 0,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.world.width, config.world.height)
    }

    fn allocate_id(&mut self) -> CellId {
        let id = CellId(self.next_id);
        self.next_id += 1;
        id
    }

    #[must_use]
    pub fn in_bounds(&self, x: f64, y: f64) -> bool {
        Position::new(x, y).within(self.width, self.height)
    }

    /// Inserts one new cell at `(x, y)`. Requests outside the plane are
    /// dropped and return `None`.
    pub fn spawn(&mut self, kind: CellKind, x: f64, y: f64, kinds: &KindsConfig) -> Option<CellId> {
        if !self.in_bounds(x, y) {
            tracing::debug!(%kind, x, y, "Spawn request outside plane dropped");
            return None;
        }
        let id = self.allocate_id();
        self.cells
            .push(create_cell(id, None, kind, Position::new(x, y), kinds.get(kind)));
        Some(id)
    }

    /// Spawns `count` cells of `kind` stacked on one point. Returns how many
    /// were inserted (zero when the point is off the plane).
    pub fn spawn_cluster(
        &mut self,
        kind: CellKind,
        x: f64,
        y: f64,
        count: u32,
        kinds: &KindsConfig,
    ) -> usize {
        (0..count)
            .filter_map(|_| self.spawn(kind, x, y, kinds))
            .count()
    }

    /// Advances every cell by one tick.
    ///
    /// `strength` is the current infection-strength setting, read once per
    /// tick by the caller and applied to every pathogen scan.
    pub fn tick(
        &mut self,
        config: &AppConfig,
        strength: u32,
        rng: &mut dyn RandomSource,
    ) -> TickReport {
        let mut report = TickReport::default();
        let (width, height) = (self.width, self.height);

        // Children land in `pending`, so this length bounds the walk to the
        // cells that existed when the tick started.
        for i in 0..self.cells.len() {
            if !self.cells[i].alive {
                continue;
            }
            let kind = self.cells[i].kind;
            let params = config.kinds.get(kind);

            if let Some(cause) = self.cells[i].age_one_tick(params, rng) {
                report.record_death(cause);
            }

            match self.cells[i].try_reproduce(params, width, height, rng) {
                Reproduction::Child(position) => {
                    let parent = self.cells[i].id;
                    let id = self.allocate_id();
                    self.pending
                        .push(create_cell(id, Some(parent), kind, position, params));
                    report.births += 1;
                }
                Reproduction::Blocked => report.blocked_births += 1,
                Reproduction::NotDue => {}
            }

            if kind.is_pathogen() {
                report.infection_deaths +=
                    infection_scan(&mut self.cells, i, &config.infection, strength, rng);
            }
        }

        self.purge();
        self.cells.append(&mut self.pending);

        debug_assert_eq!(self.alive_counts_by_kind().total(), self.cells.len());
        report
    }

    fn purge(&mut self) {
        self.cells.retain(|c| c.alive);
    }

    /// Live cell count per kind. O(n).
    #[must_use]
    pub fn alive_counts_by_kind(&self) -> KindCounts {
        tally_by_kind(&self.cells)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.pending.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.id == id)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}
