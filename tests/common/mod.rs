pub mod macros;

use cellsim_core::rng::RandomSource;
use cellsim_core::{AppConfig, Simulation};
use cellsim_data::CellKind;
use std::time::Instant;

#[allow(dead_code)]
pub struct SimulationBuilder {
    config: AppConfig,
    cells: Vec<(CellKind, f64, f64)>,
    source: Option<Box<dyn RandomSource>>,
    strength: Option<u32>,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            cells: Vec::new(),
            source: None,
            strength: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Disables the natural death roll for every kind.
    pub fn immortal(self) -> Self {
        self.with_config(|c| c.kinds.set_all_death_rates(0.0))
    }

    pub fn with_source<S: RandomSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = Some(strength);
        self
    }

    /// Adds exactly one cell, even for pathogens.
    pub fn with_cell(mut self, kind: CellKind, x: f64, y: f64) -> Self {
        self.cells.push((kind, x, y));
        self
    }

    pub fn with_grid(mut self, kind: CellKind, count: usize) -> Self {
        let (w, h) = (self.config.world.width, self.config.world.height);
        let cols = (count as f64).sqrt().ceil().max(1.0) as usize;
        let rows = count.div_ceil(cols);
        for i in 0..count {
            let x = (i % cols) as f64 * w / cols as f64;
            let y = (i / cols) as f64 * h / rows as f64;
            self.cells.push((kind, x, y));
        }
        self
    }

    pub fn build(self) -> Simulation {
        let now = Instant::now();
        let mut sim = match self.source {
            Some(source) => Simulation::with_source(self.config, source, now),
            None => Simulation::new(self.config, now),
        };
        if let Some(strength) = self.strength {
            sim.set_strength(strength);
        }
        for (kind, x, y) in self.cells {
            sim.spawn_one(kind, x, y)
                .expect("builder cell outside the plane");
        }
        sim
    }
}
