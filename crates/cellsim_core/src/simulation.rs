//! The simulation context: one owner for the population, the clock and the
//! operator settings.
//!
//! Front-ends never touch the population directly. They call the methods
//! here or submit a [`Command`], and pull a [`Frame`] once per display
//! refresh via [`Simulation::step`].

use crate::clock::SimulationClock;
use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::population::{Population, TickReport};
use crate::rng::{create_source, RandomSource};
use crate::snapshot::{capture_cells, chart_for, Frame};
use crate::stats::{record_seeded, update_population_stats};
use cellsim_data::{CellId, CellKind, KindCounts, PopulationStats};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Operator requests, as issued by key presses, clicks and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Spawn the currently selected kind at a plane position.
    Spawn { x: f64, y: f64 },
    SpawnKind { kind: CellKind, x: f64, y: f64 },
    SelectKind(CellKind),
    SetStrength(u32),
    StrengthUp,
    StrengthDown,
    SetSpeed(u32),
    SpeedUp,
    SpeedDown,
    TogglePause,
    Pause,
    Resume,
    Clear,
}

/// Operator-adjustable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub infection_strength: u32,
    pub selected_kind: CellKind,
    pub paused: bool,
}

pub struct Simulation {
    config: AppConfig,
    population: Population,
    clock: SimulationClock,
    settings: Settings,
    stats: PopulationStats,
    metrics: Metrics,
    rng: Box<dyn RandomSource>,
    tick: u64,
    last_report: TickReport,
}

impl Simulation {
    /// Builds a simulation whose randomness comes from the configured seed,
    /// or from entropy when none is set.
    #[must_use]
    pub fn new(config: AppConfig, now: Instant) -> Self {
        let rng = create_source(config.world.seed);
        Self::with_source(config, rng, now)
    }

    #[must_use]
    pub fn with_source(config: AppConfig, rng: Box<dyn RandomSource>, now: Instant) -> Self {
        let clock = SimulationClock::new(
            now,
            config.clock.seconds_per_baseline,
            config.clock.initial_speed,
        );
        let settings = Settings {
            infection_strength: config.infection.clamp_strength(config.infection.initial_strength),
            selected_kind: CellKind::Normal,
            paused: false,
        };
        Self {
            population: Population::from_config(&config),
            config,
            clock,
            settings,
            stats: PopulationStats::default(),
            metrics: Metrics::new(),
            rng,
            tick: 0,
            last_report: TickReport::default(),
        }
    }

    /// Replaces the random source, e.g. with a scripted one.
    pub fn set_source(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    pub fn apply(&mut self, command: Command, now: Instant) {
        tracing::debug!(?command, "applying command");
        match command {
            Command::Spawn { x, y } => {
                self.spawn_at(self.settings.selected_kind, x, y);
            }
            Command::SpawnKind { kind, x, y } => {
                self.spawn_at(kind, x, y);
            }
            Command::SelectKind(kind) => self.select_kind(kind),
            Command::SetStrength(s) => self.set_strength(s),
            Command::StrengthUp => self.set_strength(self.settings.infection_strength.saturating_add(1)),
            Command::StrengthDown => self.set_strength(self.settings.infection_strength.saturating_sub(1)),
            Command::SetSpeed(v) => self.set_speed(v),
            Command::SpeedUp => self.set_speed(self.clock.speed().saturating_add(1)),
            Command::SpeedDown => self.set_speed(self.clock.speed().saturating_sub(1)),
            Command::TogglePause => {
                if self.settings.paused {
                    self.resume(now);
                } else {
                    self.pause();
                }
            }
            Command::Pause => self.pause(),
            Command::Resume => self.resume(now),
            Command::Clear => self.clear(now),
        }
    }

    /// Operator spawn at one point. Pathogens are seeded as a stack of
    /// `infection_strength` cells; other kinds as a single cell. Returns how
    /// many cells were inserted.
    pub fn spawn_at(&mut self, kind: CellKind, x: f64, y: f64) -> usize {
        let count = if kind.is_pathogen() {
            self.settings.infection_strength
        } else {
            1
        };
        let inserted = self
            .population
            .spawn_cluster(kind, x, y, count, &self.config.kinds);
        if inserted > 0 {
            record_seeded(&mut self.stats, inserted, self.population.len());
            tracing::debug!(%kind, x, y, inserted, "Seeded cells");
        }
        inserted
    }

    /// Inserts exactly one cell, regardless of kind.
    pub fn spawn_one(&mut self, kind: CellKind, x: f64, y: f64) -> Option<CellId> {
        let id = self.population.spawn(kind, x, y, &self.config.kinds)?;
        record_seeded(&mut self.stats, 1, self.population.len());
        Some(id)
    }

    pub fn select_kind(&mut self, kind: CellKind) {
        self.settings.selected_kind = kind;
    }

    pub fn set_strength(&mut self, strength: u32) {
        let clamped = self.config.infection.clamp_strength(strength);
        if clamped != self.settings.infection_strength {
            tracing::debug!(strength = clamped, "Infection strength changed");
        }
        self.settings.infection_strength = clamped;
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.clock.set_speed(speed);
        tracing::debug!(speed = self.clock.speed(), "Speed changed");
    }

    pub fn pause(&mut self) {
        if !self.settings.paused {
            self.settings.paused = true;
            tracing::info!(tick = self.tick, "Simulation paused");
        }
    }

    /// Resumes ticking. The clock's tick mark moves to `now` so the pause is
    /// not counted as simulated time.
    pub fn resume(&mut self, now: Instant) {
        if self.settings.paused {
            self.settings.paused = false;
            self.clock.resume(now);
            tracing::info!(tick = self.tick, "Simulation resumed");
        }
    }

    /// Empties the population and re-originates the clock.
    pub fn clear(&mut self, now: Instant) {
        let removed = self.population.len();
        self.population.clear();
        self.clock.reset(now);
        self.stats = PopulationStats::default();
        self.metrics.reset();
        self.tick = 0;
        self.last_report = TickReport::default();
        tracing::info!(removed, "Population cleared");
    }

    /// Runs one tick of cell rules without touching the clock.
    pub fn tick(&mut self) -> TickReport {
        let started = Instant::now();
        let report = self.population.tick(
            &self.config,
            self.settings.infection_strength,
            self.rng.as_mut(),
        );
        self.tick += 1;
        self.last_report = report;
        let population = self.population.len();
        update_population_stats(&mut self.stats, &report, population);
        self.metrics.record_tick(started.elapsed(), population);
        report
    }

    /// One display frame: advance the clock, tick the cells, and hand back
    /// the render and stats payload. Returns `None` while paused.
    pub fn step(&mut self, now: Instant) -> Option<Frame> {
        if self.settings.paused {
            return None;
        }
        let elapsed = self.clock.advance(now);
        self.tick();
        let mut frame = self.frame();
        frame.elapsed = elapsed;
        Some(frame)
    }

    /// The current state as a frame, without advancing anything.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let counts = self.alive_counts_by_kind();
        Frame {
            tick: self.tick,
            width: self.population.width(),
            height: self.population.height(),
            cells: capture_cells(self.population.cells()),
            chart: chart_for(&counts),
            counts,
            elapsed: Default::default(),
            total_elapsed: self.clock.total(),
            strength: self.settings.infection_strength,
            speed: self.clock.speed(),
            selected_kind: self.settings.selected_kind,
            paused: self.settings.paused,
            report: self.last_report,
            stats: self.stats.clone(),
        }
    }

    #[must_use]
    pub fn alive_counts_by_kind(&self) -> KindCounts {
        self.population.alive_counts_by_kind()
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    #[must_use]
    pub fn stats(&self) -> &PopulationStats {
        &self.stats
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.settings.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::AlwaysFail;
    use std::time::Duration;

    fn sim() -> (Simulation, Instant) {
        let now = Instant::now();
        let sim = Simulation::with_source(AppConfig::default(), Box::new(AlwaysFail), now);
        (sim, now)
    }

    #[test]
    fn test_pathogen_spawn_follows_strength() {
        let (mut sim, now) = sim();
        sim.apply(Command::SetStrength(4), now);
        sim.apply(Command::SelectKind(CellKind::Pathogen), now);
        sim.apply(Command::Spawn { x: 10.0, y: 10.0 }, now);
        assert_eq!(sim.alive_counts_by_kind().get(CellKind::Pathogen), 4);

        sim.apply(Command::SelectKind(CellKind::Liver), now);
        sim.apply(Command::Spawn { x: 10.0, y: 10.0 }, now);
        assert_eq!(sim.alive_counts_by_kind().get(CellKind::Liver), 1);
        assert_eq!(sim.stats().total_seeded, 5);
    }

    #[test]
    fn test_strength_clamped() {
        let (mut sim, now) = sim();
        for _ in 0..20 {
            sim.apply(Command::StrengthUp, now);
        }
        assert_eq!(sim.settings().infection_strength, 10);
        sim.apply(Command::SetStrength(0), now);
        assert_eq!(sim.settings().infection_strength, 1);
        sim.apply(Command::StrengthDown, now);
        assert_eq!(sim.settings().infection_strength, 1);
    }

    #[test]
    fn test_paused_step_is_noop() {
        let (mut sim, now) = sim();
        sim.spawn_at(CellKind::Normal, 50.0, 50.0);
        sim.apply(Command::Pause, now);
        assert!(sim.step(now + Duration::from_secs(1)).is_none());
        assert_eq!(sim.tick_count(), 0);

        sim.apply(Command::Resume, now + Duration::from_secs(30));
        let frame = sim
            .step(now + Duration::from_secs(31))
            .expect("running again");
        assert_eq!(frame.tick, 1);
        assert_eq!(frame.elapsed.days(), 1, "pause interval is not replayed");
    }

    #[test]
    fn test_frame_lists_live_cells() {
        let (mut sim, now) = sim();
        sim.spawn_at(CellKind::Brain, 100.0, 100.0);
        sim.spawn_at(CellKind::Normal, 200.0, 100.0);
        let frame = sim.step(now).expect("not paused");
        assert_eq!(frame.population(), 2);
        assert_eq!(frame.counts.total(), 2);
        assert_eq!(frame.cells[0].color_key, "blue");
    }

    #[test]
    fn test_clear_resets_session() {
        let (mut sim, now) = sim();
        sim.spawn_at(CellKind::Normal, 100.0, 100.0);
        sim.step(now);
        let later = now + Duration::from_secs(3);
        sim.apply(Command::Clear, later);
        assert!(sim.population().is_empty());
        assert_eq!(sim.tick_count(), 0);
        assert_eq!(sim.stats(), &PopulationStats::default());
        assert_eq!(sim.clock().origin(), later);
    }
}
