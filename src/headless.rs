//! Batch runs without a terminal UI.
//!
//! Each tick stands for one display frame at the configured frame rate, so
//! the reported simulated time matches what an interactive session of the
//! same length would show.

use cellsim_core::{AppConfig, SimDuration, Simulation, SpawnRequest};
use cellsim_data::{KindCounts, PopulationStats};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Serialize)]
pub struct HeadlessSummary {
    pub ticks: u64,
    pub population: usize,
    pub counts: KindCounts,
    pub simulated: SimDuration,
    pub stats: PopulationStats,
    pub avg_tick_us: u64,
}

impl fmt::Display for HeadlessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticks:      {}", self.ticks)?;
        writeln!(f, "Simulated:  {}", self.simulated)?;
        writeln!(
            f,
            "Population: {} (peak {})",
            self.population, self.stats.peak_population
        )?;
        for (kind, count) in self.counts.iter() {
            writeln!(f, "  {:<8} {}", kind.label(), count)?;
        }
        writeln!(
            f,
            "Births:     {} ({} blocked)",
            self.stats.total_births, self.stats.total_blocked_births
        )?;
        write!(
            f,
            "Deaths:     {} natural, {} senescence, {} infection",
            self.stats.total_natural_deaths,
            self.stats.total_senescence_deaths,
            self.stats.total_infection_deaths
        )
    }
}

/// Seeds a fresh simulation and runs it for up to `ticks` ticks. Stops
/// early once the plane is empty, since nothing can ever spawn again.
pub fn run(config: AppConfig, seeds: &[SpawnRequest], ticks: u64) -> HeadlessSummary {
    let frame = Duration::from_secs_f64(1.0 / config.target_fps.max(1) as f64);
    let start = Instant::now();
    let mut sim = Simulation::new(config, start);
    for req in seeds {
        if sim.spawn_at(req.kind, req.x, req.y) == 0 {
            tracing::warn!(kind = %req.kind, x = req.x, y = req.y, "Seed outside plane ignored");
        }
    }
    run_simulation(&mut sim, start, frame, ticks)
}

pub fn run_simulation(
    sim: &mut Simulation,
    start: Instant,
    frame: Duration,
    ticks: u64,
) -> HeadlessSummary {
    tracing::info!(ticks, population = sim.population().len(), "Headless run started");
    let mut now = start;
    for _ in 0..ticks {
        if sim.population().is_empty() {
            tracing::info!(tick = sim.tick_count(), "Population extinct, stopping early");
            break;
        }
        now += frame;
        sim.step(now);
    }
    let summary = HeadlessSummary {
        ticks: sim.tick_count(),
        population: sim.population().len(),
        counts: sim.alive_counts_by_kind(),
        simulated: sim.clock().total(),
        stats: sim.stats().clone(),
        avg_tick_us: sim.metrics().average_duration().as_micros() as u64,
    };
    tracing::info!(
        ticks = summary.ticks,
        population = summary.population,
        "Headless run finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellsim_data::CellKind;

    #[test]
    fn test_empty_run_stops_immediately() {
        let summary = run(AppConfig::default(), &[], 100);
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.population, 0);
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let mut config = AppConfig::default();
        config.world.seed = Some(7);
        let seeds: Vec<SpawnRequest> = ["normal:400:300", "liver:200:200", "pathogen:420:300"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let a = run(config.clone(), &seeds, 200);
        let b = run(config, &seeds, 200);
        assert_eq!(a.counts, b.counts);
        assert_eq!(a.stats, b.stats);
        assert!(a.counts.get(CellKind::Pathogen) <= a.population);
    }

    #[test]
    fn test_simulated_time_follows_frame_rate() {
        let seeds: Vec<SpawnRequest> = vec!["brain:10:10".parse().unwrap()];
        let mut config = AppConfig::default();
        config.kinds.set_all_death_rates(0.0);
        // 60 frames at 60 fps is one real second, one simulated day.
        let summary = run(config, &seeds, 60);
        assert_eq!(summary.ticks, 60);
        assert!((summary.simulated.total_seconds - 86_400.0).abs() < 1.0);
    }
}
