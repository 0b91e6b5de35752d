//! Tick timing and structured logging setup.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const SUMMARY_INTERVAL: u64 = 1000;

/// Per-session tick timing.
pub struct Metrics {
    tick_count: u64,
    population: usize,
    last_duration: Duration,
    total_duration: Duration,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            population: 0,
            last_duration: Duration::ZERO,
            total_duration: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, duration: Duration, population: usize) {
        self.tick_count += 1;
        self.population = population;
        self.last_duration = duration;
        self.total_duration += duration;

        if self.tick_count.is_multiple_of(SUMMARY_INTERVAL) {
            tracing::info!(
                tick = self.tick_count,
                population,
                duration_us = duration.as_micros() as u64,
                avg_us = self.average_duration().as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    #[must_use]
    pub fn last_duration(&self) -> Duration {
        self.last_duration
    }

    #[must_use]
    pub fn average_duration(&self) -> Duration {
        if self.tick_count == 0 {
            return Duration::ZERO;
        }
        self.total_duration.div_f64(self.tick_count as f64)
    }

    /// Wall time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a stderr subscriber honouring `RUST_LOG`.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

/// Installs a subscriber that writes to `path`, for modes that own the
/// terminal.
pub fn init_file_logging(path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let file = File::create(path)?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish(),
    )
    .ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.average_duration(), Duration::ZERO);
    }

    #[test]
    fn test_record_tick() {
        let mut metrics = Metrics::new();
        metrics.record_tick(Duration::from_millis(2), 100);
        metrics.record_tick(Duration::from_millis(4), 90);
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.population(), 90);
        assert_eq!(metrics.last_duration(), Duration::from_millis(4));
        assert_eq!(metrics.average_duration(), Duration::from_millis(3));
    }

    #[test]
    fn test_average_survives_tick_count_past_u32() {
        let mut metrics = Metrics::new();
        metrics.tick_count = 1 << 32;
        metrics.total_duration = Duration::from_secs(1 << 32);
        assert_eq!(metrics.average_duration(), Duration::from_secs(1));
    }
}
