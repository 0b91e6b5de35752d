//! # Cellsim Core
//!
//! The population engine for cellsim, a toy model of tissue cells and a
//! pathogen on a bounded 2-D plane.
//!
//! This crate contains:
//! - The per-tick lifecycle rules (aging, natural death, reproduction)
//! - The pathogen infection scan
//! - The simulation clock and its speed multiplier
//! - Per-kind tallies, the population histogram and session statistics
//! - The [`Simulation`] context that front-ends drive through [`Command`]s
//!
//! ## Example
//!
//! ```
//! use cellsim_core::{AppConfig, Simulation};
//! use cellsim_data::CellKind;
//! use std::time::Instant;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//!
//! let mut sim = Simulation::new(config, Instant::now());
//! sim.spawn_at(CellKind::Normal, 400.0, 300.0);
//! let frame = sim.step(Instant::now()).expect("running");
//! assert_eq!(frame.tick, 1);
//! ```

/// Simulated-time clock with a speed multiplier
pub mod clock;
/// Configuration management for simulation parameters
pub mod config;
pub mod error;
/// Pathogen proximity scan
pub mod infection;
/// Cell lifecycle rules (aging, death, reproduction)
pub mod lifecycle;
/// Tick timing and structured logging
pub mod metrics;
/// The cell arena and its tick loop
pub mod population;
pub mod request;
/// Injectable randomness
pub mod rng;
pub mod simulation;
/// Frame payloads for render and stats sinks
pub mod snapshot;
pub mod stats;

pub use clock::{SimDuration, SimulationClock};
pub use config::AppConfig;
pub use error::SimError;
pub use metrics::{init_file_logging, init_logging, Metrics};
pub use population::{Population, TickReport};
pub use request::SpawnRequest;
pub use rng::RandomSource;
pub use simulation::{Command, Settings, Simulation};
pub use snapshot::{CellSnapshot, Frame};
