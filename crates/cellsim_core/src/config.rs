//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every rate constant the engine uses can be tuned
//! here.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! target_fps = 60
//!
//! [world]
//! width = 800.0
//! height = 600.0
//!
//! [kinds.normal]
//! death_rate = 0.003
//! lifespan = 600
//! radius = 10.0
//! reproduction_interval = 50
//!
//! [infection]
//! radius = 50.0
//! max_strength = 10
//! spread_rate = 0.02
//! initial_strength = 1
//! ```

use cellsim_data::CellKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Plane dimensions and randomness seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Seeds the engine RNG when set. Unset means entropy seeding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            seed: None,
        }
    }
}

/// Fixed rate constants for one cell kind.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct KindParams {
    /// Per-tick probability of natural death.
    pub death_rate: f64,
    /// Ticks after which the cell dies of old age.
    pub lifespan: u64,
    pub radius: f64,
    /// Ticks between reproduction attempts.
    pub reproduction_interval: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct KindsConfig {
    pub brain: KindParams,
    pub liver: KindParams,
    pub normal: KindParams,
    pub pathogen: KindParams,
}

impl Default for KindsConfig {
    fn default() -> Self {
        Self {
            brain: KindParams {
                death_rate: 0.001,
                lifespan: 1800,
                radius: 10.0,
                reproduction_interval: 50,
            },
            liver: KindParams {
                death_rate: 0.002,
                lifespan: 1200,
                radius: 20.0,
                reproduction_interval: 50,
            },
            normal: KindParams {
                death_rate: 0.003,
                lifespan: 600,
                radius: 10.0,
                reproduction_interval: 50,
            },
            pathogen: KindParams {
                death_rate: 0.005,
                lifespan: 300,
                radius: 10.0,
                reproduction_interval: 75,
            },
        }
    }
}

impl KindsConfig {
    #[must_use]
    pub fn get(&self, kind: CellKind) -> &KindParams {
        match kind {
            CellKind::Brain => &self.brain,
            CellKind::Liver => &self.liver,
            CellKind::Normal => &self.normal,
            CellKind::Pathogen => &self.pathogen,
        }
    }

    pub fn get_mut(&mut self, kind: CellKind) -> &mut KindParams {
        match kind {
            CellKind::Brain => &mut self.brain,
            CellKind::Liver => &mut self.liver,
            CellKind::Normal => &mut self.normal,
            CellKind::Pathogen => &mut self.pathogen,
        }
    }

    /// Sets every kind's natural death rate. Mostly useful for isolating other
    /// rules in experiments.
    pub fn set_all_death_rates(&mut self, rate: f64) {
        for kind in CellKind::ALL {
            self.get_mut(kind).death_rate = rate;
        }
    }
}

/// Pathogen contact rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InfectionConfig {
    /// Contact distance within which a pathogen may kill.
    pub radius: f64,
    pub max_strength: u32,
    /// Kill probability per victim per tick at maximum strength.
    pub spread_rate: f64,
    pub initial_strength: u32,
}

impl Default for InfectionConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            max_strength: 10,
            spread_rate: 0.02,
            initial_strength: 1,
        }
    }
}

impl InfectionConfig {
    /// Clamps a requested strength into `[1, max_strength]`.
    #[must_use]
    pub fn clamp_strength(&self, strength: u32) -> u32 {
        strength.clamp(1, self.max_strength)
    }

    /// Per-victim kill probability for one pathogen at `strength`.
    #[must_use]
    pub fn kill_probability(&self, strength: u32) -> f64 {
        let s = self.clamp_strength(strength);
        (f64::from(s) / f64::from(self.max_strength)) * self.spread_rate
    }
}

/// Real-to-simulated time mapping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Simulated seconds per real second at speed 1.
    pub seconds_per_baseline: f64,
    pub initial_speed: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            seconds_per_baseline: 86_400.0,
            initial_speed: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub target_fps: u64,
    pub world: WorldConfig,
    pub kinds: KindsConfig,
    pub infection: InfectionConfig,
    pub clock: ClockConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            world: WorldConfig::default(),
            kinds: KindsConfig::default(),
            infection: InfectionConfig::default(),
            clock: ClockConfig::default(),
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.world.width > 0.0 && self.world.width.is_finite(),
            "World width must be positive"
        );
        anyhow::ensure!(
            self.world.height > 0.0 && self.world.height.is_finite(),
            "World height must be positive"
        );

        for kind in CellKind::ALL {
            let p = self.kinds.get(kind);
            anyhow::ensure!(
                (0.0..=1.0).contains(&p.death_rate),
                "{} death rate must be in [0.0, 1.0]",
                kind
            );
            anyhow::ensure!(p.lifespan > 0, "{} lifespan must be positive", kind);
            anyhow::ensure!(
                p.radius > 0.0 && p.radius.is_finite(),
                "{} radius must be positive",
                kind
            );
            anyhow::ensure!(
                p.reproduction_interval > 0,
                "{} reproduction interval must be positive",
                kind
            );
        }

        anyhow::ensure!(
            self.infection.radius >= 0.0,
            "Infection radius must be non-negative"
        );
        anyhow::ensure!(
            self.infection.max_strength > 0,
            "Max infection strength must be positive"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.infection.spread_rate),
            "Spread rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (1..=self.infection.max_strength).contains(&self.infection.initial_strength),
            "Initial strength must be in [1, max_strength]"
        );

        anyhow::ensure!(
            self.clock.seconds_per_baseline > 0.0,
            "Seconds per baseline must be positive"
        );
        anyhow::ensure!(self.clock.initial_speed >= 1, "Initial speed must be >= 1");

        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file is unreadable or
    /// invalid. Writes the defaults out when no file exists yet.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
                }
            },
            Err(_) if !path.exists() => {
                let default = Self::default();
                if let Ok(toml_str) = toml::to_string(&default) {
                    if let Err(e) = std::fs::write(path, toml_str) {
                        tracing::debug!(path = %path.display(), error = %e, "Could not write default config");
                    }
                }
                return default;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            }
        }
        Self::default()
    }

    /// Strict variant of [`AppConfig::load`] that reports every failure.
    pub fn load_strict(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<Self>(&content)?;
        config
            .validate()
            .map_err(|e| crate::error::SimError::validation(e.to_string()))?;
        Ok(config)
    }
}
