//! Per-cell lifecycle rules: creation, ageing, natural death and reproduction.

use crate::config::KindParams;
use crate::rng::RandomSource;
use cellsim_data::{Cell, CellId, CellKind, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    /// Lost the per-tick natural death roll.
    Natural,
    /// Outlived the kind's lifespan.
    Senescence,
    /// Killed by a nearby pathogen.
    Infection,
}

/// Result of the reproduction step for one cell on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reproduction {
    /// Countdown still running, or the cell is dead.
    NotDue,
    /// Attempt made; the child belongs at this position.
    Child(Position),
    /// Attempt made, but the target lay outside the plane.
    Blocked,
}

/// Builds a fresh cell with age 0 and a full reproduction countdown.
#[must_use]
pub fn create_cell(
    id: CellId,
    parent_id: Option<CellId>,
    kind: CellKind,
    position: Position,
    params: &KindParams,
) -> Cell {
    Cell {
        id,
        parent_id,
        kind,
        position,
        age: 0,
        lifespan: params.lifespan,
        reproduction_countdown: i64::from(params.reproduction_interval),
        radius: params.radius,
        alive: true,
    }
}

pub trait CellLogic {
    /// Step 1: age one tick and roll for natural death. Also counts the
    /// reproduction countdown down, which happens whether or not the cell
    /// survives the roll. Returns the cause if the cell died.
    fn age_one_tick(&mut self, params: &KindParams, rng: &mut dyn RandomSource)
        -> Option<DeathCause>;

    /// Step 2: attempt reproduction when the countdown has run out. The
    /// countdown is reset on every attempt, successful or not.
    fn try_reproduce(
        &mut self,
        params: &KindParams,
        width: f64,
        height: f64,
        rng: &mut dyn RandomSource,
    ) -> Reproduction;

    fn is_senescent(&self) -> bool;
}

impl CellLogic for Cell {
    fn age_one_tick(
        &mut self,
        params: &KindParams,
        rng: &mut dyn RandomSource,
    ) -> Option<DeathCause> {
        if !self.alive {
            return None;
        }
        self.age += 1;
        let mut cause = None;
        if rng.chance(params.death_rate) {
            cause = Some(DeathCause::Natural);
        }
        if cause.is_none() && self.is_senescent() {
            cause = Some(DeathCause::Senescence);
        }
        if cause.is_some() {
            self.alive = false;
        }
        self.reproduction_countdown -= 1;
        cause
    }

    fn try_reproduce(
        &mut self,
        params: &KindParams,
        width: f64,
        height: f64,
        rng: &mut dyn RandomSource,
    ) -> Reproduction {
        if self.reproduction_countdown > 0 || !self.alive {
            return Reproduction::NotDue;
        }
        let angle = rng.direction();
        let target = self.position.offset(angle, self.radius * 2.0);
        self.reproduction_countdown = i64::from(params.reproduction_interval);
        if target.within(width, height) {
            Reproduction::Child(target)
        } else {
            Reproduction::Blocked
        }
    }

    fn is_senescent(&self) -> bool {
        self.age > self.lifespan
    }
}
