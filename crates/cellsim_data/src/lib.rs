//! Core data structures for the cell simulation.
//!
//! Everything here is plain state: no randomness, no rules. The rules that
//! act on these types live in `cellsim_core`.

pub mod data;

pub use data::cell::{Cell, CellId, CellKind, Position};
pub use data::stats::{KindCounts, PopulationStats};
