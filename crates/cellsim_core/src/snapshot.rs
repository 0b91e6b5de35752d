use crate::clock::SimDuration;
use crate::population::TickReport;
use crate::stats::histogram;
use cellsim_data::{Cell, CellId, CellKind, KindCounts, PopulationStats};
use serde::Serialize;

/// Height of the tallest population chart bar.
pub const CHART_HEIGHT: u64 = 100;

/// Render-sink view of one live cell.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CellSnapshot {
    pub id: CellId,
    pub kind: CellKind,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color_key: &'static str,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            id: cell.id,
            kind: cell.kind,
            x: cell.position.x,
            y: cell.position.y,
            radius: cell.radius,
            color_key: cell.kind.color_key(),
        }
    }
}

/// Everything the render and stats sinks consume for one frame.
#[derive(Serialize, Clone, Debug)]
pub struct Frame {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    /// Live cells only.
    pub cells: Vec<CellSnapshot>,
    pub counts: KindCounts,
    /// Population chart bar heights, see [`CHART_HEIGHT`].
    pub chart: [u64; 4],
    /// Simulated time covered by this tick.
    pub elapsed: SimDuration,
    /// Simulated time since the clock origin.
    pub total_elapsed: SimDuration,
    pub strength: u32,
    pub speed: u32,
    pub selected_kind: CellKind,
    pub paused: bool,
    pub report: TickReport,
    pub stats: PopulationStats,
}

impl Frame {
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.len()
    }
}

pub(crate) fn chart_for(counts: &KindCounts) -> [u64; 4] {
    histogram(counts, CHART_HEIGHT)
}

pub(crate) fn capture_cells(cells: &[Cell]) -> Vec<CellSnapshot> {
    cells
        .iter()
        .filter(|c| c.alive)
        .map(CellSnapshot::from)
        .collect()
}
