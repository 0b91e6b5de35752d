use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of cell categories. Each kind carries its own rate constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Brain,
    Liver,
    Normal,
    Pathogen,
}

impl CellKind {
    /// Fixed display order used by the stats panel and the bar chart.
    pub const ALL: [CellKind; 4] = [
        CellKind::Brain,
        CellKind::Liver,
        CellKind::Normal,
        CellKind::Pathogen,
    ];

    /// Position of this kind inside [`CellKind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            CellKind::Brain => 0,
            CellKind::Liver => 1,
            CellKind::Normal => 2,
            CellKind::Pathogen => 3,
        }
    }

    #[must_use]
    pub const fn is_pathogen(self) -> bool {
        matches!(self, CellKind::Pathogen)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CellKind::Brain => "Brain",
            CellKind::Liver => "Liver",
            CellKind::Normal => "Normal",
            CellKind::Pathogen => "Disease",
        }
    }

    /// Colour name handed to render sinks.
    #[must_use]
    pub const fn color_key(self) -> &'static str {
        match self {
            CellKind::Brain => "blue",
            CellKind::Liver => "red",
            CellKind::Normal => "green",
            CellKind::Pathogen => "black",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Brain => '●',
            CellKind::Liver => '◉',
            CellKind::Normal => '•',
            CellKind::Pathogen => '☣',
        }
    }

    /// Parses the lowercase name used in config files and on the command line.
    /// `disease` is accepted as an alias for the pathogen kind.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "brain" | "b" => Some(CellKind::Brain),
            "liver" | "l" => Some(CellKind::Liver),
            "normal" | "n" => Some(CellKind::Normal),
            "pathogen" | "disease" | "d" => Some(CellKind::Pathogen),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable identifier handed out by the population arena. Never reused within
/// one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u64);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Location on the bounded plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point `distance` away from `self` along `angle` (radians).
    #[must_use]
    pub fn offset(&self, angle: f64, distance: f64) -> Position {
        Position {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }

    /// True when the point lies inside `[0, width) × [0, height)`.
    #[must_use]
    pub fn within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.x < width && self.y >= 0.0 && self.y < height
    }
}

/// One simulated cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub parent_id: Option<CellId>,
    pub kind: CellKind,
    pub position: Position,
    /// Ticks lived so far.
    pub age: u64,
    /// Death is forced once `age` exceeds this.
    pub lifespan: u64,
    /// Goes negative before being reset; `<= 0` triggers a reproduction attempt.
    pub reproduction_countdown: i64,
    pub radius: f64,
    pub alive: bool,
}
