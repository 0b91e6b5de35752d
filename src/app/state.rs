use cellsim_core::snapshot::Frame;
use cellsim_core::{AppConfig, Command, Simulation, SpawnRequest};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Interactive session state: the simulation plus what the UI needs between
/// frames.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub sim: Simulation,
    pub latest_frame: Frame,
    /// Where the plane was drawn last frame, for mapping clicks.
    pub last_plane_rect: Rect,
    pub frame_interval: Duration,
}

impl App {
    pub fn new(config: AppConfig, seeds: &[SpawnRequest]) -> Self {
        let frame_interval = Duration::from_secs_f64(1.0 / config.target_fps.max(1) as f64);
        let mut sim = Simulation::new(config, Instant::now());
        for req in seeds {
            sim.spawn_at(req.kind, req.x, req.y);
        }
        let latest_frame = sim.frame();
        Self {
            running: true,
            show_help: false,
            sim,
            latest_frame,
            last_plane_rect: Rect::default(),
            frame_interval,
        }
    }

    /// Applies a command and refreshes the displayed frame, so edits made
    /// while paused show up immediately.
    pub fn submit(&mut self, command: Command) {
        self.sim.apply(command, Instant::now());
        self.latest_frame = self.sim.frame();
    }

    /// Advances one display frame. While paused the frame is refreshed
    /// without ticking.
    pub fn update(&mut self, now: Instant) {
        self.latest_frame = match self.sim.step(now) {
            Some(frame) => frame,
            None => self.sim.frame(),
        };
    }
}
