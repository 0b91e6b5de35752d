pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use cellsim_tui::Tui;

impl App {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_frame = Instant::now();

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        tracing::info!(
            fps = (1.0 / self.frame_interval.as_secs_f64()).round() as u64,
            "Interactive session started"
        );

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            let timeout = self.frame_interval.saturating_sub(last_frame.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                    }
                    _ => {}
                }
            }

            if last_frame.elapsed() >= self.frame_interval {
                let now = Instant::now();
                self.update(now);
                last_frame = now;
            }

            // Let the signal task run on the single-threaded runtime.
            tokio::task::yield_now().await;
        }

        let stats = self.sim.stats();
        tracing::info!(
            ticks = stats.ticks,
            population = stats.population,
            peak = stats.peak_population,
            "Interactive session ended"
        );
        Ok(())
    }
}
