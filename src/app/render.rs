use crate::app::state::App;
use cellsim_tui::renderer::PlaneWidget;
use cellsim_tui::views::chart::PopulationChartWidget;
use cellsim_tui::views::help::HelpWidget;
use cellsim_tui::views::status::StatusWidget;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Status
                Constraint::Min(0),    // Plane
            ])
            .split(main_layout[0]);

        self.last_plane_rect = left_layout[1];

        f.render_widget(
            StatusWidget {
                frame: &self.latest_frame,
            },
            left_layout[0],
        );
        f.render_widget(PlaneWidget::new(&self.latest_frame), left_layout[1]);
        f.render_widget(
            PopulationChartWidget {
                frame: &self.latest_frame,
            },
            main_layout[1],
        );

        if self.show_help {
            f.render_widget(HelpWidget, f.area());
        }
    }
}
