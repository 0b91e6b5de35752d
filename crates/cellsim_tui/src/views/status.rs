use cellsim_core::snapshot::Frame;
use cellsim_data::CellKind;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::renderer::PlaneWidget;

/// Counts, controls and simulated time for the current frame.
pub struct StatusWidget<'a> {
    pub frame: &'a Frame,
}

impl<'a> StatusWidget<'a> {
    fn count_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(format!("Pop: {} | ", self.frame.population()))];
        for kind in CellKind::ALL {
            spans.push(Span::styled(
                format!("{} {}", kind.symbol(), kind.label()),
                Style::default().fg(PlaneWidget::color_for_kind(kind)),
            ));
            spans.push(Span::raw(format!(": {}  ", self.frame.counts.get(kind))));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().title(" Status ").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(self.count_line()).render(lines[0], buf);

        let run_state = if self.frame.paused {
            Span::styled(
                " PAUSED ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" RUNNING ", Style::default().fg(Color::Green))
        };
        Paragraph::new(Line::from(vec![
            run_state,
            Span::raw(format!(
                " | Selected: {} | Strength: {} | Speed: x{}",
                self.frame.selected_kind.label(),
                self.frame.strength,
                self.frame.speed
            )),
        ]))
        .render(lines[1], buf);

        Paragraph::new(format!(
            "Simulated: {} | Tick: {} (+{})",
            self.frame.total_elapsed, self.frame.tick, self.frame.elapsed
        ))
        .render(lines[2], buf);

        let stats = &self.frame.stats;
        Paragraph::new(format!(
            "Births: {} (blocked {}) | Deaths: natural {} aged {} infected {} | Peak: {}",
            stats.total_births,
            stats.total_blocked_births,
            stats.total_natural_deaths,
            stats.total_senescence_deaths,
            stats.total_infection_deaths,
            stats.peak_population,
        ))
        .style(Style::default().fg(Color::DarkGray))
        .render(lines[3], buf);
    }
}
