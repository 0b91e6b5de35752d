use cellsim_core::snapshot::{Frame, CHART_HEIGHT};
use cellsim_data::CellKind;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget};

use crate::renderer::PlaneWidget;

/// Four bars, one per kind, scaled to this frame's largest count. Each bar
/// is labelled with its raw count.
pub struct PopulationChartWidget<'a> {
    pub frame: &'a Frame,
}

impl<'a> Widget for PopulationChartWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let bars: Vec<Bar> = CellKind::ALL
            .iter()
            .map(|&kind| {
                Bar::default()
                    .value(self.frame.chart[kind.index()])
                    .text_value(self.frame.counts.get(kind).to_string())
                    .label(Line::from(kind.label()))
                    .style(Style::default().fg(PlaneWidget::color_for_kind(kind)))
            })
            .collect();

        let bar_width = (area.width.saturating_sub(2) / 4).saturating_sub(1).max(1);
        BarChart::default()
            .block(Block::default().title(" Population ").borders(Borders::ALL))
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .max(CHART_HEIGHT)
            .render(area, buf);
    }
}
