use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

pub struct HelpWidget;

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let help_width = 44.min(area.width.saturating_sub(4));
        let help_height = 15.min(area.height.saturating_sub(4));
        let help_area = Rect::new(
            area.x + (area.width - help_width) / 2,
            area.y + (area.height - help_height) / 2,
            help_width,
            help_height,
        );

        Clear.render(help_area, buf);
        let help_text = vec![
            Line::styled(
                " Controls ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(" [B] Brain  [L] Liver  [N] Normal  [D] Disease"),
            Line::from(" [Click]    Spawn selected kind"),
            Line::from(" [Up/Down]  Infection strength"),
            Line::from(" [Left/Right] Simulation speed"),
            Line::from(" [Space]    Pause / resume"),
            Line::from(" [C]        Clear all cells"),
            Line::from(" [H]        Toggle this help"),
            Line::from(" [Q]        Quit"),
            Line::from(""),
            Line::from(" Disease spawns stack one cell per"),
            Line::from(" strength level."),
        ];

        Paragraph::new(help_text)
            .block(Block::default().title(" Help ").borders(Borders::ALL))
            .render(help_area, buf);
    }
}
