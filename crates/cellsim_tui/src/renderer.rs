use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use cellsim_core::snapshot::{CellSnapshot, Frame};
use cellsim_data::CellKind;

const PLANE_BG: Color = Color::Rgb(235, 235, 235);

/// Draws the plane, scaling plane coordinates onto the available terminal
/// cells. Several cells can share one terminal cell; the last one drawn wins.
pub struct PlaneWidget<'a> {
    frame: &'a Frame,
}

impl<'a> PlaneWidget<'a> {
    pub fn new(frame: &'a Frame) -> Self {
        Self { frame }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    pub fn color_for_kind(kind: CellKind) -> Color {
        match kind.color_key() {
            "blue" => Color::Blue,
            "red" => Color::Red,
            "green" => Color::Green,
            _ => Color::Black,
        }
    }

    pub fn plane_to_screen(
        x: f64,
        y: f64,
        plane: (f64, f64),
        area: Rect,
    ) -> Option<(u16, u16)> {
        let inner = Self::get_inner_area(area);
        let (width, height) = plane;
        if inner.width == 0 || inner.height == 0 || width <= 0.0 || height <= 0.0 {
            return None;
        }
        if !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
            return None;
        }
        let col = (x / width * f64::from(inner.width)) as u16;
        let row = (y / height * f64::from(inner.height)) as u16;
        Some((
            inner.x + col.min(inner.width - 1),
            inner.y + row.min(inner.height - 1),
        ))
    }

    /// Maps a terminal click to the plane position at the centre of the
    /// clicked terminal cell. Clicks on the border or outside return `None`.
    pub fn screen_to_plane(
        screen_x: u16,
        screen_y: u16,
        plane: (f64, f64),
        area: Rect,
    ) -> Option<(f64, f64)> {
        let inner = Self::get_inner_area(area);
        if screen_x >= inner.left()
            && screen_x < inner.right()
            && screen_y >= inner.top()
            && screen_y < inner.bottom()
        {
            let (width, height) = plane;
            let col = f64::from(screen_x - inner.x) + 0.5;
            let row = f64::from(screen_y - inner.y) + 0.5;
            Some((
                col * width / f64::from(inner.width),
                row * height / f64::from(inner.height),
            ))
        } else {
            None
        }
    }

    fn draw_cell(&self, cell: &CellSnapshot, area: Rect, buf: &mut Buffer) {
        let plane = (self.frame.width, self.frame.height);
        if let Some((x, y)) = Self::plane_to_screen(cell.x, cell.y, plane, area) {
            let target = &mut buf[(x, y)];
            target.set_symbol(&cell.kind.symbol().to_string());
            target.set_fg(Self::color_for_kind(cell.kind));
            if cell.kind.is_pathogen() {
                target.set_style(Style::default().add_modifier(Modifier::BOLD));
            }
        }
    }
}

impl<'a> Widget for PlaneWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.frame.paused {
            format!(" Plane (Tick: {}) [PAUSED] ", self.frame.tick)
        } else {
            format!(" Plane (Tick: {}) ", self.frame.tick)
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .render(area, buf);

        let inner = Self::get_inner_area(area);
        buf.set_style(inner, Style::default().bg(PLANE_BG));

        for cell in &self.frame.cells {
            self.draw_cell(cell, area, buf);
        }
    }
}
