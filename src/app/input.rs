use crate::app::state::App;
use cellsim_core::Command;
use cellsim_data::CellKind;
use cellsim_tui::renderer::PlaneWidget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Maps a key press to a simulation command. Keys that only affect the UI
/// (help, quit) return `None`.
pub fn key_command(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Char('b') | KeyCode::Char('B') => Command::SelectKind(CellKind::Brain),
        KeyCode::Char('l') | KeyCode::Char('L') => Command::SelectKind(CellKind::Liver),
        KeyCode::Char('n') | KeyCode::Char('N') => Command::SelectKind(CellKind::Normal),
        KeyCode::Char('d') | KeyCode::Char('D') => Command::SelectKind(CellKind::Pathogen),
        KeyCode::Up => Command::StrengthUp,
        KeyCode::Down => Command::StrengthDown,
        KeyCode::Right => Command::SpeedUp,
        KeyCode::Left => Command::SpeedDown,
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('c') if !key.modifiers.contains(KeyModifiers::CONTROL) => Command::Clear,
        KeyCode::Char('C') => Command::Clear,
        _ => return None,
    };
    Some(command)
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.running = false,
            // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                self.show_help = !self.show_help
            }
            _ => {
                if let Some(command) = key_command(key) {
                    self.submit(command);
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let plane = (self.latest_frame.width, self.latest_frame.height);
            if let Some((x, y)) =
                PlaneWidget::screen_to_plane(mouse.column, mouse.row, plane, self.last_plane_rect)
            {
                self.submit(Command::Spawn { x, y });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellsim_core::AppConfig;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(
            key_command(press(KeyCode::Char('d'))),
            Some(Command::SelectKind(CellKind::Pathogen))
        );
        assert_eq!(key_command(press(KeyCode::Up)), Some(Command::StrengthUp));
        assert_eq!(key_command(press(KeyCode::Left)), Some(Command::SpeedDown));
        assert_eq!(key_command(press(KeyCode::Char(' '))), Some(Command::TogglePause));
        assert_eq!(key_command(press(KeyCode::Char('c'))), Some(Command::Clear));
        assert_eq!(key_command(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_ctrl_c_quits_instead_of_clearing() {
        let mut app = App::new(AppConfig::default(), &[]);
        app.submit(Command::Spawn { x: 10.0, y: 10.0 });
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
        assert_eq!(app.sim.population().len(), 1);
    }

    #[test]
    fn test_click_spawns_selected_kind() {
        let mut app = App::new(AppConfig::default(), &[]);
        app.last_plane_rect = Rect::new(0, 0, 82, 62);
        app.handle_key(press(KeyCode::Char('l')));
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 41,
            row: 31,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.latest_frame.counts.get(CellKind::Liver), 1);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.latest_frame.population(), 1, "border click ignored");
    }
}
