use crate::ui::app::App;
use crate::ui::layout::button_rect;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Refresh,
    Quit,
}

pub fn classify_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter | KeyCode::Char(' ') => {
            KeyAction::Refresh
        }
        _ => KeyAction::None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match classify_key(key) {
        KeyAction::Quit => app.request_quit(),
        KeyAction::Refresh => {
            app.request_refresh();
        }
        KeyAction::None => {}
    }
}

/// True for a left-button press inside the refresh button.
pub fn is_button_click(mouse: MouseEvent, screen: Rect) -> bool {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
        && button_rect(screen).contains(Position::new(mouse.column, mouse.row))
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let Some((cols, rows)) = app.size() else {
        return;
    };
    if is_button_click(mouse, Rect::new(0, 0, cols, rows)) {
        app.request_refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn refresh_keys() {
        for code in [KeyCode::Char('r'), KeyCode::Enter, KeyCode::Char(' ')] {
            assert_eq!(classify_key(press(code, KeyModifiers::NONE)), KeyAction::Refresh);
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            classify_key(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            KeyAction::Quit
        );
        assert_eq!(
            classify_key(press(KeyCode::Esc, KeyModifiers::NONE)),
            KeyAction::Quit
        );
        assert_eq!(
            classify_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn ctrl_r_is_not_refresh() {
        assert_eq!(
            classify_key(press(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            KeyAction::None
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = press(KeyCode::Char('r'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(classify_key(key), KeyAction::None);
    }

    #[test]
    fn click_inside_button_counts() {
        let screen = Rect::new(0, 0, 80, 24);
        assert!(is_button_click(click(40, 19), screen));
        assert!(!is_button_click(click(40, 5), screen));
    }

    #[test]
    fn right_click_is_ignored() {
        let screen = Rect::new(0, 0, 80, 24);
        let mut event = click(40, 19);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert!(!is_button_click(event, screen));
    }
}
