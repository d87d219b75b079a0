pub mod text;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::App;
use super::widgets::{Focus, HitTarget, InputEdit, WidgetEvent, WidgetKind};

/// Handle a key press: global shortcuts first, then the focused widget
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.notice = None;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    // Lock overlay intercepts all input
    if app.is_locked() {
        app.dispatch(WidgetKind::Lock, classify(key));
        return;
    }

    // Help overlay closes on any key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match (key.code, ctrl) {
        (KeyCode::F(1), _) => app.show_help = true,
        (KeyCode::Tab, _) => app.cycle_focus(true),
        (KeyCode::BackTab, _) => app.cycle_focus(false),
        (KeyCode::Char('b'), true) => {
            app.dispatch(WidgetKind::Sidebar, WidgetEvent::KeyPress(key));
        }
        (KeyCode::Char('w'), true) => {
            app.dispatch(WidgetKind::Wallpaper, WidgetEvent::Change);
        }
        (KeyCode::Char('l'), true) => {
            app.dispatch(WidgetKind::Lock, WidgetEvent::KeyPress(key));
        }
        _ => {
            if let Some(focus) = app.focus {
                app.dispatch(focus.into(), classify(key));
            }
        }
    }
}

/// Handle a mouse event. Only left-button presses do anything.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    app.notice = None;
    if app.show_help {
        app.show_help = false;
        return;
    }
    let Some(target) = app.hit_map.resolve(mouse.column, mouse.row) else {
        return;
    };
    let owner = target.owner();
    if app.is_locked() && owner != WidgetKind::Lock {
        return;
    }
    if let Some(focus) = focus_for(target) {
        app.focus = Some(focus);
    }
    app.dispatch(owner, WidgetEvent::Click(target));
}

/// Sort a key into a text edit or a plain key press.
fn classify(key: KeyEvent) -> WidgetEvent {
    let word = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char(c) if !word => WidgetEvent::Input(InputEdit::Insert(c)),
        KeyCode::Backspace if word => WidgetEvent::Input(InputEdit::DeleteWord),
        KeyCode::Backspace => WidgetEvent::Input(InputEdit::Backspace),
        KeyCode::Delete => WidgetEvent::Input(InputEdit::Delete),
        _ => WidgetEvent::KeyPress(key),
    }
}

/// Clicking inside a focusable widget focuses it.
fn focus_for(target: HitTarget) -> Option<Focus> {
    match target.owner() {
        WidgetKind::Checklist => Some(Focus::Checklist),
        WidgetKind::Calendar => Some(Focus::Calendar),
        WidgetKind::Notepad => Some(Focus::Notepad),
        WidgetKind::Theme => Some(Focus::Theme),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DashboardConfig;
    use crate::tui::render::test_helpers::{test_app, test_app_with};
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        handle_mouse(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn classify_separates_text_from_keys() {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            classify(plain(KeyCode::Char('a'))),
            WidgetEvent::Input(InputEdit::Insert('a'))
        );
        assert_eq!(
            classify(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            WidgetEvent::Input(InputEdit::Insert('A'))
        );
        assert_eq!(
            classify(KeyEvent::new(KeyCode::Backspace, KeyModifiers::ALT)),
            WidgetEvent::Input(InputEdit::DeleteWord)
        );
        let enter = plain(KeyCode::Enter);
        assert_eq!(classify(enter), WidgetEvent::KeyPress(enter));
        let alt_bracket = KeyEvent::new(KeyCode::Char(']'), KeyModifiers::ALT);
        assert_eq!(classify(alt_bracket), WidgetEvent::KeyPress(alt_bracket));
    }

    #[test]
    fn typing_goes_to_focused_checklist() {
        let mut app = test_app();
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.store.get("checklistItems").as_deref(),
            Some(r#"[{"text":"Buy milk","checked":false}]"#)
        );
    }

    #[test]
    fn tab_moves_typing_to_notepad() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Some(Focus::Notepad));
        type_str(&mut app, "hi");
        assert_eq!(app.store.get("notepadContent").as_deref(), Some("hi"));
    }

    #[test]
    fn ctrl_w_flips_wallpaper() {
        let mut app = test_app();
        ctrl(&mut app, 'w');
        assert_eq!(app.store.get("wallpaperState").as_deref(), Some("image"));
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = test_app();
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn help_swallows_next_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.show_help);
        assert!(app.store.get("checklistItems").is_none());
    }

    #[test]
    fn locked_dashboard_routes_keys_to_keypad_only() {
        let mut config = DashboardConfig::default();
        config.lock.enabled = true;
        let mut app = test_app_with(config);
        assert!(app.is_locked());

        ctrl(&mut app, 'w');
        type_str(&mut app, "99");
        press(&mut app, KeyCode::Enter);
        assert!(app.is_locked());
        assert!(app.store.get("wallpaperState").is_none());

        type_str(&mut app, "1234");
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_locked());

        ctrl(&mut app, 'l');
        assert!(app.is_locked());
    }

    #[test]
    fn clicks_resolve_through_hit_map() {
        let mut app = test_app();
        app.hit_map.push(
            ratatui::layout::Rect::new(10, 5, 10, 1),
            HitTarget::CalendarNext,
        );
        let before = app.widgets.calendar.as_ref().map(|c| c.month());
        click(&mut app, 12, 5);
        let after = app.widgets.calendar.as_ref().map(|c| c.month());
        assert_eq!(after, before.map(|m| m.next()));
        assert_eq!(app.focus, Some(Focus::Calendar));

        // nothing recorded there
        click(&mut app, 0, 0);
        assert_eq!(app.focus, Some(Focus::Calendar));
    }
}
