use crossterm::event::{KeyCode, KeyModifiers};

use crate::io::store::KeyValueStore;
use crate::model::config::LockConfig;
use crate::ops::passcode::{Attempt, PasscodeGate};

use super::{EventKind, EventResult, HitTarget, InputEdit, Widget, WidgetEvent, WidgetKind};

/// Keypad labels in grid order; `C` clears, `E` submits
pub const KEYPAD: [[char; 3]; 4] = [
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
    ['C', '0', 'E'],
];

/// Cosmetic keypad overlay. While locked it takes every event.
#[derive(Debug)]
pub struct LockScreen {
    gate: PasscodeGate,
    locked: bool,
    hint: Option<String>,
    message: Option<String>,
}

impl LockScreen {
    pub fn init(config: &LockConfig) -> Self {
        LockScreen {
            gate: PasscodeGate::new(config.code.clone()),
            locked: config.enabled,
            hint: config.hint.clone(),
            message: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn entry_len(&self) -> usize {
        self.gate.entry_len()
    }

    pub fn lock(&mut self) {
        self.gate.clear();
        self.message = None;
        self.locked = true;
    }

    fn press(&mut self, key: char) -> EventResult {
        match key {
            'C' => self.gate.clear(),
            'E' => self.submit(),
            digit => {
                self.gate.push_digit(digit);
            }
        }
        EventResult::Handled
    }

    fn submit(&mut self) {
        match self.gate.submit() {
            Attempt::Unlocked => {
                log::info!("dashboard unlocked");
                self.locked = false;
                self.message = None;
            }
            Attempt::Rejected => {
                self.message = Some("Incorrect code".to_string());
            }
        }
    }
}

impl Widget for LockScreen {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Lock
    }

    fn bindings(&self) -> &'static [EventKind] {
        &[EventKind::Click, EventKind::Input, EventKind::KeyPress]
    }

    fn handle(&mut self, event: &WidgetEvent, _store: &mut dyn KeyValueStore) -> EventResult {
        if !self.locked {
            return match event {
                WidgetEvent::KeyPress(key)
                    if key.code == KeyCode::Char('l')
                        && key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    self.lock();
                    EventResult::Handled
                }
                _ => EventResult::Ignored,
            };
        }
        match event {
            WidgetEvent::Click(HitTarget::KeypadKey(key)) => self.press(*key),
            WidgetEvent::Input(InputEdit::Insert(c)) if c.is_ascii_digit() => self.press(*c),
            WidgetEvent::Input(InputEdit::Backspace) => {
                self.gate.backspace();
                EventResult::Handled
            }
            WidgetEvent::KeyPress(key) => match key.code {
                KeyCode::Enter => self.press('E'),
                KeyCode::Esc => self.press('C'),
                _ => EventResult::Handled,
            },
            // swallow everything else while locked
            _ => EventResult::Handled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crossterm::event::KeyEvent;

    fn locked() -> LockScreen {
        LockScreen::init(&LockConfig {
            enabled: true,
            code: "2580".into(),
            hint: Some("middle column".into()),
        })
    }

    fn click(screen: &mut LockScreen, store: &mut MemoryStore, keys: &str) {
        for c in keys.chars() {
            screen.handle(&WidgetEvent::Click(HitTarget::KeypadKey(c)), store);
        }
    }

    #[test]
    fn keypad_clicks_unlock() {
        let mut store = MemoryStore::new();
        let mut screen = locked();
        click(&mut screen, &mut store, "2580E");
        assert!(!screen.is_locked());
        assert_eq!(screen.message(), None);
    }

    #[test]
    fn wrong_code_shows_message_and_stays_locked() {
        let mut store = MemoryStore::new();
        let mut screen = locked();
        click(&mut screen, &mut store, "1111E");
        assert!(screen.is_locked());
        assert_eq!(screen.message(), Some("Incorrect code"));
        assert_eq!(screen.entry_len(), 0);
    }

    #[test]
    fn typed_digits_and_enter_unlock() {
        let mut store = MemoryStore::new();
        let mut screen = locked();
        for c in "2580".chars() {
            screen.handle(&WidgetEvent::Input(InputEdit::Insert(c)), &mut store);
        }
        screen.handle(
            &WidgetEvent::KeyPress(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            &mut store,
        );
        assert!(!screen.is_locked());
    }

    #[test]
    fn unlocked_screen_only_reacts_to_ctrl_l() {
        let mut store = MemoryStore::new();
        let mut screen = LockScreen::init(&LockConfig::default());
        assert!(!screen.is_locked());
        let typed = WidgetEvent::Input(InputEdit::Insert('1'));
        assert_eq!(screen.handle(&typed, &mut store), EventResult::Ignored);

        let ctrl_l = WidgetEvent::KeyPress(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(screen.handle(&ctrl_l, &mut store), EventResult::Handled);
        assert!(screen.is_locked());
    }

    #[test]
    fn hint_is_config_text_verbatim() {
        assert_eq!(locked().hint(), Some("middle column"));
        assert_eq!(LockScreen::init(&LockConfig::default()).hint(), None);
    }
}
