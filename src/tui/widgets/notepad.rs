use crossterm::event::KeyCode;

use crate::io::store::{KeyValueStore, keys};
use crate::ops::field::{PersistedField, Plain};
use crate::tui::input::text::TextBuffer;

use super::{EventKind, EventResult, HitTarget, InputEdit, Widget, WidgetEvent, WidgetKind, save_failed};

/// Free-form text saved under `notepadContent` on every edit
#[derive(Debug)]
pub struct Notepad {
    field: PersistedField<String, Plain>,
    buffer: TextBuffer,
}

impl Notepad {
    pub fn init(store: &dyn KeyValueStore) -> Self {
        let field = PersistedField::new(keys::NOTEPAD, String::new());
        let buffer = TextBuffer::from_text(field.load(store));
        Notepad { field, buffer }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    fn persist(&self, store: &mut dyn KeyValueStore) -> EventResult {
        match self.field.save(store, &self.buffer.as_str().to_string()) {
            Ok(()) => EventResult::Handled,
            Err(e) => save_failed("notepad", &e),
        }
    }
}

impl Widget for Notepad {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Notepad
    }

    fn bindings(&self) -> &'static [EventKind] {
        &[EventKind::Click, EventKind::Input, EventKind::KeyPress]
    }

    fn handle(&mut self, event: &WidgetEvent, store: &mut dyn KeyValueStore) -> EventResult {
        match event {
            WidgetEvent::Click(HitTarget::Notepad) => EventResult::Handled,
            WidgetEvent::Input(edit) => {
                let changed = match edit {
                    InputEdit::Insert(c) => {
                        self.buffer.insert(*c);
                        true
                    }
                    InputEdit::Backspace => self.buffer.backspace(),
                    InputEdit::Delete => self.buffer.delete_forward(),
                    InputEdit::DeleteWord => self.buffer.delete_word_back(),
                };
                if changed {
                    self.persist(store)
                } else {
                    EventResult::Handled
                }
            }
            WidgetEvent::KeyPress(key) => match key.code {
                KeyCode::Enter => {
                    self.buffer.insert('\n');
                    self.persist(store)
                }
                KeyCode::Left => {
                    self.buffer.move_left();
                    EventResult::Handled
                }
                KeyCode::Right => {
                    self.buffer.move_right();
                    EventResult::Handled
                }
                KeyCode::Home => {
                    self.buffer.move_home();
                    EventResult::Handled
                }
                KeyCode::End => {
                    self.buffer.move_end();
                    EventResult::Handled
                }
                _ => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }
}
