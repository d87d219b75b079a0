use crossterm::event::KeyCode;

use crate::io::store::{KeyValueStore, keys};
use crate::model::checklist::ChecklistItem;
use crate::ops::record_list::{RecordError, RecordListStore};
use crate::tui::input::text::TextBuffer;

use super::{EventKind, EventResult, HitTarget, InputEdit, Widget, WidgetEvent, WidgetKind, save_failed};

/// Where keyboard input goes inside the checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistCursor {
    /// The new-item entry line
    Entry,
    /// A row, by its index in the current snapshot
    Row(usize),
}

/// Checklist bound to `checklistItems`.
///
/// `items` is always the snapshot returned by the last store operation, and
/// row indices handed out by the renderer refer to it.
#[derive(Debug)]
pub struct ChecklistController {
    list: RecordListStore<ChecklistItem>,
    items: Vec<ChecklistItem>,
    entry: TextBuffer,
    cursor: ChecklistCursor,
}

impl ChecklistController {
    pub fn init(store: &dyn KeyValueStore) -> Self {
        let list = RecordListStore::new(keys::CHECKLIST);
        let items = list.load_all(store);
        ChecklistController {
            list,
            items,
            entry: TextBuffer::default(),
            cursor: ChecklistCursor::Entry,
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn entry(&self) -> &TextBuffer {
        &self.entry
    }

    pub fn cursor(&self) -> ChecklistCursor {
        self.cursor
    }

    /// Add the entry text as a new item. Whitespace-only text is a no-op.
    pub fn submit(&mut self, store: &mut dyn KeyValueStore) -> EventResult {
        let Some(item) = ChecklistItem::new(self.entry.as_str()) else {
            return EventResult::Handled;
        };
        let result = self.list.add(store, item);
        let outcome = self.apply(store, result);
        if outcome == EventResult::Handled {
            self.entry.clear();
        }
        outcome
    }

    pub fn toggle(&mut self, store: &mut dyn KeyValueStore, index: usize) -> EventResult {
        let result = self.list.toggle_at(store, index);
        self.apply(store, result)
    }

    pub fn delete(&mut self, store: &mut dyn KeyValueStore, index: usize) -> EventResult {
        let result = self.list.delete_at(store, index);
        self.apply(store, result)
    }

    /// Adopt the snapshot from a store operation.
    fn apply(
        &mut self,
        store: &dyn KeyValueStore,
        result: Result<Vec<ChecklistItem>, RecordError>,
    ) -> EventResult {
        let outcome = match result {
            Ok(items) => {
                self.items = items;
                EventResult::Handled
            }
            Err(RecordError::IndexOutOfRange { index, len }) => {
                log::warn!("checklist row {} is stale (list has {}), reloading", index, len);
                self.items = self.list.load_all(store);
                EventResult::Notice("Checklist changed, try again".to_string())
            }
            Err(RecordError::Store(e)) => save_failed("checklist", &e),
        };
        self.clamp_cursor();
        outcome
    }

    fn clamp_cursor(&mut self) {
        if let ChecklistCursor::Row(i) = self.cursor {
            self.cursor = match self.items.len() {
                0 => ChecklistCursor::Entry,
                len => ChecklistCursor::Row(i.min(len - 1)),
            };
        }
    }

    fn edit_entry(&mut self, edit: InputEdit) -> EventResult {
        match edit {
            InputEdit::Insert(c) => self.entry.insert(c),
            InputEdit::Backspace => {
                self.entry.backspace();
            }
            InputEdit::Delete => {
                self.entry.delete_forward();
            }
            InputEdit::DeleteWord => {
                self.entry.delete_word_back();
            }
        }
        EventResult::Handled
    }

    fn move_down(&mut self) {
        self.cursor = match self.cursor {
            ChecklistCursor::Entry if !self.items.is_empty() => ChecklistCursor::Row(0),
            ChecklistCursor::Entry => ChecklistCursor::Entry,
            ChecklistCursor::Row(i) => ChecklistCursor::Row((i + 1).min(self.items.len() - 1)),
        };
    }

    fn move_up(&mut self) {
        self.cursor = match self.cursor {
            ChecklistCursor::Row(0) | ChecklistCursor::Entry => ChecklistCursor::Entry,
            ChecklistCursor::Row(i) => ChecklistCursor::Row(i - 1),
        };
    }
}

impl Widget for ChecklistController {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Checklist
    }

    fn bindings(&self) -> &'static [EventKind] {
        &[EventKind::Click, EventKind::Input, EventKind::KeyPress]
    }

    fn handle(&mut self, event: &WidgetEvent, store: &mut dyn KeyValueStore) -> EventResult {
        match (event, self.cursor) {
            (WidgetEvent::Click(HitTarget::ChecklistEntry), _) => {
                self.cursor = ChecklistCursor::Entry;
                EventResult::Handled
            }
            (WidgetEvent::Click(HitTarget::ChecklistRow(i)), _) => {
                self.cursor = ChecklistCursor::Row(*i);
                self.toggle(store, *i)
            }
            (WidgetEvent::Click(HitTarget::ChecklistDelete(i)), _) => self.delete(store, *i),

            (WidgetEvent::Input(edit), ChecklistCursor::Entry) => self.edit_entry(*edit),
            (WidgetEvent::Input(edit), ChecklistCursor::Row(i)) => match edit {
                InputEdit::Insert(' ') => self.toggle(store, i),
                InputEdit::Insert('x') | InputEdit::Delete => self.delete(store, i),
                _ => EventResult::Ignored,
            },

            (WidgetEvent::KeyPress(key), cursor) => match (key.code, cursor) {
                (KeyCode::Enter, ChecklistCursor::Entry) => self.submit(store),
                (KeyCode::Enter, ChecklistCursor::Row(i)) => self.toggle(store, i),
                (KeyCode::Down, _) => {
                    self.move_down();
                    EventResult::Handled
                }
                (KeyCode::Up, _) => {
                    self.move_up();
                    EventResult::Handled
                }
                (KeyCode::Esc, _) => {
                    self.cursor = ChecklistCursor::Entry;
                    EventResult::Handled
                }
                (KeyCode::Left, ChecklistCursor::Entry) => {
                    self.entry.move_left();
                    EventResult::Handled
                }
                (KeyCode::Right, ChecklistCursor::Entry) => {
                    self.entry.move_right();
                    EventResult::Handled
                }
                (KeyCode::Home, ChecklistCursor::Entry) => {
                    self.entry.move_home();
                    EventResult::Handled
                }
                (KeyCode::End, ChecklistCursor::Entry) => {
                    self.entry.move_end();
                    EventResult::Handled
                }
                _ => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }
}
