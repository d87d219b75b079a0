use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::store::KeyValueStore;
use crate::model::calendar::{MonthCursor, today_in};
use crate::model::config::WeekStart;
use crate::ops::calendar_notes::{CalendarNoteStore, NoteError};
use crate::tui::input::text::TextBuffer;

use super::{EventKind, EventResult, HitTarget, InputEdit, Widget, WidgetEvent, WidgetKind, save_failed};

/// Month view with a per-day note editor.
///
/// The editor always mirrors the selected day's stored note; every edit is
/// written through before the next event is handled.
#[derive(Debug)]
pub struct CalendarController {
    notes: CalendarNoteStore,
    today: NaiveDate,
    selected: u32,
    editor: TextBuffer,
}

impl CalendarController {
    pub fn init(store: &dyn KeyValueStore, today: NaiveDate, week_start: WeekStart) -> Self {
        let month = MonthCursor::containing(today);
        let notes = CalendarNoteStore::open(store, month, week_start);
        let mut controller = CalendarController {
            notes,
            today,
            selected: 1,
            editor: TextBuffer::default(),
        };
        controller.select(today_in(month, today).unwrap_or(1));
        controller
    }

    pub fn notes(&self) -> &CalendarNoteStore {
        &self.notes
    }

    pub fn month(&self) -> MonthCursor {
        self.notes.month()
    }

    pub fn selected(&self) -> u32 {
        self.selected
    }

    pub fn editor(&self) -> &TextBuffer {
        &self.editor
    }

    /// Day to highlight as today, if it is in the displayed month
    pub fn today_marker(&self) -> Option<u32> {
        today_in(self.notes.month(), self.today)
    }

    /// Called on the clock tick so the marker follows midnight.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Select `day`, clamped to the displayed month.
    pub fn select(&mut self, day: u32) {
        self.selected = day.clamp(1, self.notes.grid().days);
        self.editor = TextBuffer::from_text(self.notes.note(self.selected).unwrap_or_default());
    }

    pub fn next_month(&mut self, store: &dyn KeyValueStore) {
        self.notes.next(store);
        self.select(self.selected);
    }

    pub fn previous_month(&mut self, store: &dyn KeyValueStore) {
        self.notes.previous(store);
        self.select(self.selected);
    }

    fn shift(&mut self, delta: i64) {
        let day = (i64::from(self.selected) + delta).max(1);
        self.select(u32::try_from(day).unwrap_or(1));
    }

    fn edit(&mut self, store: &mut dyn KeyValueStore, edit: InputEdit) -> EventResult {
        let changed = match edit {
            InputEdit::Insert(c) => {
                self.editor.insert(c);
                true
            }
            InputEdit::Backspace => self.editor.backspace(),
            InputEdit::Delete => self.editor.delete_forward(),
            InputEdit::DeleteWord => self.editor.delete_word_back(),
        };
        if !changed {
            return EventResult::Handled;
        }
        match self.notes.set_note(store, self.selected, self.editor.as_str()) {
            Ok(()) => EventResult::Handled,
            Err(NoteError::DayOutOfRange { .. }) => {
                // only reachable if the grid changed under us
                self.select(self.selected);
                EventResult::Handled
            }
            Err(NoteError::Store(e)) => save_failed("calendar note", &e),
        }
    }

    fn key(&mut self, store: &dyn KeyValueStore, key: &KeyEvent) -> EventResult {
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Left => self.shift(-1),
            KeyCode::Right => self.shift(1),
            KeyCode::Up => self.shift(-7),
            KeyCode::Down => self.shift(7),
            KeyCode::PageUp => self.previous_month(store),
            KeyCode::PageDown => self.next_month(store),
            KeyCode::Char('[') if alt => self.previous_month(store),
            KeyCode::Char(']') if alt => self.next_month(store),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            _ => return EventResult::Ignored,
        }
        EventResult::Handled
    }
}

impl Widget for CalendarController {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Calendar
    }

    fn bindings(&self) -> &'static [EventKind] {
        &[EventKind::Click, EventKind::Input, EventKind::KeyPress]
    }

    fn handle(&mut self, event: &WidgetEvent, store: &mut dyn KeyValueStore) -> EventResult {
        match event {
            WidgetEvent::Click(HitTarget::CalendarPrev) => {
                self.previous_month(store);
                EventResult::Handled
            }
            WidgetEvent::Click(HitTarget::CalendarNext) => {
                self.next_month(store);
                EventResult::Handled
            }
            WidgetEvent::Click(HitTarget::CalendarDay(day)) => {
                self.select(*day);
                EventResult::Handled
            }
            WidgetEvent::Input(edit) => self.edit(store, *edit),
            WidgetEvent::KeyPress(key) => self.key(store, key),
            _ => EventResult::Ignored,
        }
    }
}
