use crate::io::store::{KeyValueStore, StoreError};
use crate::model::calendar::{MonthCursor, MonthGrid, NoteMap};
use crate::model::config::WeekStart;
use crate::ops::field::{Json, PersistedField};

/// Error type for note writes
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("day {day} is not in {month} (1..={days})")]
    DayOutOfRange { day: u32, month: String, days: u32 },
    #[error("could not save notes: {0}")]
    Store(#[from] StoreError),
}

/// Notes for the displayed month plus its grid.
///
/// Each month's notes live under their own key. Moving to another month
/// drops the in-memory map and reloads from the store; writes always load
/// the current month's map fresh before changing one day.
#[derive(Debug)]
pub struct CalendarNoteStore {
    month: MonthCursor,
    week_start: WeekStart,
    grid: MonthGrid,
    field: PersistedField<NoteMap, Json>,
    notes: NoteMap,
}

impl CalendarNoteStore {
    pub fn open(store: &dyn KeyValueStore, month: MonthCursor, week_start: WeekStart) -> Self {
        let field = month_field(month);
        let notes = field.load(store);
        CalendarNoteStore {
            month,
            week_start,
            grid: MonthGrid::generate(month, week_start),
            field,
            notes,
        }
    }

    pub fn month(&self) -> MonthCursor {
        self.month
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn notes(&self) -> &NoteMap {
        &self.notes
    }

    pub fn note(&self, day: u32) -> Option<&str> {
        self.notes.get(&day).map(|s| s.as_str())
    }

    pub fn next(&mut self, store: &dyn KeyValueStore) {
        self.show(store, self.month.next());
    }

    pub fn previous(&mut self, store: &dyn KeyValueStore) {
        self.show(store, self.month.previous());
    }

    /// Switch to `month`, regenerating the grid and loading its notes.
    pub fn show(&mut self, store: &dyn KeyValueStore, month: MonthCursor) {
        *self = CalendarNoteStore::open(store, month, self.week_start);
    }

    /// Set the note for `day` of the displayed month. Empty text removes it.
    pub fn set_note(
        &mut self,
        store: &mut dyn KeyValueStore,
        day: u32,
        text: &str,
    ) -> Result<(), NoteError> {
        if day == 0 || day > self.grid.days {
            return Err(NoteError::DayOutOfRange {
                day,
                month: self.month.label(),
                days: self.grid.days,
            });
        }
        let mut notes = self.field.load(store);
        if text.is_empty() {
            notes.remove(&day);
        } else {
            notes.insert(day, text.to_string());
        }
        self.field.save(store, &notes)?;
        self.notes = notes;
        Ok(())
    }
}

fn month_field(month: MonthCursor) -> PersistedField<NoteMap, Json> {
    PersistedField::new(month.notes_key(), NoteMap::new())
}
