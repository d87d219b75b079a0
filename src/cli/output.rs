use serde::Serialize;

use crate::model::calendar::{MonthCursor, NoteMap};
use crate::model::checklist::ChecklistItem;
use crate::model::color::{AccentColor, Rgb};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    /// 1-based, as accepted by `toggle` and `rm`
    pub number: usize,
    pub text: String,
    pub checked: bool,
}

#[derive(Serialize)]
pub struct NotepadJson {
    pub content: String,
}

#[derive(Serialize)]
pub struct MonthJson {
    pub year: i32,
    pub month: u32,
    pub label: String,
    /// Rows of seven cells; `null` pads before day 1 and after the last day
    pub weeks: Vec<[Option<u32>; 7]>,
    pub notes: NoteMap,
}

#[derive(Serialize)]
pub struct DayNoteJson {
    pub date: String,
    pub note: Option<String>,
}

#[derive(Serialize)]
pub struct AccentJson {
    pub hex: String,
    pub rgb: [u8; 3],
}

#[derive(Serialize)]
pub struct WallpaperJson {
    pub mode: String,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub fn item_to_json(index: usize, item: &ChecklistItem) -> ItemJson {
    ItemJson {
        number: index + 1,
        text: item.text.clone(),
        checked: item.checked,
    }
}

pub fn month_to_json(month: MonthCursor, weeks: Vec<[Option<u32>; 7]>, notes: &NoteMap) -> MonthJson {
    MonthJson {
        year: month.year,
        month: month.month0 + 1,
        label: month.label(),
        weeks,
        notes: notes.clone(),
    }
}

pub fn accent_to_json(accent: &AccentColor) -> AccentJson {
    let Rgb { r, g, b } = accent.rgb();
    AccentJson {
        hex: accent.hex().to_string(),
        rgb: [r, g, b],
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Format a checklist line: `  2. [x] Buy milk`
pub fn format_item_line(index: usize, item: &ChecklistItem) -> String {
    let mark = if item.checked { 'x' } else { ' ' };
    format!("{:>3}. [{}] {}", index + 1, mark, item.text)
}

/// Format one week of the month grid. Days with a note get a `*`.
pub fn format_week(week: &[Option<u32>; 7], notes: &NoteMap) -> String {
    let cells: Vec<String> = week
        .iter()
        .map(|cell| match cell {
            Some(day) => {
                let mark = if notes.contains_key(day) { '*' } else { ' ' };
                format!("{:>2}{}", day, mark)
            }
            None => "   ".to_string(),
        })
        .collect();
    cells.join(" ").trim_end().to_string()
}

/// Weekday header aligned with `format_week`
pub fn format_weekday_header(labels: &[&str; 7]) -> String {
    labels
        .iter()
        .map(|l| format!("{:>2} ", l))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

pub fn format_accent(accent: &AccentColor) -> String {
    format!("{} rgb({})", accent.hex(), accent.rgb())
}
