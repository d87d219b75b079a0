use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::io::store::keys;
use crate::model::config::WeekStart;

/// Notes for one month, keyed by day of month (1..=31)
pub type NoteMap = BTreeMap<u32, String>;

/// The displayed (year, month) pair. `month0` is zero-based (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    /// Returns `None` if `month0` is not in `0..12`.
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        (month0 < 12).then_some(MonthCursor { year, month0 })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// December wraps to January of the following year.
    pub fn next(self) -> Self {
        if self.month0 == 11 {
            MonthCursor {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            MonthCursor {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// January wraps to December of the preceding year.
    pub fn previous(self) -> Self {
        if self.month0 == 0 {
            MonthCursor {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            MonthCursor {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    /// Day count: the last day is the day before the first of the next month.
    pub fn days_in_month(self) -> u32 {
        self.next()
            .first_day()
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31)
    }

    /// Store key owning this month's notes
    pub fn notes_key(self) -> String {
        keys::calendar_notes(self.year, self.month0)
    }

    /// "October 2026"
    pub fn label(self) -> String {
        match self.first_day() {
            Some(d) => d.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month0 + 1),
        }
    }

    /// Calendar date for `day` within this month, if it exists
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }
}

/// Layout of one month: blank cells before day 1 and the day count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: MonthCursor,
    pub leading_blanks: u32,
    pub days: u32,
}

impl MonthGrid {
    pub fn generate(month: MonthCursor, week_start: WeekStart) -> Self {
        let leading_blanks = month
            .first_day()
            .map(|d| match week_start {
                WeekStart::Sunday => d.weekday().num_days_from_sunday(),
                WeekStart::Monday => d.weekday().num_days_from_monday(),
            })
            .unwrap_or(0);
        MonthGrid {
            month,
            leading_blanks,
            days: month.days_in_month(),
        }
    }

    /// Rows of seven cells; `None` is a blank cell.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let mut cells: Vec<Option<u32>> = Vec::new();
        cells.extend((0..self.leading_blanks).map(|_| None));
        cells.extend((1..=self.days).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|row| {
                let mut week = [None; 7];
                week.copy_from_slice(row);
                week
            })
            .collect()
    }

    /// Row and column of `day` in `weeks()`
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        if day == 0 || day > self.days {
            return None;
        }
        let index = (self.leading_blanks + day - 1) as usize;
        Some((index / 7, index % 7))
    }
}

/// Two-letter weekday headers in grid column order
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
    }
}

/// Day of month to mark as today, if `today` falls in `month`
pub fn today_in(month: MonthCursor, today: NaiveDate) -> Option<u32> {
    (MonthCursor::containing(today) == month).then(|| today.day())
}
