use std::error::Error;

use chrono::{Datelike, Local, NaiveDate};

use crate::cli::commands::{CalArgs, CalNoteArgs};
use crate::cli::output::*;
use crate::model::calendar::{MonthCursor, weekday_labels};
use crate::ops::calendar_notes::CalendarNoteStore;

use super::{Context, print_json};

/// Parse `YYYY-MM` into a month cursor.
fn parse_month(s: &str) -> Result<MonthCursor, Box<dyn Error>> {
    let invalid = || format!("invalid month '{}' (expected YYYY-MM)", s);
    let (year, month) = s.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    month
        .checked_sub(1)
        .and_then(|month0| MonthCursor::new(year, month0))
        .ok_or_else(|| invalid().into())
}

fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn Error>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", s).into())
}

pub(super) fn cmd_cal(ctx: &Context, args: CalArgs) -> Result<(), Box<dyn Error>> {
    let month = match args.month.as_deref() {
        Some(s) => parse_month(s)?,
        None => MonthCursor::containing(Local::now().date_naive()),
    };
    let week_start = ctx.config.calendar.week_start;
    let notes = CalendarNoteStore::open(&ctx.store, month, week_start);
    let weeks = notes.grid().weeks();

    if ctx.json {
        return print_json(&month_to_json(month, weeks, notes.notes()));
    }

    println!("{}", month.label());
    println!("{}", format_weekday_header(&weekday_labels(week_start)));
    for week in &weeks {
        println!("{}", format_week(week, notes.notes()));
    }
    if !notes.notes().is_empty() {
        println!();
        for (day, text) in notes.notes() {
            println!("{:>2}: {}", day, text);
        }
    }
    Ok(())
}

pub(super) fn cmd_cal_note(ctx: &mut Context, args: CalNoteArgs) -> Result<(), Box<dyn Error>> {
    let date = parse_date(&args.date)?;
    let month = MonthCursor::containing(date);
    let mut notes = CalendarNoteStore::open(&ctx.store, month, ctx.config.calendar.week_start);

    if let Some(text) = args.text.as_deref() {
        notes.set_note(&mut ctx.store, date.day(), text)?;
        log::info!("cli: note for {} {}", date, if text.is_empty() { "cleared" } else { "saved" });
    }

    let note = notes.note(date.day()).map(str::to_string);
    if ctx.json {
        return print_json(&DayNoteJson {
            date: date.format("%Y-%m-%d").to_string(),
            note,
        });
    }
    if args.text.is_none()
        && let Some(note) = note
    {
        println!("{}", note);
    }
    Ok(())
}
