use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::calendar::weekday_labels;
use crate::tui::app::{App, HitMap};
use crate::tui::widgets::calendar::CalendarController;
use crate::tui::widgets::{Focus, HitTarget};

use super::helpers::{entry_spans, panel_block};

/// Cells per day column, including the gap
const CELL: u16 = 3;

/// Seven day columns plus the borders
pub const CALENDAR_WIDTH: u16 = 7 * CELL + 2;

/// Render the calendar panel: month header, grid, and the selected day's note
pub fn render_calendar(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let Some(calendar) = app.widgets.calendar.as_ref() else {
        return;
    };
    let focused = app.focus == Some(Focus::Calendar);
    let block = panel_block("Calendar", focused, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width < 3 {
        return;
    }

    render_header(frame, app, calendar, Rect { height: 1, ..inner }, hits);

    let labels: Vec<Span> = weekday_labels(app.config.calendar.week_start)
        .iter()
        .map(|l| Span::styled(format!("{} ", l), Style::default().fg(app.theme.dim).bg(app.theme.panel)))
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(labels)),
        Rect::new(inner.x, inner.y + 1, inner.width, 1),
    );

    let weeks = calendar.notes().grid().weeks();
    let grid_top = inner.y + 2;
    let grid_rows = (weeks.len() as u16).min(inner.bottom().saturating_sub(grid_top));
    for (row, week) in weeks.iter().take(grid_rows as usize).enumerate() {
        let y = grid_top + row as u16;
        let mut spans = Vec::with_capacity(7);
        for (col, cell) in week.iter().enumerate() {
            let Some(day) = *cell else {
                spans.push(Span::styled("   ", Style::default().bg(app.theme.panel)));
                continue;
            };
            spans.push(Span::styled(format!("{:>2} ", day), day_style(app, calendar, day, focused)));
            let x = inner.x + col as u16 * CELL;
            if x + 2 <= inner.right() {
                hits.push(Rect::new(x, y, 2, 1), HitTarget::CalendarDay(day));
            }
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(inner.x, y, inner.width, 1),
        );
    }

    // one blank row between the grid and the note
    let note_top = grid_top + grid_rows + 1;
    if note_top < inner.bottom() {
        let note_area = Rect::new(inner.x, note_top, inner.width, inner.bottom() - note_top);
        render_note(frame, app, calendar, focused, note_area);
    }
}

fn render_header(
    frame: &mut Frame,
    app: &App,
    calendar: &CalendarController,
    area: Rect,
    hits: &mut HitMap,
) {
    let label = Span::styled(
        calendar.month().label(),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.panel)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), area);

    let arrow = Style::default().fg(app.theme.accent).bg(app.theme.panel);
    let prev = Rect::new(area.x, area.y, 1, 1);
    let next = Rect::new(area.right() - 1, area.y, 1, 1);
    frame.render_widget(Paragraph::new(Span::styled("\u{2039}", arrow)), prev);
    frame.render_widget(Paragraph::new(Span::styled("\u{203A}", arrow)), next);
    hits.push(prev, HitTarget::CalendarPrev);
    hits.push(next, HitTarget::CalendarNext);
}

fn day_style(app: &App, calendar: &CalendarController, day: u32, focused: bool) -> Style {
    let mut style = Style::default().fg(app.theme.text).bg(app.theme.panel);
    if calendar.notes().note(day).is_some() {
        style = style.fg(app.theme.note_marker).add_modifier(Modifier::UNDERLINED);
    }
    if calendar.today_marker() == Some(day) {
        style = style.fg(app.theme.accent).add_modifier(Modifier::BOLD);
    }
    if calendar.selected() == day {
        style = style.bg(app.theme.selection_bg);
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
    }
    style
}

fn render_note(
    frame: &mut Frame,
    app: &App,
    calendar: &CalendarController,
    focused: bool,
    area: Rect,
) {
    let date = calendar
        .month()
        .date(calendar.selected())
        .map(|d| d.format("%b %-d: ").to_string())
        .unwrap_or_default();
    let mut spans = vec![Span::styled(date, Style::default().fg(app.theme.accent).bg(app.theme.panel))];
    spans.extend(entry_spans(calendar.editor(), focused, "No note", &app.theme));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false }),
        area,
    );
}
