pub mod calendar_view;
pub mod checklist_view;
pub mod help_overlay;
mod helpers;
pub mod lock_overlay;
pub mod notepad_view;
pub mod sidebar_view;
pub mod status_row;
pub mod top_bar;
pub mod wallpaper_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::{App, HitMap};

/// Main render function. Dispatches to sub-renderers and records the hit map
/// for the next mouse event.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let mut hits = std::mem::take(&mut app.hit_map);
    hits.clear();

    // Wallpaper fills everything behind the panels
    wallpaper_view::render_wallpaper(frame, app, area);

    // Layout: top bar (1 row) | body | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    top_bar::render_top_bar(frame, app, chunks[0], &mut hits);

    let mut body = chunks[1];
    if app.widgets.sidebar.as_ref().is_some_and(|s| s.is_open()) {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(sidebar_view::SIDEBAR_WIDTH),
                Constraint::Min(0),
            ])
            .split(body);
        sidebar_view::render_sidebar(frame, app, split[0], &mut hits);
        body = split[1];
    }
    render_panels(frame, app, body, &mut hits);

    status_row::render_status_row(frame, app, chunks[2]);

    // Lock overlay covers everything and replaces the hit map
    if let Some(lock) = app.widgets.lock.as_ref().filter(|l| l.is_locked()) {
        hits.clear();
        lock_overlay::render_lock_overlay(frame, app, lock, area, &mut hits);
    } else if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    app.hit_map = hits;
}

#[derive(Clone, Copy)]
enum Panel {
    Checklist,
    Calendar,
    Notepad,
}

/// Lay the main panels side by side: checklist, calendar, notepad. The
/// calendar keeps its natural width; the others share what is left.
fn render_panels(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let mut panels = Vec::new();
    if app.widgets.checklist.is_some() {
        panels.push(Panel::Checklist);
    }
    if app.widgets.calendar.is_some() {
        panels.push(Panel::Calendar);
    }
    if app.widgets.notepad.is_some() {
        panels.push(Panel::Notepad);
    }
    if panels.is_empty() || area.width == 0 {
        return;
    }

    let constraints: Vec<Constraint> = panels
        .iter()
        .map(|p| match p {
            Panel::Calendar => Constraint::Length(calendar_view::CALENDAR_WIDTH),
            _ => Constraint::Fill(1),
        })
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (panel, column) in panels.iter().zip(columns.iter()) {
        match panel {
            Panel::Checklist => checklist_view::render_checklist(frame, app, *column, hits),
            Panel::Calendar => calendar_view::render_calendar(frame, app, *column, hits),
            Panel::Notepad => notepad_view::render_notepad(frame, app, *column, hits),
        }
    }
}
