use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, HitMap};
use crate::tui::widgets::checklist::{ChecklistController, ChecklistCursor};
use crate::tui::widgets::{Focus, HitTarget};
use crate::util::unicode;

use super::helpers::{entry_spans, panel_block};

const DELETE: &str = " \u{2715}";

/// Render the checklist panel: entry line on top, one row per item below
pub fn render_checklist(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let Some(checklist) = app.widgets.checklist.as_ref() else {
        return;
    };
    let focused = app.focus == Some(Focus::Checklist);
    let block = panel_block("Checklist", focused, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    render_entry(frame, app, checklist, focused, Rect { height: 1, ..inner }, hits);

    let list_area = Rect {
        y: inner.y + 1,
        height: inner.height - 1,
        ..inner
    };
    if list_area.height == 0 {
        return;
    }
    let items = checklist.items();
    if items.is_empty() {
        let empty = Span::styled("Nothing to do", Style::default().fg(app.theme.dim).bg(app.theme.panel));
        frame.render_widget(Paragraph::new(empty), Rect { height: 1, ..list_area });
        return;
    }

    let visible = list_area.height as usize;
    let selected = match checklist.cursor() {
        ChecklistCursor::Row(i) if focused => Some(i),
        _ => None,
    };
    let scroll = selected.map_or(0, |i| (i + 1).saturating_sub(visible));

    let delete_width = DELETE.chars().count() as u16;
    let text_width = (list_area.width as usize).saturating_sub(4 + delete_width as usize);
    for (row, (index, item)) in items.iter().enumerate().skip(scroll).take(visible).enumerate() {
        let rect = Rect::new(list_area.x, list_area.y + row as u16, list_area.width, 1);
        let bg = if selected == Some(index) {
            app.theme.selection_bg
        } else {
            app.theme.panel
        };
        let (mark, text_style) = if item.checked {
            (
                "[x] ",
                Style::default()
                    .fg(app.theme.dim)
                    .bg(bg)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            ("[ ] ", Style::default().fg(app.theme.text).bg(bg))
        };
        let mark_style = Style::default().fg(app.theme.accent).bg(bg);
        let line = Line::from(vec![
            Span::styled(mark, mark_style),
            Span::styled(unicode::truncate_to_width(&item.text, text_width), text_style),
        ]);
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), rect);

        let delete = Rect::new(
            rect.right().saturating_sub(delete_width),
            rect.y,
            delete_width.min(rect.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(DELETE, Style::default().fg(app.theme.red).bg(bg))),
            delete,
        );
        hits.push(rect, HitTarget::ChecklistRow(index));
        // drawn over the row so the click deletes without toggling
        hits.push(delete, HitTarget::ChecklistDelete(index));
    }
}

fn render_entry(
    frame: &mut Frame,
    app: &App,
    checklist: &ChecklistController,
    focused: bool,
    area: Rect,
    hits: &mut HitMap,
) {
    let on_entry = focused && checklist.cursor() == ChecklistCursor::Entry;
    let mut spans = vec![Span::styled("+ ", Style::default().fg(app.theme.accent).bg(app.theme.panel))];
    spans.extend(entry_spans(checklist.entry(), on_entry, "Add an item", &app.theme));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    hits.push(area, HitTarget::ChecklistEntry);
}
