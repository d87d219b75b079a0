use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::app::{App, HitMap};
use crate::tui::widgets::{Focus, HitTarget};

use super::helpers::{CURSOR, panel_block};

/// Render the notepad panel
pub fn render_notepad(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let Some(notepad) = app.widgets.notepad.as_ref() else {
        return;
    };
    let focused = app.focus == Some(Focus::Notepad);
    let block = panel_block("Notepad", focused, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.push(inner, HitTarget::Notepad);

    let buffer = notepad.buffer();
    let text_style = Style::default().fg(app.theme.text).bg(app.theme.panel);
    if buffer.is_empty() && !focused {
        let placeholder = Span::styled("Write something\u{2026}", Style::default().fg(app.theme.dim).bg(app.theme.panel));
        frame.render_widget(Paragraph::new(placeholder), inner);
        return;
    }

    let (before, after) = buffer.split_at_cursor();
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    push_text(before, text_style, &mut current, &mut lines);
    let cursor_line = lines.len();
    if focused {
        current.push(Span::styled(CURSOR, Style::default().fg(app.theme.accent).bg(app.theme.panel)));
    }
    push_text(after, text_style, &mut current, &mut lines);
    lines.push(Line::from(current));

    let scroll = (cursor_line + 1).saturating_sub(inner.height as usize) as u16;
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        inner,
    );
}

/// Append `text` to the line being built, starting a new line at each newline.
fn push_text(
    text: &str,
    style: Style,
    current: &mut Vec<Span<'static>>,
    lines: &mut Vec<Line<'static>>,
) {
    let mut parts = text.split('\n');
    if let Some(first) = parts.next() {
        current.push(Span::styled(first.to_string(), style));
    }
    for part in parts {
        lines.push(Line::from(std::mem::take(current)));
        current.push(Span::styled(part.to_string(), style));
    }
}
