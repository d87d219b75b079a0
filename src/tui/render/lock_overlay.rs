use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::app::{App, HitMap};
use crate::tui::widgets::HitTarget;
use crate::tui::widgets::lock_screen::{KEYPAD, LockScreen};

use super::helpers::{centered_fixed, panel_block};

const KEY_WIDTH: u16 = 5;
const OVERLAY_WIDTH: u16 = 21;
const OVERLAY_HEIGHT: u16 = 11;

/// Render the keypad overlay over the whole screen
pub fn render_lock_overlay(frame: &mut Frame, app: &App, lock: &LockScreen, area: Rect, hits: &mut HitMap) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(app.theme.background)),
        area,
    );

    let overlay = centered_fixed(OVERLAY_WIDTH, OVERLAY_HEIGHT, area);
    let block = panel_block("Locked", true, &app.theme);
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let line = |row: u16| Rect::new(inner.x, inner.y + row, inner.width, 1);
    let centered = |frame: &mut Frame, row: u16, span: Span| {
        if row < inner.height {
            frame.render_widget(Paragraph::new(span).alignment(Alignment::Center), line(row));
        }
    };

    let dim = Style::default().fg(app.theme.dim).bg(app.theme.panel);
    centered(frame, 0, Span::styled(lock.hint().unwrap_or("Enter code"), dim));
    let dots = "\u{2022} ".repeat(lock.entry_len());
    centered(
        frame,
        1,
        Span::styled(dots.trim_end().to_string(), Style::default().fg(app.theme.text_bright).bg(app.theme.panel)),
    );

    let key_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg)
        .add_modifier(Modifier::BOLD);
    let left = inner.x + inner.width.saturating_sub(KEY_WIDTH * 3 + 2) / 2;
    for (r, keys) in KEYPAD.iter().enumerate() {
        let row = 3 + r as u16;
        if row >= inner.height {
            break;
        }
        for (c, key) in keys.iter().enumerate() {
            let rect = Rect::new(left + c as u16 * (KEY_WIDTH + 1), inner.y + row, KEY_WIDTH, 1);
            if rect.right() > inner.right() {
                continue;
            }
            let label = match key {
                'C' => "clr".to_string(),
                'E' => "ok".to_string(),
                digit => digit.to_string(),
            };
            frame.render_widget(
                Paragraph::new(Span::styled(label, key_style))
                    .alignment(Alignment::Center)
                    .style(key_style),
                rect,
            );
            hits.push(rect, HitTarget::KeypadKey(*key));
        }
    }

    if let Some(message) = lock.message() {
        centered(frame, 8, Span::styled(message, Style::default().fg(app.theme.red).bg(app.theme.panel)));
    }
}
