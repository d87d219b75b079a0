use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::color::hex_to_rgb;
use crate::tui::app::{App, HitMap};
use crate::tui::theme::rgb_color;
use crate::tui::widgets::theme_selector::ThemeSelector;
use crate::tui::widgets::{Focus, HitTarget};

use super::helpers::{entry_spans, panel_block};

/// Width of the open sidebar, borders included
pub const SIDEBAR_WIDTH: u16 = 24;

const SWATCH: &str = "\u{2588}\u{2588}";

/// Render the open sidebar: widget list, then the theme selector
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let block = panel_block("Nook", false, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    for focus in app.widgets.focusable() {
        if y >= inner.bottom() {
            return;
        }
        let current = app.focus == Some(focus);
        let (marker, style) = if current {
            (
                "\u{25B8} ",
                Style::default()
                    .fg(app.theme.accent)
                    .bg(app.theme.panel)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(app.theme.text).bg(app.theme.panel))
        };
        let rect = Rect::new(inner.x, y, inner.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(marker, style), Span::styled(focus.label(), style)])),
            rect,
        );
        hits.push(rect, HitTarget::SidebarEntry(focus));
        y += 1;
    }

    if let Some(theme) = app.widgets.theme.as_ref() {
        let selector_area = Rect::new(inner.x, y + 1, inner.width, inner.bottom().saturating_sub(y + 1));
        render_theme_selector(frame, app, theme, selector_area, hits);
    }
}

fn render_theme_selector(
    frame: &mut Frame,
    app: &App,
    theme: &ThemeSelector,
    area: Rect,
    hits: &mut HitMap,
) {
    if area.height == 0 {
        return;
    }
    let focused = app.focus == Some(Focus::Theme);
    let panel = Style::default().bg(app.theme.panel);
    let header_style = if focused {
        Style::default().fg(app.theme.accent).bg(app.theme.panel).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text_bright).bg(app.theme.panel)
    };
    let mut row = area.y;
    frame.render_widget(
        Paragraph::new(Span::styled("  Accent", header_style)),
        Rect::new(area.x, row, area.width, 1),
    );
    row += 1;

    // swatches, three cells each
    if row < area.bottom() {
        let mut spans = vec![Span::styled("  ", panel)];
        let mut x = area.x + 2;
        for (i, preset) in theme.presets().iter().enumerate() {
            if x + 2 > area.right() {
                break;
            }
            let color = rgb_color(hex_to_rgb(preset.hex()));
            spans.push(Span::styled(SWATCH, Style::default().fg(color).bg(app.theme.panel)));
            spans.push(Span::styled(" ", panel));
            hits.push(Rect::new(x, row, 2, 1), HitTarget::Swatch(i));
            x += 3;
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), Rect::new(area.x, row, area.width, 1));
        row += 1;
    }

    // marker under the highlighted swatch while focused
    if row < area.bottom() {
        if focused {
            let offset = 2 + theme.highlighted() as u16 * 3;
            let marker = format!("{}\u{2594}\u{2594}", " ".repeat(offset as usize));
            frame.render_widget(
                Paragraph::new(Span::styled(marker, Style::default().fg(app.theme.accent).bg(app.theme.panel))),
                Rect::new(area.x, row, area.width, 1),
            );
        }
        row += 1;
    }

    if row < area.bottom() {
        let accent = theme.accent();
        let line = Line::from(vec![
            Span::styled("  ", panel),
            Span::styled(accent.hex().to_string(), Style::default().fg(app.theme.accent).bg(app.theme.panel)),
            Span::styled(format!("  {}", theme.rgb()), Style::default().fg(app.theme.dim).bg(app.theme.panel)),
        ]);
        frame.render_widget(Paragraph::new(line), Rect::new(area.x, row, area.width, 1));
        row += 1;
    }

    if row < area.bottom() {
        let mut spans = vec![Span::styled("  # ", Style::default().fg(app.theme.dim).bg(app.theme.panel))];
        spans.extend(entry_spans(theme.custom(), focused, "custom hex", &app.theme));
        frame.render_widget(Paragraph::new(Line::from(spans)), Rect::new(area.x, row, area.width, 1));
    }
}
