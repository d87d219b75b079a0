use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::widgets::Focus;

use super::helpers::centered_rect;

/// Render the help overlay (toggled with F1)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.panel;
    let key_style = Style::default()
        .fg(app.theme.accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    match app.focus {
        Some(Focus::Checklist) => {
            lines.push(Line::from(Span::styled(" Checklist", header_style)));
            add_binding(&mut lines, " Enter", "Add item / toggle row", key_style, desc_style);
            add_binding(&mut lines, " \u{2191}\u{2193}", "Move between entry and rows", key_style, desc_style);
            add_binding(&mut lines, " Space", "Toggle row", key_style, desc_style);
            add_binding(&mut lines, " x/Del", "Delete row", key_style, desc_style);
        }
        Some(Focus::Calendar) => {
            lines.push(Line::from(Span::styled(" Calendar", header_style)));
            add_binding(&mut lines, " \u{2190}\u{2192}\u{2191}\u{2193}", "Select day", key_style, desc_style);
            add_binding(&mut lines, " PgUp/PgDn", "Previous/next month", key_style, desc_style);
            add_binding(&mut lines, " Alt+[ / Alt+]", "Previous/next month", key_style, desc_style);
            add_binding(&mut lines, " (type)", "Edit the day's note", key_style, desc_style);
        }
        Some(Focus::Notepad) => {
            lines.push(Line::from(Span::styled(" Notepad", header_style)));
            add_binding(&mut lines, " (type)", "Edit, saved as you go", key_style, desc_style);
            add_binding(&mut lines, " Alt+Bksp", "Delete word", key_style, desc_style);
        }
        Some(Focus::Theme) => {
            lines.push(Line::from(Span::styled(" Accent", header_style)));
            add_binding(&mut lines, " \u{2190}\u{2192}", "Choose swatch", key_style, desc_style);
            add_binding(&mut lines, " Enter", "Apply swatch or typed hex", key_style, desc_style);
            add_binding(&mut lines, " Esc", "Clear typed hex", key_style, desc_style);
        }
        None => {}
    }
    lines.push(Line::from(""));

    // Global keys
    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " Tab/S-Tab", "Next/previous widget", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+B", "Toggle sidebar", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+W", "Toggle wallpaper", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+L", "Lock", key_style, desc_style);
    add_binding(&mut lines, " F1", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+Q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
