use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::spans_width;

const HINT: &str = "Tab focus  Ctrl+B sidebar  F1 help  Ctrl+Q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = match (&app.notice, app.focus) {
        (Some(notice), _) => vec![Span::styled(
            format!(" {}", notice),
            Style::default().fg(app.theme.yellow).bg(bg),
        )],
        (None, Some(focus)) => vec![Span::styled(
            format!(" {}", focus.label()),
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )],
        (None, None) => Vec::new(),
    };

    let content_width = spans_width(&spans);
    let hint_width = HINT.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(HINT, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_W, render_to_string, test_app};

    #[test]
    fn shows_focus_and_hint() {
        let app = test_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with(" Checklist"));
        assert!(output.ends_with("Ctrl+Q quit"));
    }

    #[test]
    fn notice_replaces_focus_label() {
        let mut app = test_app();
        app.notice = Some("Could not save checklist".into());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with(" Could not save checklist"));
    }

    #[test]
    fn hint_dropped_when_too_narrow() {
        let app = test_app();
        let output = render_to_string(20, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, " Checklist");
    }
}
