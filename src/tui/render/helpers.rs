use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::tui::input::text::TextBuffer;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Cursor glyph drawn inside text entries
pub(super) const CURSOR: &str = "\u{258C}";

/// Bordered panel; the border takes the accent color while focused.
pub(super) fn panel_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused { theme.accent } else { theme.dim };
    let title_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border).bg(theme.panel))
        .title(Span::styled(format!(" {} ", title), title_style))
        .style(Style::default().bg(theme.panel))
}

/// Spans for a single-line entry, with the cursor glyph when focused and a
/// dim placeholder when empty and unfocused.
pub(super) fn entry_spans<'a>(
    buffer: &'a TextBuffer,
    focused: bool,
    placeholder: &'a str,
    theme: &Theme,
) -> Vec<Span<'a>> {
    let text_style = Style::default().fg(theme.text_bright).bg(theme.panel);
    if !focused {
        if buffer.is_empty() {
            return vec![Span::styled(placeholder, Style::default().fg(theme.dim).bg(theme.panel))];
        }
        return vec![Span::styled(buffer.as_str(), text_style)];
    }
    let (before, after) = buffer.split_at_cursor();
    vec![
        Span::styled(before, text_style),
        Span::styled(CURSOR, Style::default().fg(theme.accent).bg(theme.panel)),
        Span::styled(after, text_style),
    ]
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Linear blend between two RGB colors; other colors return `a`.
pub(super) fn blend(a: Color, b: Color, t: f32) -> Color {
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => a,
    }
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A fixed-size rectangle centered in `area`, shrunk to fit
pub(super) fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints_and_midpoint() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(Color::Reset, b, 0.5), Color::Reset);
    }

    #[test]
    fn centered_fixed_shrinks_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_fixed(6, 2, area), Rect::new(2, 1, 6, 2));
        assert_eq!(centered_fixed(20, 20, area), area);
    }
}
