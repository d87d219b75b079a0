use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::WallpaperMode;
use crate::tui::app::{App, HitMap};
use crate::tui::widgets::HitTarget;

use super::helpers::spans_width;

const MENU: &str = " \u{2630} ";

/// Render the top bar: sidebar toggle, clock, and wallpaper switch
pub fn render_top_bar(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let bg = app.theme.background;
    let bar = Style::default().bg(bg);
    frame.render_widget(Paragraph::new("").style(bar), area);

    let mut left = 0u16;
    if let Some(sidebar) = app.widgets.sidebar.as_ref() {
        let style = if sidebar.is_open() {
            Style::default().fg(app.theme.accent).bg(bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let width = MENU.chars().count() as u16;
        let rect = Rect::new(area.x, area.y, width.min(area.width), 1);
        frame.render_widget(Paragraph::new(Span::styled(MENU, style)), rect);
        hits.push(rect, HitTarget::SidebarToggle);
        left = width;
    }

    let mut right = 0u16;
    if let Some(wallpaper) = app.widgets.wallpaper.as_ref() {
        let label = match wallpaper.mode() {
            WallpaperMode::Video if wallpaper.video_blocked() => " \u{25A3} image (video unavailable) ",
            WallpaperMode::Video => " \u{25B6} video ",
            WallpaperMode::Image => " \u{25A3} image ",
        };
        let style = Style::default().fg(app.theme.dim).bg(bg);
        let width = (label.chars().count() as u16).min(area.width.saturating_sub(left));
        let rect = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
        frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        hits.push(rect, HitTarget::Wallpaper);
        right = width;
    }

    if let Some(clock) = app.widgets.clock.as_ref() {
        let reading = clock.reading();
        let spans = vec![
            Span::styled(
                reading.time.as_str(),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", bar),
            Span::styled(reading.date.as_str(), Style::default().fg(app.theme.text).bg(bg)),
        ];
        let width = spans_width(&spans) as u16;
        let free = area.width.saturating_sub(left + right);
        // centered on the whole bar when it fits, else in the gap
        let centered = area.width.saturating_sub(width) / 2;
        let x = if centered >= left && centered + width <= area.width - right {
            centered
        } else {
            left
        };
        let rect = Rect::new(area.x + x, area.y, width.min(free), 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
