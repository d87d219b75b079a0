use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::tui::app::App;

use super::helpers::blend;

/// Rows per full color cycle of the animated wallpaper
const WAVE_ROWS: f32 = 12.0;

/// Paint the dashboard background.
///
/// Video mode drifts a band of accent color down the screen, one row per
/// tick. Image mode, and video when the terminal cannot show it, is a still
/// gradient. Without a wallpaper widget the background is flat.
pub fn render_wallpaper(frame: &mut Frame, app: &App, area: Rect) {
    let base = app.theme.background;
    let Some(wallpaper) = app.widgets.wallpaper.as_ref() else {
        frame.render_widget(Block::default().style(Style::default().bg(base)), area);
        return;
    };

    let height = area.height.max(1);
    for offset in 0..area.height {
        let t = if wallpaper.shows_video() {
            let phase = (f32::from(offset) + app.ticks as f32) / WAVE_ROWS * std::f32::consts::TAU;
            (phase.sin() + 1.0) / 2.0 * 0.35
        } else {
            f32::from(offset) / f32::from(height) * 0.25
        };
        let color = blend(base, app.theme.accent, t);
        let row = Rect::new(area.x, area.y + offset, area.width, 1);
        frame.render_widget(Block::default().style(Style::default().bg(color)), row);
    }
}
