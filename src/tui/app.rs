use std::io;
use std::path::Path;

use chrono::{DateTime, Local};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};

use crate::io::store::{FileStore, KeyValueStore};
use crate::model::DashboardConfig;
use crate::ops::clock::until_next_tick;

use super::input;
use super::render;
use super::theme::Theme;
use super::widgets::{EventResult, Focus, HitTarget, TerminalCaps, WidgetEvent, WidgetKind, Widgets};

/// Clickable regions recorded by the last render, in draw order
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the cell. Later regions are drawn over earlier ones.
    pub fn resolve(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Main application state
pub struct App {
    pub config: DashboardConfig,
    pub store: Box<dyn KeyValueStore>,
    pub widgets: Widgets,
    pub theme: Theme,
    /// Widget receiving keyboard input
    pub focus: Option<Focus>,
    pub now: DateTime<Local>,
    /// Clock ticks since start; drives the wallpaper animation
    pub ticks: u64,
    pub show_help: bool,
    pub should_quit: bool,
    /// Transient message for the status row
    pub notice: Option<String>,
    pub hit_map: HitMap,
}

impl App {
    pub fn new(
        config: DashboardConfig,
        store: Box<dyn KeyValueStore>,
        now: DateTime<Local>,
        caps: TerminalCaps,
    ) -> Self {
        let widgets = Widgets::init(&config, store.as_ref(), now, caps);
        let theme = Theme::from_config(&config.ui);
        let focus = widgets.focusable().first().copied();
        let mut app = App {
            config,
            store,
            widgets,
            theme,
            focus,
            now,
            ticks: 0,
            show_help: false,
            should_quit: false,
            notice: None,
            hit_map: HitMap::default(),
        };
        app.refresh_accent();
        app
    }

    /// One clock tick: update the clock, the calendar's today marker and the
    /// animation frame.
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.now = now;
        self.ticks = self.ticks.wrapping_add(1);
        if let Some(clock) = self.widgets.clock.as_mut() {
            clock.tick(now);
        }
        if let Some(calendar) = self.widgets.calendar.as_mut() {
            calendar.set_today(now.date_naive());
        }
    }

    /// Re-derive the theme accent from the selector's current color.
    pub fn refresh_accent(&mut self) {
        if let Some(theme) = self.widgets.theme.as_ref() {
            self.theme.set_accent(theme.rgb());
        }
    }

    pub fn is_locked(&self) -> bool {
        self.widgets.lock.as_ref().is_some_and(|l| l.is_locked())
    }

    /// Route `event` to the widget of `kind` and apply the shell-level effects
    /// of the result.
    pub fn dispatch(&mut self, kind: WidgetKind, event: WidgetEvent) -> EventResult {
        let result = self.widgets.dispatch_to(kind, &event, self.store.as_mut());
        if let EventResult::Notice(message) = &result {
            self.notice = Some(message.clone());
        }
        match kind {
            WidgetKind::Theme => self.refresh_accent(),
            WidgetKind::Sidebar => {
                let request = self.widgets.sidebar.as_mut().and_then(|s| s.take_focus_request());
                if let Some(focus) = request {
                    self.focus = Some(focus);
                }
            }
            WidgetKind::Wallpaper => {
                if self.widgets.wallpaper.as_ref().is_some_and(|w| w.video_blocked()) {
                    self.notice = Some("Video wallpaper unavailable, showing image".to_string());
                }
            }
            _ => {}
        }
        self.settle_focus();
        result
    }

    /// Move focus to the next (or previous) focusable widget.
    pub fn cycle_focus(&mut self, forward: bool) {
        let order = self.widgets.focusable();
        if order.is_empty() {
            self.focus = None;
            return;
        }
        let current = self.focus.and_then(|f| order.iter().position(|o| *o == f));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
        };
        self.focus = Some(order[next]);
    }

    /// Drop focus from a widget that is no longer reachable.
    fn settle_focus(&mut self) {
        let order = self.widgets.focusable();
        if self.focus.is_none_or(|f| !order.contains(&f)) {
            self.focus = order.first().copied();
        }
    }
}

/// Run the TUI application
pub fn run(data_dir: &Path, config: DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(data_dir)?;
    log::info!("dashboard starting with store {}", store.path().display());
    let mouse = config.ui.mouse;
    let mut app = App::new(config, Box::new(store), Local::now(), TerminalCaps::detect());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("dashboard closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(until_next_tick(&Local::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        let now = Local::now();
        if now.timestamp() != app.now.timestamp() {
            app.tick(now);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
