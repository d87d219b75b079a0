//! Dashboard widgets and the event contract they register against.
//!
//! Every widget is optional. A widget that is not enabled in the config is
//! never constructed, so no events reach it and nothing renders for it.
//! Widgets never talk to each other; the app shell routes events and owns
//! focus.

pub mod calendar;
pub mod checklist;
pub mod clock;
pub mod lock_screen;
pub mod notepad;
pub mod sidebar;
pub mod theme_selector;
pub mod wallpaper;

use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;

use crate::io::store::KeyValueStore;
use crate::model::config::DashboardConfig;

use calendar::CalendarController;
use checklist::ChecklistController;
use clock::Clock;
use lock_screen::LockScreen;
use notepad::Notepad;
use sidebar::Sidebar;
use theme_selector::ThemeSelector;
use wallpaper::WallpaperToggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Clock,
    Sidebar,
    Wallpaper,
    Notepad,
    Lock,
    Checklist,
    Calendar,
    Theme,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 8] = [
        WidgetKind::Clock,
        WidgetKind::Sidebar,
        WidgetKind::Wallpaper,
        WidgetKind::Notepad,
        WidgetKind::Lock,
        WidgetKind::Checklist,
        WidgetKind::Calendar,
        WidgetKind::Theme,
    ];

    /// Name used in `[widgets] enabled`
    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::Clock => "clock",
            WidgetKind::Sidebar => "sidebar",
            WidgetKind::Wallpaper => "wallpaper",
            WidgetKind::Notepad => "notepad",
            WidgetKind::Lock => "lock",
            WidgetKind::Checklist => "checklist",
            WidgetKind::Calendar => "calendar",
            WidgetKind::Theme => "theme",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        WidgetKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Widgets that can hold keyboard focus, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Checklist,
    Calendar,
    Notepad,
    Theme,
}

impl Focus {
    pub const ORDER: [Focus; 4] = [Focus::Checklist, Focus::Calendar, Focus::Notepad, Focus::Theme];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Checklist => "Checklist",
            Focus::Calendar => "Calendar",
            Focus::Notepad => "Notepad",
            Focus::Theme => "Theme",
        }
    }
}

/// Event categories a widget can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
    KeyPress,
    Change,
}

/// Clickable regions recorded while rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    SidebarToggle,
    SidebarEntry(Focus),
    Wallpaper,
    ChecklistEntry,
    ChecklistRow(usize),
    ChecklistDelete(usize),
    CalendarPrev,
    CalendarNext,
    CalendarDay(u32),
    Notepad,
    Swatch(usize),
    KeypadKey(char),
}

impl HitTarget {
    pub fn owner(self) -> WidgetKind {
        match self {
            HitTarget::SidebarToggle | HitTarget::SidebarEntry(_) => WidgetKind::Sidebar,
            HitTarget::Wallpaper => WidgetKind::Wallpaper,
            HitTarget::ChecklistEntry | HitTarget::ChecklistRow(_) | HitTarget::ChecklistDelete(_) => {
                WidgetKind::Checklist
            }
            HitTarget::CalendarPrev | HitTarget::CalendarNext | HitTarget::CalendarDay(_) => {
                WidgetKind::Calendar
            }
            HitTarget::Notepad => WidgetKind::Notepad,
            HitTarget::Swatch(_) => WidgetKind::Theme,
            HitTarget::KeypadKey(_) => WidgetKind::Lock,
        }
    }
}

/// Text edits delivered as `Input` events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    Delete,
    DeleteWord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Click(HitTarget),
    Input(InputEdit),
    KeyPress(KeyEvent),
    /// The control's value was committed (e.g. a toggle flipped)
    Change,
}

impl WidgetEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            WidgetEvent::Click(_) => EventKind::Click,
            WidgetEvent::Input(_) => EventKind::Input,
            WidgetEvent::KeyPress(_) => EventKind::KeyPress,
            WidgetEvent::Change => EventKind::Change,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Ignored,
    Handled,
    /// Handled, with a message for the status row
    Notice(String),
}

/// A self-initializing dashboard component with typed event handlers
pub trait Widget {
    fn kind(&self) -> WidgetKind;
    /// Event kinds this widget registers handlers for
    fn bindings(&self) -> &'static [EventKind];
    fn handle(&mut self, event: &WidgetEvent, store: &mut dyn KeyValueStore) -> EventResult;
}

/// Deliver `event` to `widget` if it exists and binds the event's kind.
pub fn dispatch<W: Widget>(
    widget: Option<&mut W>,
    event: &WidgetEvent,
    store: &mut dyn KeyValueStore,
) -> EventResult {
    let Some(widget) = widget else {
        return EventResult::Ignored;
    };
    if !widget.bindings().contains(&event.kind()) {
        return EventResult::Ignored;
    }
    widget.handle(event, store)
}

/// What the terminal can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCaps {
    pub truecolor: bool,
}

impl TerminalCaps {
    pub fn detect() -> Self {
        let colorterm = std::env::var("COLORTERM").unwrap_or_default();
        TerminalCaps {
            truecolor: matches!(colorterm.as_str(), "truecolor" | "24bit"),
        }
    }
}

/// The widgets present on the page
#[derive(Debug, Default)]
pub struct Widgets {
    pub clock: Option<Clock>,
    pub sidebar: Option<Sidebar>,
    pub wallpaper: Option<WallpaperToggle>,
    pub notepad: Option<Notepad>,
    pub lock: Option<LockScreen>,
    pub checklist: Option<ChecklistController>,
    pub calendar: Option<CalendarController>,
    pub theme: Option<ThemeSelector>,
}

impl Widgets {
    /// Initialize every enabled widget independently from the store.
    pub fn init(
        config: &DashboardConfig,
        store: &dyn KeyValueStore,
        now: DateTime<Local>,
        caps: TerminalCaps,
    ) -> Self {
        let mut enabled = Vec::new();
        for name in &config.widgets.enabled {
            match WidgetKind::from_name(name) {
                Some(kind) => enabled.push(kind),
                None => log::warn!("unknown widget in config: {}", name),
            }
        }
        let on = |kind: WidgetKind| enabled.contains(&kind);

        let widgets = Widgets {
            clock: on(WidgetKind::Clock).then(|| Clock::init(&config.clock, now)),
            sidebar: on(WidgetKind::Sidebar).then(Sidebar::init),
            wallpaper: on(WidgetKind::Wallpaper).then(|| WallpaperToggle::init(store, caps)),
            notepad: on(WidgetKind::Notepad).then(|| Notepad::init(store)),
            lock: on(WidgetKind::Lock).then(|| LockScreen::init(&config.lock)),
            checklist: on(WidgetKind::Checklist).then(|| ChecklistController::init(store)),
            calendar: on(WidgetKind::Calendar)
                .then(|| CalendarController::init(store, now.date_naive(), config.calendar.week_start)),
            theme: on(WidgetKind::Theme).then(|| ThemeSelector::init(store, &config.ui.accent_presets)),
        };
        log::info!(
            "widgets ready: {}",
            WidgetKind::ALL
                .iter()
                .filter(|k| widgets.is_present(**k))
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        widgets
    }

    pub fn is_present(&self, kind: WidgetKind) -> bool {
        match kind {
            WidgetKind::Clock => self.clock.is_some(),
            WidgetKind::Sidebar => self.sidebar.is_some(),
            WidgetKind::Wallpaper => self.wallpaper.is_some(),
            WidgetKind::Notepad => self.notepad.is_some(),
            WidgetKind::Lock => self.lock.is_some(),
            WidgetKind::Checklist => self.checklist.is_some(),
            WidgetKind::Calendar => self.calendar.is_some(),
            WidgetKind::Theme => self.theme.is_some(),
        }
    }

    /// Focusable widgets currently on screen, in Tab order. The theme
    /// selector lives in the sidebar and is only reachable while it is open.
    pub fn focusable(&self) -> Vec<Focus> {
        let sidebar_open = self.sidebar.as_ref().is_some_and(|s| s.is_open());
        Focus::ORDER
            .into_iter()
            .filter(|f| match f {
                Focus::Checklist => self.checklist.is_some(),
                Focus::Calendar => self.calendar.is_some(),
                Focus::Notepad => self.notepad.is_some(),
                Focus::Theme => self.theme.is_some() && sidebar_open,
            })
            .collect()
    }

    /// Route an event to the widget of the given kind.
    pub fn dispatch_to(
        &mut self,
        kind: WidgetKind,
        event: &WidgetEvent,
        store: &mut dyn KeyValueStore,
    ) -> EventResult {
        match kind {
            WidgetKind::Clock => EventResult::Ignored,
            WidgetKind::Sidebar => dispatch(self.sidebar.as_mut(), event, store),
            WidgetKind::Wallpaper => dispatch(self.wallpaper.as_mut(), event, store),
            WidgetKind::Notepad => dispatch(self.notepad.as_mut(), event, store),
            WidgetKind::Lock => dispatch(self.lock.as_mut(), event, store),
            WidgetKind::Checklist => dispatch(self.checklist.as_mut(), event, store),
            WidgetKind::Calendar => dispatch(self.calendar.as_mut(), event, store),
            WidgetKind::Theme => dispatch(self.theme.as_mut(), event, store),
        }
    }
}

impl From<Focus> for WidgetKind {
    fn from(focus: Focus) -> Self {
        match focus {
            Focus::Checklist => WidgetKind::Checklist,
            Focus::Calendar => WidgetKind::Calendar,
            Focus::Notepad => WidgetKind::Notepad,
            Focus::Theme => WidgetKind::Theme,
        }
    }
}

/// Log a failed write and turn it into a status notice.
pub(crate) fn save_failed(what: &str, err: &dyn std::error::Error) -> EventResult {
    log::warn!("could not save {}: {}", what, err);
    EventResult::Notice(format!("Could not save {}", what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn now() -> DateTime<Local> {
        Local::now()
    }

    fn config_with(enabled: &[&str]) -> DashboardConfig {
        let mut config = DashboardConfig::default();
        config.widgets.enabled = enabled.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn default_config_builds_every_widget() {
        let store = MemoryStore::new();
        let widgets = Widgets::init(
            &DashboardConfig::default(),
            &store,
            now(),
            TerminalCaps { truecolor: true },
        );
        for kind in WidgetKind::ALL {
            assert!(widgets.is_present(kind), "{} missing", kind.name());
        }
    }

    #[test]
    fn disabled_widget_ignores_events_and_writes_nothing() {
        let mut store = MemoryStore::new();
        let mut widgets = Widgets::init(
            &config_with(&["clock", "calendar", "bogus"]),
            &store,
            now(),
            TerminalCaps { truecolor: true },
        );
        assert!(widgets.checklist.is_none());

        let click = WidgetEvent::Click(HitTarget::ChecklistDelete(0));
        assert_eq!(
            widgets.dispatch_to(WidgetKind::Checklist, &click, &mut store),
            EventResult::Ignored
        );
        let enter = WidgetEvent::KeyPress(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            widgets.dispatch_to(WidgetKind::Notepad, &enter, &mut store),
            EventResult::Ignored
        );
        assert_eq!(store.write_count(), 0);
        assert_eq!(widgets.focusable(), vec![Focus::Calendar]);
    }

    #[test]
    fn unbound_event_kind_is_ignored() {
        let mut store = MemoryStore::new();
        let mut widgets = Widgets::init(
            &config_with(&["wallpaper"]),
            &store,
            now(),
            TerminalCaps { truecolor: true },
        );
        let typed = WidgetEvent::Input(InputEdit::Insert('x'));
        assert_eq!(
            widgets.dispatch_to(WidgetKind::Wallpaper, &typed, &mut store),
            EventResult::Ignored
        );
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn theme_focusable_only_with_open_sidebar() {
        let store = MemoryStore::new();
        let mut widgets = Widgets::init(
            &config_with(&["sidebar", "theme"]),
            &store,
            now(),
            TerminalCaps { truecolor: true },
        );
        assert!(widgets.focusable().is_empty());
        if let Some(sidebar) = widgets.sidebar.as_mut() {
            sidebar.toggle();
        }
        assert_eq!(widgets.focusable(), vec![Focus::Theme]);
    }

    #[test]
    fn widget_names_round_trip() {
        for kind in WidgetKind::ALL {
            assert_eq!(WidgetKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(WidgetKind::from_name("weather"), None);
    }
}
