use crate::io::store::{KeyValueStore, keys};
use crate::model::wallpaper::WallpaperMode;
use crate::ops::field::{PersistedField, Plain};

use super::{EventKind, EventResult, HitTarget, TerminalCaps, Widget, WidgetEvent, WidgetKind, save_failed};

/// Video/image background switch persisted under `wallpaperState`
#[derive(Debug)]
pub struct WallpaperToggle {
    field: PersistedField<WallpaperMode, Plain>,
    mode: WallpaperMode,
    playable: bool,
}

impl WallpaperToggle {
    pub fn init(store: &dyn KeyValueStore, caps: TerminalCaps) -> Self {
        let field = PersistedField::new(keys::WALLPAPER, WallpaperMode::default());
        let mode = field.load(store);
        let toggle = WallpaperToggle {
            field,
            mode,
            playable: caps.truecolor,
        };
        toggle.warn_if_blocked();
        toggle
    }

    pub fn mode(&self) -> WallpaperMode {
        self.mode
    }

    /// The animated background is running
    pub fn shows_video(&self) -> bool {
        self.mode == WallpaperMode::Video && self.playable
    }

    /// Video was chosen but the terminal cannot play it
    pub fn video_blocked(&self) -> bool {
        self.mode == WallpaperMode::Video && !self.playable
    }

    fn warn_if_blocked(&self) {
        if self.video_blocked() {
            log::warn!("video wallpaper unavailable (terminal lacks truecolor), showing image");
        }
    }

    fn flip(&mut self, store: &mut dyn KeyValueStore) -> EventResult {
        let next = self.mode.toggled();
        if let Err(e) = self.field.save(store, &next) {
            return save_failed("wallpaper", &e);
        }
        self.mode = next;
        self.warn_if_blocked();
        EventResult::Handled
    }
}

impl Widget for WallpaperToggle {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Wallpaper
    }

    fn bindings(&self) -> &'static [EventKind] {
        &[EventKind::Click, EventKind::Change]
    }

    fn handle(&mut self, event: &WidgetEvent, store: &mut dyn KeyValueStore) -> EventResult {
        match event {
            WidgetEvent::Click(HitTarget::Wallpaper) | WidgetEvent::Change => self.flip(store),
            _ => EventResult::Ignored,
        }
    }
}
