use crossterm::event::KeyCode;

use crate::io::store::{KeyValueStore, keys};
use crate::model::color::{AccentColor, Rgb};
use crate::ops::field::{PersistedField, Plain};
use crate::tui::input::text::TextBuffer;

use super::{EventKind, EventResult, HitTarget, InputEdit, Widget, WidgetEvent, WidgetKind, save_failed};

/// Accent color picker shown inside the sidebar.
///
/// Left/Right move between preset swatches; typing fills the custom hex
/// entry. Enter applies the custom entry if there is one, otherwise the
/// highlighted swatch.
#[derive(Debug)]
pub struct ThemeSelector {
    field: PersistedField<AccentColor, Plain>,
    accent: AccentColor,
    presets: Vec<AccentColor>,
    highlighted: usize,
    custom: TextBuffer,
}

impl ThemeSelector {
    pub fn init(store: &dyn KeyValueStore, presets: &[String]) -> Self {
        let field = PersistedField::new(keys::ACCENT_COLOR, AccentColor::default());
        let accent = field.load(store);
        let presets: Vec<AccentColor> = presets
            .iter()
            .filter_map(|hex| {
                let parsed = AccentColor::parse(hex);
                if parsed.is_none() {
                    log::warn!("ignoring invalid accent preset: {}", hex);
                }
                parsed
            })
            .collect();
        let highlighted = presets.iter().position(|p| p == &accent).unwrap_or(0);
        ThemeSelector {
            field,
            accent,
            presets,
            highlighted,
            custom: TextBuffer::default(),
        }
    }

    pub fn accent(&self) -> &AccentColor {
        &self.accent
    }

    /// Triple derived from the current accent
    pub fn rgb(&self) -> Rgb {
        self.accent.rgb()
    }

    pub fn presets(&self) -> &[AccentColor] {
        &self.presets
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn custom(&self) -> &TextBuffer {
        &self.custom
    }

    pub fn apply(&mut self, store: &mut dyn KeyValueStore, color: AccentColor) -> EventResult {
        if let Err(e) = self.field.save(store, &color) {
            return save_failed("accent color", &e);
        }
        log::debug!("accent set to {}", color);
        self.accent = color;
        EventResult::Handled
    }

    fn apply_custom(&mut self, store: &mut dyn KeyValueStore) -> EventResult {
        match AccentColor::parse(self.custom.as_str()) {
            Some(color) => {
                self.custom.clear();
                self.apply(store, color)
            }
            None => EventResult::Notice(format!("Not a hex color: {}", self.custom.as_str().trim())),
        }
    }

    fn apply_swatch(&mut self, store: &mut dyn KeyValueStore, index: usize) -> EventResult {
        let Some(color) = self.presets.get(index).cloned() else {
            return EventResult::Ignored;
        };
        self.highlighted = index;
        self.apply(store, color)
    }
}

impl Widget for ThemeSelector {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Theme
    }

    fn bindings(&self) -> &'static [EventKind] {
        &[EventKind::Click, EventKind::Input, EventKind::KeyPress]
    }

    fn handle(&mut self, event: &WidgetEvent, store: &mut dyn KeyValueStore) -> EventResult {
        match event {
            WidgetEvent::Click(HitTarget::Swatch(i)) => self.apply_swatch(store, *i),
            WidgetEvent::Input(edit) => {
                match edit {
                    InputEdit::Insert(c) => self.custom.insert(*c),
                    InputEdit::Backspace => {
                        self.custom.backspace();
                    }
                    InputEdit::Delete => {
                        self.custom.delete_forward();
                    }
                    InputEdit::DeleteWord => self.custom.clear(),
                }
                EventResult::Handled
            }
            WidgetEvent::KeyPress(key) => match key.code {
                KeyCode::Left if !self.presets.is_empty() => {
                    self.highlighted = self.highlighted.checked_sub(1).unwrap_or(self.presets.len() - 1);
                    EventResult::Handled
                }
                KeyCode::Right if !self.presets.is_empty() => {
                    self.highlighted = (self.highlighted + 1) % self.presets.len();
                    EventResult::Handled
                }
                KeyCode::Enter if !self.custom.as_str().trim().is_empty() => self.apply_custom(store),
                KeyCode::Enter => self.apply_swatch(store, self.highlighted),
                KeyCode::Esc => {
                    self.custom.clear();
                    EventResult::Handled
                }
                _ => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::model::color::DEFAULT_ACCENT_RGB;
    use crate::model::config::UiConfig;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn selector(store: &MemoryStore) -> ThemeSelector {
        ThemeSelector::init(store, &UiConfig::default().accent_presets)
    }

    fn key(code: KeyCode) -> WidgetEvent {
        WidgetEvent::KeyPress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn default_accent_without_stored_value() {
        let store = MemoryStore::new();
        let theme = selector(&store);
        assert_eq!(theme.accent().hex(), "#4A90E2");
        assert_eq!(theme.rgb(), DEFAULT_ACCENT_RGB);
        assert_eq!(theme.highlighted(), 0);
    }

    #[test]
    fn swatch_click_persists_and_rederives_rgb() {
        let mut store = MemoryStore::new();
        let mut theme = selector(&store);
        theme.handle(&WidgetEvent::Click(HitTarget::Swatch(2)), &mut store);
        assert_eq!(store.get(keys::ACCENT_COLOR).as_deref(), Some("#50C878"));
        assert_eq!(theme.rgb(), Rgb { r: 0x50, g: 0xC8, b: 0x78 });
        assert_eq!(selector(&store).highlighted(), 2);
    }

    #[test]
    fn custom_hex_is_applied_with_hash() {
        let mut store = MemoryStore::new();
        let mut theme = selector(&store);
        for c in "03f".chars() {
            theme.handle(&WidgetEvent::Input(InputEdit::Insert(c)), &mut store);
        }
        assert_eq!(theme.handle(&key(KeyCode::Enter), &mut store), EventResult::Handled);
        assert_eq!(store.get(keys::ACCENT_COLOR).as_deref(), Some("#03f"));
        assert_eq!(theme.rgb(), Rgb { r: 0, g: 0x33, b: 0xFF });
        assert!(theme.custom().is_empty());
    }

    #[test]
    fn invalid_custom_hex_is_rejected_without_writing() {
        let mut store = MemoryStore::new();
        let mut theme = selector(&store);
        for c in "blue".chars() {
            theme.handle(&WidgetEvent::Input(InputEdit::Insert(c)), &mut store);
        }
        let result = theme.handle(&key(KeyCode::Enter), &mut store);
        assert!(matches!(result, EventResult::Notice(_)));
        assert_eq!(store.write_count(), 0);
        assert_eq!(theme.accent().hex(), "#4A90E2");
    }

    #[test]
    fn arrows_wrap_and_enter_applies_highlight() {
        let mut store = MemoryStore::new();
        let mut theme = selector(&store);
        theme.handle(&key(KeyCode::Left), &mut store);
        assert_eq!(theme.highlighted(), theme.presets().len() - 1);
        theme.handle(&key(KeyCode::Enter), &mut store);
        assert_eq!(store.get(keys::ACCENT_COLOR).as_deref(), Some("#1ABC9C"));
    }

    #[test]
    fn malformed_stored_accent_falls_back_to_default_triple() {
        let mut store = MemoryStore::new();
        store.set(keys::ACCENT_COLOR, "not-a-color").unwrap();
        let theme = selector(&store);
        assert_eq!(theme.accent().hex(), "not-a-color");
        assert_eq!(theme.rgb(), DEFAULT_ACCENT_RGB);
    }
}
