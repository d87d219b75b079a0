use crossterm::event::{KeyCode, KeyModifiers};

use crate::io::store::KeyValueStore;

use super::{EventKind, EventResult, Focus, HitTarget, Widget, WidgetEvent, WidgetKind};

/// Collapsible side panel listing the focusable widgets. Not persisted.
#[derive(Debug, Default)]
pub struct Sidebar {
    open: bool,
    focus_request: Option<Focus>,
}

impl Sidebar {
    pub fn init() -> Self {
        Sidebar::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Widget the user picked from the list since the last call
    pub fn take_focus_request(&mut self) -> Option<Focus> {
        self.focus_request.take()
    }
}

impl Widget for Sidebar {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Sidebar
    }

    fn bindings(&self) -> &'static [EventKind] {
        &[EventKind::Click, EventKind::KeyPress]
    }

    fn handle(&mut self, event: &WidgetEvent, _store: &mut dyn KeyValueStore) -> EventResult {
        match event {
            WidgetEvent::Click(HitTarget::SidebarToggle) => {
                self.toggle();
                EventResult::Handled
            }
            WidgetEvent::Click(HitTarget::SidebarEntry(focus)) if self.open => {
                self.focus_request = Some(*focus);
                EventResult::Handled
            }
            WidgetEvent::KeyPress(key)
                if key.code == KeyCode::Char('b') && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.toggle();
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }
}
