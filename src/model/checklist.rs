use serde::{Deserialize, Serialize};

/// Records carrying one boolean that the list store can flip in place
pub trait Toggle {
    fn toggle(&mut self);
}

/// A checklist row. Identity is its position in the list; there is no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub checked: bool,
}

impl ChecklistItem {
    /// Build an unchecked item from user input. Returns `None` when the
    /// trimmed text is empty.
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(ChecklistItem {
            text: text.to_string(),
            checked: false,
        })
    }
}

impl Toggle for ChecklistItem {
    fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}
